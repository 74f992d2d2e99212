//! The fieldnorm represents the length associated to
//! a given field of a given document.
//!
//! This metric is important to compute the score of a
//! document : a language model built from a short field
//! gives more weight to every occurrence of a term than one built
//! from a long field.
//!
//! It encodes `fieldnorm` on one byte with some precision loss: lengths
//! up to 40 are exact, larger ones are placed on a log-scale
//! that takes values from `0` to `255`.
//!
//! A value on this scale is identified by a `fieldnorm_id`.
//! Apart from compression, this scale also makes it possible to
//! precompute functions of the fieldnorm in a very short array.

/// Ids below this value encode the length as is.
const IDENTITY_PART: u8 = 24u8;

const fn decode_field_norm_exp_part(b: u8) -> u32 {
    let bits = (b & 0b00000111) as u32;
    let shift = b >> 3;
    if shift == 0 {
        bits
    } else {
        (bits | 8u32) << ((shift - 1u8) as u32)
    }
}

const fn decode_fieldnorm_byte(b: u8) -> u32 {
    if b < IDENTITY_PART {
        b as u32
    } else {
        (IDENTITY_PART as u32) + decode_field_norm_exp_part(b - IDENTITY_PART)
    }
}

const fn compute_field_norms_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut id = 0;
    while id < 256 {
        table[id] = decode_fieldnorm_byte(id as u8);
        id += 1;
    }
    table
}

/// Field length associated to each `fieldnorm_id`.
pub const FIELD_NORMS_TABLE: [u32; 256] = compute_field_norms_table();

/// Decodes a `fieldnorm_id` into the smallest field length it stands for.
#[inline(always)]
pub fn id_to_fieldnorm(id: u8) -> u32 {
    FIELD_NORMS_TABLE[id as usize]
}

/// Encodes a field length on one byte, rounding down.
#[inline(always)]
pub fn fieldnorm_to_id(fieldnorm: u32) -> u8 {
    FIELD_NORMS_TABLE
        .binary_search(&fieldnorm)
        .unwrap_or_else(|idx| idx - 1) as u8
}

/// Document length used for scoring a given `fieldnorm_id`.
///
/// A zero norm decodes to a length of `1`: no document reaches a
/// similarity as an empty field.
#[inline(always)]
pub fn fieldnorm_id_to_doc_len(id: u8) -> f64 {
    if id == 0 {
        1.0
    } else {
        id_to_fieldnorm(id) as f64
    }
}

/// Tracks the tokens of one field of one document while it is being
/// indexed.
///
/// Tokens sharing the position of the previous token (synonyms, for instance)
/// are counted as overlaps. Whether they are part of the length that ends up
/// in the norm is up to the similarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldInvertState {
    length: u32,
    num_overlap: u32,
}

impl FieldInvertState {
    /// Creates a state from already counted tokens.
    ///
    /// `num_overlap` is capped at `length`.
    pub fn new(length: u32, num_overlap: u32) -> FieldInvertState {
        FieldInvertState {
            length,
            num_overlap: num_overlap.min(length),
        }
    }

    /// Records one token. `position_increment == 0` marks an overlap.
    pub fn add_token(&mut self, position_increment: u32) {
        self.length += 1;
        if position_increment == 0 {
            self.num_overlap += 1;
        }
    }

    /// Total number of tokens, overlaps included.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Number of tokens that shared the position of the previous token.
    pub fn num_overlap(&self) -> u32 {
        self.num_overlap
    }

    /// Number of tokens that count toward the field length.
    pub fn num_terms(&self, discount_overlaps: bool) -> u32 {
        if discount_overlaps {
            self.length - self.num_overlap
        } else {
            self.length
        }
    }
}

#[cfg(test)]
mod tests {

    use super::{
        fieldnorm_id_to_doc_len, fieldnorm_to_id, id_to_fieldnorm, FieldInvertState,
        FIELD_NORMS_TABLE,
    };

    #[test]
    fn test_decode_code() {
        assert_eq!(fieldnorm_to_id(0), 0);
        assert_eq!(fieldnorm_to_id(1), 1);
        for i in 0..41 {
            assert_eq!(fieldnorm_to_id(i), i as u8);
        }
        assert_eq!(fieldnorm_to_id(41), 40);
        assert_eq!(fieldnorm_to_id(42), 41);
        for id in 43..256 {
            let field_norm = FIELD_NORMS_TABLE[id];
            assert_eq!(id_to_fieldnorm(id as u8), field_norm);
            assert_eq!(fieldnorm_to_id(field_norm), id as u8);
            assert_eq!(fieldnorm_to_id(field_norm - 1), id as u8 - 1);
            assert_eq!(fieldnorm_to_id(field_norm + 1), id as u8);
        }
    }

    #[test]
    fn test_known_table_values() {
        assert_eq!(FIELD_NORMS_TABLE[40], 40);
        assert_eq!(FIELD_NORMS_TABLE[41], 42);
        assert_eq!(FIELD_NORMS_TABLE[89], 1_176);
        assert_eq!(FIELD_NORMS_TABLE[100], 3_096);
        assert_eq!(FIELD_NORMS_TABLE[255], 2_013_265_944);
    }

    #[test]
    fn test_u32_max() {
        assert_eq!(fieldnorm_to_id(u32::MAX), u8::MAX);
    }

    #[test]
    fn test_zero_norm_is_length_one() {
        assert_eq!(fieldnorm_id_to_doc_len(0), 1.0);
        assert_eq!(fieldnorm_id_to_doc_len(1), 1.0);
        assert_eq!(fieldnorm_id_to_doc_len(7), 7.0);
    }

    #[test]
    fn test_invert_state_overlaps() {
        let mut state = FieldInvertState::default();
        // "quick fast(synonym of quick) fox"
        state.add_token(1);
        state.add_token(0);
        state.add_token(1);
        assert_eq!(state.length(), 3);
        assert_eq!(state.num_overlap(), 1);
        assert_eq!(state.num_terms(true), 2);
        assert_eq!(state.num_terms(false), 3);
        assert_eq!(FieldInvertState::new(2, 5).num_terms(true), 0);
    }
}
