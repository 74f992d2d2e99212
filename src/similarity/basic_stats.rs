use std::fmt;

/// Statistics of one term in one field, shared by every document
/// scored for that term during a query.
///
/// A record is created zeroed by [`SimilarityBase::new_stats`](super::SimilarityBase::new_stats),
/// filled once from the index statistics, and then only read.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicStats {
    field: String,
    boost: f64,
    number_of_documents: u64,
    number_of_field_tokens: u64,
    avg_field_length: f64,
    doc_freq: u64,
    total_term_freq: u64,
}

impl BasicStats {
    /// Creates zeroed statistics for `field` and the query-time `boost`.
    pub fn new<S: ToString>(field: S, boost: f64) -> BasicStats {
        BasicStats {
            field: field.to_string(),
            boost,
            number_of_documents: 0,
            number_of_field_tokens: 0,
            avg_field_length: 0.0,
            doc_freq: 0,
            total_term_freq: 0,
        }
    }

    /// Name of the field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Query-time boost.
    pub fn boost(&self) -> f64 {
        self.boost
    }

    /// Number of documents having the field.
    pub fn number_of_documents(&self) -> u64 {
        self.number_of_documents
    }

    /// Sets `number_of_documents`.
    pub fn set_number_of_documents(&mut self, number_of_documents: u64) {
        self.number_of_documents = number_of_documents;
    }

    /// Number of tokens of the field, over the whole collection.
    pub fn number_of_field_tokens(&self) -> u64 {
        self.number_of_field_tokens
    }

    /// Sets `number_of_field_tokens`.
    pub fn set_number_of_field_tokens(&mut self, number_of_field_tokens: u64) {
        self.number_of_field_tokens = number_of_field_tokens;
    }

    /// Average length of the field.
    pub fn avg_field_length(&self) -> f64 {
        self.avg_field_length
    }

    /// Sets `avg_field_length`.
    pub fn set_avg_field_length(&mut self, avg_field_length: f64) {
        self.avg_field_length = avg_field_length;
    }

    /// Number of documents containing the term.
    pub fn doc_freq(&self) -> u64 {
        self.doc_freq
    }

    /// Sets `doc_freq`.
    pub fn set_doc_freq(&mut self, doc_freq: u64) {
        self.doc_freq = doc_freq;
    }

    /// Number of occurrences of the term, over the whole collection.
    pub fn total_term_freq(&self) -> u64 {
        self.total_term_freq
    }

    /// Sets `total_term_freq`.
    pub fn set_total_term_freq(&mut self, total_term_freq: u64) {
        self.total_term_freq = total_term_freq;
    }
}

/// Gives the scoring pipeline access to the [`BasicStats`] embedded in a
/// similarity specific record.
pub trait SimilarityStats: fmt::Debug + Send + Sync + 'static {
    /// The embedded basic statistics.
    fn basic(&self) -> &BasicStats;

    /// The embedded basic statistics, for filling.
    fn basic_mut(&mut self) -> &mut BasicStats;
}

impl SimilarityStats for BasicStats {
    fn basic(&self) -> &BasicStats {
        self
    }

    fn basic_mut(&mut self) -> &mut BasicStats {
        self
    }
}
