//! Index-wide statistics consumed by the similarities.
//!
//! Both records are produced by the index (summed over all segments of a
//! searcher) once per field and per query, and only read here.

use crate::{Result, SimilarityError};

/// Statistics of one field, gathered over the whole collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionStatistics {
    field: String,
    max_doc: u64,
    doc_count: u64,
    sum_total_term_freq: u64,
    sum_doc_freq: u64,
}

impl CollectionStatistics {
    /// Creates statistics for `field`.
    ///
    /// - `max_doc`: number of documents, with or without the field.
    /// - `doc_count`: number of documents having at least one term for the field.
    /// - `sum_total_term_freq`: number of tokens of the field, over all documents.
    /// - `sum_doc_freq`: number of postings of the field.
    ///
    /// Returns `SimilarityError::InvalidStatistics` when the counts cannot come
    /// from a non-empty field.
    pub fn new<S: ToString>(
        field: S,
        max_doc: u64,
        doc_count: u64,
        sum_total_term_freq: u64,
        sum_doc_freq: u64,
    ) -> Result<CollectionStatistics> {
        if max_doc == 0 {
            return Err(invalid("max_doc must be positive"));
        }
        if doc_count == 0 {
            return Err(invalid("doc_count must be positive"));
        }
        if doc_count > max_doc {
            return Err(invalid(format!(
                "doc_count must not exceed max_doc, doc_count: {doc_count}, max_doc: {max_doc}"
            )));
        }
        if sum_doc_freq < doc_count {
            return Err(invalid(format!(
                "sum_doc_freq must be at least doc_count, sum_doc_freq: {sum_doc_freq}, doc_count: \
                 {doc_count}"
            )));
        }
        if sum_total_term_freq < sum_doc_freq {
            return Err(invalid(format!(
                "sum_total_term_freq must be at least sum_doc_freq, sum_total_term_freq: \
                 {sum_total_term_freq}, sum_doc_freq: {sum_doc_freq}"
            )));
        }
        Ok(CollectionStatistics {
            field: field.to_string(),
            max_doc,
            doc_count,
            sum_total_term_freq,
            sum_doc_freq,
        })
    }

    /// Name of the field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Total number of documents, with or without the field.
    pub fn max_doc(&self) -> u64 {
        self.max_doc
    }

    /// Number of documents having at least one term for the field.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Number of tokens of the field in the collection.
    pub fn sum_total_term_freq(&self) -> u64 {
        self.sum_total_term_freq
    }

    /// Number of postings (document, term) pairs of the field.
    pub fn sum_doc_freq(&self) -> u64 {
        self.sum_doc_freq
    }
}

/// Statistics of one term, gathered over the whole collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermStatistics {
    term: Vec<u8>,
    doc_freq: u64,
    total_term_freq: u64,
}

impl TermStatistics {
    /// Creates statistics for `term`.
    ///
    /// A term only gets statistics if it occurs in the collection, so both
    /// frequencies must be positive.
    pub fn new<T: AsRef<[u8]>>(
        term: T,
        doc_freq: u64,
        total_term_freq: u64,
    ) -> Result<TermStatistics> {
        if doc_freq == 0 {
            return Err(invalid("doc_freq must be positive"));
        }
        if total_term_freq < doc_freq {
            return Err(invalid(format!(
                "total_term_freq must be at least doc_freq, total_term_freq: {total_term_freq}, \
                 doc_freq: {doc_freq}"
            )));
        }
        Ok(TermStatistics {
            term: term.as_ref().to_vec(),
            doc_freq,
            total_term_freq,
        })
    }

    /// Raw bytes of the term.
    pub fn term(&self) -> &[u8] {
        &self.term
    }

    /// Number of documents containing the term.
    pub fn doc_freq(&self) -> u64 {
        self.doc_freq
    }

    /// Number of occurrences of the term, over all documents.
    pub fn total_term_freq(&self) -> u64 {
        self.total_term_freq
    }
}

fn invalid<S: ToString>(msg: S) -> SimilarityError {
    SimilarityError::InvalidStatistics(msg.to_string())
}
