use std::fmt;

use log::{debug, warn};

use super::scorer::{BasicSimScorer, MultiSimScorer, SimScorer};
use super::{BasicStats, SimilarityStats};
use crate::fieldnorm::{fieldnorm_to_id, FieldInvertState};
use crate::statistics::{CollectionStatistics, TermStatistics};
use crate::{Explanation, Score};

/// Scoring strategy used by queries.
///
/// A `Similarity` decides two things:
/// - at indexing time, how the length of a field is encoded in its norm.
/// - at query time, how a document is scored given the frequency of a term
///   and the norm of the field.
///
/// A single instance is typically shared by all the threads of a searcher,
/// hence the `Send + Sync` bound.
pub trait Similarity: fmt::Display + Send + Sync + 'static {
    /// Encodes the length of a field into a `fieldnorm_id`.
    fn compute_norm(&self, state: &FieldInvertState) -> u8;

    /// Builds a scorer for the given terms of a field.
    ///
    /// One term yields a plain scorer, several terms yield a scorer
    /// summing one score per term.
    fn scorer<'a>(
        &'a self,
        boost: Score,
        collection_stats: &CollectionStatistics,
        term_stats: &[TermStatistics],
    ) -> Box<dyn SimScorer + 'a>;
}

/// Skeleton for similarities expressed as a function of a few statistics.
///
/// Implementors provide the statistics record, the score formula and its
/// name (through `Display`). Filling the statistics, encoding norms and
/// assembling explanations are taken care of here and may be refined.
///
/// Every `SimilarityBase` is a [`Similarity`].
pub trait SimilarityBase: fmt::Display + Send + Sync + 'static {
    /// Statistics record of the similarity.
    type Stats: SimilarityStats;

    /// True if tokens sharing a position (e.g. synonyms) are left out of the
    /// field length.
    fn discount_overlaps(&self) -> bool;

    /// Creates zeroed statistics for one field and a query-time boost.
    fn new_stats(&self, field: &str, boost: f64) -> Self::Stats;

    /// Fills `stats` from the statistics of the index.
    fn fill_basic_stats(
        &self,
        stats: &mut Self::Stats,
        collection_stats: &CollectionStatistics,
        term_stats: &TermStatistics,
    ) {
        fill_basic_stats(stats.basic_mut(), collection_stats, term_stats);
    }

    /// Scores a document.
    ///
    /// - `freq`: frequency of the term in the document.
    /// - `doc_len`: length of the field in the document.
    fn score(&self, stats: &Self::Stats, freq: f64, doc_len: f64) -> f64;

    /// Pushes the explanation of each component of the score to `details`.
    fn explain_details(
        &self,
        _details: &mut Vec<Explanation>,
        _stats: &Self::Stats,
        _freq: f64,
        _doc_len: f64,
    ) {
    }

    /// Explains the score of a document.
    fn explain(&self, stats: &Self::Stats, freq: &Explanation, doc_len: f64) -> Explanation {
        let freq_value = freq.value() as f64;
        let mut details = Vec::new();
        self.explain_details(&mut details, stats, freq_value, doc_len);
        Explanation::with_details(
            format!("score({}, freq={}), computed from:", self, freq.value()),
            self.score(stats, freq_value, doc_len) as Score,
            details,
        )
    }
}

/// Fills the generic statistics of a term.
pub fn fill_basic_stats(
    stats: &mut BasicStats,
    collection_stats: &CollectionStatistics,
    term_stats: &TermStatistics,
) {
    if term_stats.total_term_freq() > collection_stats.sum_total_term_freq() {
        warn!(
            "term frequency {} exceeds the number of tokens {} of field {:?}",
            term_stats.total_term_freq(),
            collection_stats.sum_total_term_freq(),
            collection_stats.field()
        );
    }
    if term_stats.doc_freq() > collection_stats.sum_doc_freq() {
        warn!(
            "document frequency {} exceeds the number of postings {} of field {:?}",
            term_stats.doc_freq(),
            collection_stats.sum_doc_freq(),
            collection_stats.field()
        );
    }
    stats.set_number_of_documents(collection_stats.doc_count());
    stats.set_number_of_field_tokens(collection_stats.sum_total_term_freq());
    stats.set_avg_field_length(
        collection_stats.sum_total_term_freq() as f64 / collection_stats.doc_count() as f64,
    );
    stats.set_doc_freq(term_stats.doc_freq());
    stats.set_total_term_freq(term_stats.total_term_freq());
}

impl<S: SimilarityBase> Similarity for S {
    fn compute_norm(&self, state: &FieldInvertState) -> u8 {
        fieldnorm_to_id(state.num_terms(self.discount_overlaps()))
    }

    fn scorer<'a>(
        &'a self,
        boost: Score,
        collection_stats: &CollectionStatistics,
        term_stats: &[TermStatistics],
    ) -> Box<dyn SimScorer + 'a> {
        debug!(
            "scorer for {} term(s) of field {:?} with {}",
            term_stats.len(),
            collection_stats.field(),
            self
        );
        if let [single_term_stats] = term_stats {
            return Box::new(BasicSimScorer::new(
                self,
                boost,
                collection_stats,
                single_term_stats,
            ));
        }
        let sub_scorers: Vec<Box<dyn SimScorer + 'a>> = term_stats
            .iter()
            .map(|term_stats| {
                Box::new(BasicSimScorer::new(self, boost, collection_stats, term_stats))
                    as Box<dyn SimScorer + 'a>
            })
            .collect();
        Box::new(MultiSimScorer::new(sub_scorers))
    }
}
