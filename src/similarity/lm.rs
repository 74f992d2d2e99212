//! Language-model similarities.
//!
//! A query term is scored by comparing the probability that the document
//! language model generates it with the probability that the collection
//! language model `p(w|C)` does. This module provides
//! - [`LmStats`], the statistics record carrying `p(w|C)`,
//! - [`CollectionModel`], the strategy computing `p(w|C)`, and its
//!   default implementation [`DefaultCollectionModel`],
//! - [`LmSimilarity`], which plugs a collection model and an [`LmEstimator`]
//!   (the actual smoothing formula) into [`SimilarityBase`].
use std::fmt;
use std::sync::Arc;

use super::{fill_basic_stats, BasicStats, SimilarityBase, SimilarityStats};
use crate::statistics::{CollectionStatistics, TermStatistics};
use crate::{Explanation, Score};

/// Statistics of a term, along with the probability that the collection
/// language model generates it.
#[derive(Clone, Debug, PartialEq)]
pub struct LmStats {
    basic: BasicStats,
    collection_probability: f64,
    collection_probability_set: bool,
}

impl LmStats {
    /// Creates zeroed statistics for `field` and the query-time `boost`.
    pub fn new<S: ToString>(field: S, boost: f64) -> LmStats {
        LmStats {
            basic: BasicStats::new(field, boost),
            collection_probability: 0.0,
            collection_probability_set: false,
        }
    }

    /// Probability that the collection generates the term.
    ///
    /// `0` until the statistics have been filled.
    pub fn collection_probability(&self) -> f64 {
        self.collection_probability
    }

    /// Sets the probability that the collection generates the term.
    ///
    /// The probability is set once, while the statistics are filled.
    pub fn set_collection_probability(&mut self, collection_probability: f64) {
        debug_assert!(
            !self.collection_probability_set,
            "collection probability of {:?} set twice",
            self.basic.field()
        );
        self.collection_probability = collection_probability;
        self.collection_probability_set = true;
    }
}

impl SimilarityStats for LmStats {
    fn basic(&self) -> &BasicStats {
        &self.basic
    }

    fn basic_mut(&mut self) -> &mut BasicStats {
        &mut self.basic
    }
}

/// Strategy computing the collection language model `p(w|C)`.
pub trait CollectionModel: Send + Sync + 'static {
    /// Computes `p(w|C)` for the term described by `stats`.
    ///
    /// The term and field counts of `stats` must be filled.
    fn compute_probability(&self, stats: &BasicStats) -> f64;

    /// Name of the strategy, `None` for the default one.
    fn name(&self) -> Option<String>;
}

/// Models `p(w|C)` as the number of occurrences of the term in the
/// collection, divided by the total number of tokens, with one occurrence
/// added to both so that unseen terms keep a non-zero probability.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCollectionModel;

impl CollectionModel for DefaultCollectionModel {
    fn compute_probability(&self, stats: &BasicStats) -> f64 {
        (stats.total_term_freq() as f64 + 1.0) / (stats.number_of_field_tokens() as f64 + 1.0)
    }

    fn name(&self) -> Option<String> {
        None
    }
}

/// Smoothing formula of a language-model similarity.
pub trait LmEstimator: Send + Sync + 'static {
    /// Name of the method, with the value of its parameters.
    ///
    /// Two differently configured estimators must have different names.
    fn name(&self) -> String;

    /// Scores a document.
    ///
    /// Must return `0` when `freq` is `0`, and must not decrease when `freq`
    /// increases.
    fn score(&self, stats: &LmStats, freq: f64, doc_len: f64) -> f64;

    /// Pushes the explanation of the estimator's parameters and components
    /// to `details`. The collection probability is appended afterwards.
    fn explain_details(
        &self,
        _details: &mut Vec<Explanation>,
        _stats: &LmStats,
        _freq: f64,
        _doc_len: f64,
    ) {
    }

    /// Wraps the explanation `details` into the root node of the explanation.
    fn explain_score(
        &self,
        similarity_name: &str,
        stats: &LmStats,
        freq: f64,
        doc_len: f64,
        details: Vec<Explanation>,
    ) -> Explanation {
        Explanation::with_details(
            format!(
                "score({}, freq={}), computed from:",
                similarity_name, freq as Score
            ),
            self.score(stats, freq, doc_len) as Score,
            details,
        )
    }
}

/// Language-model similarity.
///
/// Composes an [`LmEstimator`] with a [`CollectionModel`] (by default
/// [`DefaultCollectionModel`]). The similarity is immutable and can be shared
/// across threads.
pub struct LmSimilarity<E: LmEstimator> {
    estimator: E,
    collection_model: Arc<dyn CollectionModel>,
    discount_overlaps: bool,
}

impl<E: LmEstimator> LmSimilarity<E> {
    /// Creates a similarity using the default collection model.
    pub fn new(estimator: E) -> LmSimilarity<E> {
        LmSimilarity::with_collection_model(estimator, Arc::new(DefaultCollectionModel))
    }

    /// Creates a similarity using the given collection model.
    pub fn with_collection_model(
        estimator: E,
        collection_model: Arc<dyn CollectionModel>,
    ) -> LmSimilarity<E> {
        LmSimilarity::with_discount_overlaps(estimator, collection_model, true)
    }

    /// Creates a similarity using the given collection model, and deciding
    /// whether overlapping tokens count in the field length.
    pub fn with_discount_overlaps(
        estimator: E,
        collection_model: Arc<dyn CollectionModel>,
        discount_overlaps: bool,
    ) -> LmSimilarity<E> {
        LmSimilarity {
            estimator,
            collection_model,
            discount_overlaps,
        }
    }

    /// Smoothing formula of the similarity.
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Collection model of the similarity.
    pub fn collection_model(&self) -> &dyn CollectionModel {
        self.collection_model.as_ref()
    }

    /// Name of the LM method, with its parameters.
    pub fn name(&self) -> String {
        self.estimator.name()
    }
}

impl<E: LmEstimator + Default> Default for LmSimilarity<E> {
    fn default() -> Self {
        LmSimilarity::new(E::default())
    }
}

impl<E: LmEstimator> SimilarityBase for LmSimilarity<E> {
    type Stats = LmStats;

    fn discount_overlaps(&self) -> bool {
        self.discount_overlaps
    }

    fn new_stats(&self, field: &str, boost: f64) -> LmStats {
        LmStats::new(field, boost)
    }

    /// Computes the collection probability of the term on top of the usual
    /// statistics. The collection model reads the counts filled by the first
    /// step.
    fn fill_basic_stats(
        &self,
        stats: &mut LmStats,
        collection_stats: &CollectionStatistics,
        term_stats: &TermStatistics,
    ) {
        fill_basic_stats(stats.basic_mut(), collection_stats, term_stats);
        let collection_probability = self.collection_model.compute_probability(stats.basic());
        stats.set_collection_probability(collection_probability);
    }

    fn score(&self, stats: &LmStats, freq: f64, doc_len: f64) -> f64 {
        self.estimator.score(stats, freq, doc_len)
    }

    fn explain_details(
        &self,
        details: &mut Vec<Explanation>,
        stats: &LmStats,
        freq: f64,
        doc_len: f64,
    ) {
        self.estimator.explain_details(details, stats, freq, doc_len);
        // Recomputed from the counts, the stats may not have been filled.
        let collection_probability = self.collection_model.compute_probability(stats.basic());
        details.push(Explanation::new(
            "collection probability",
            collection_probability as Score,
        ));
    }

    fn explain(&self, stats: &LmStats, freq: &Explanation, doc_len: f64) -> Explanation {
        let freq_value = freq.value() as f64;
        let mut details = Vec::new();
        self.explain_details(&mut details, stats, freq_value, doc_len);
        self.estimator
            .explain_score(&self.to_string(), stats, freq_value, doc_len, details)
    }
}

impl<E: LmEstimator> fmt::Display for LmSimilarity<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.collection_model.name() {
            Some(model_name) if !model_name.is_empty() => {
                write!(f, "LM {} - {}", self.name(), model_name)
            }
            _ => write!(f, "LM {}", self.name()),
        }
    }
}

impl<E: LmEstimator + fmt::Debug> fmt::Debug for LmSimilarity<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LmSimilarity")
            .field("estimator", &self.estimator)
            .field("collection_model", &self.collection_model.name())
            .field("discount_overlaps", &self.discount_overlaps)
            .finish()
    }
}
