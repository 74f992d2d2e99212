use super::{SimilarityBase, SimilarityStats};
use crate::fieldnorm::fieldnorm_id_to_doc_len;
use crate::statistics::{CollectionStatistics, TermStatistics};
use crate::{Explanation, Score};

/// Scores the documents of one field for a given set of terms.
///
/// A `SimScorer` is built once per query and per field, and then
/// called for every matching document. It is read-only and can be
/// shared by the threads scoring different segments.
pub trait SimScorer: Send + Sync {
    /// Returns the score of a document, given the frequency of the term(s)
    /// in the document and the document's `fieldnorm_id`.
    fn score(&self, freq: f32, norm: u8) -> Score;

    /// Explains the score returned by `.score(freq.value(), norm)`.
    fn explain(&self, freq: &Explanation, norm: u8) -> Explanation;
}

/// Scorer for one term, delegating to a [`SimilarityBase`].
///
/// The statistics are filled when the scorer is built and owned by it from
/// then on, so they cannot change while documents are being scored.
pub struct BasicSimScorer<'a, S: SimilarityBase> {
    similarity: &'a S,
    stats: S::Stats,
}

impl<'a, S: SimilarityBase> BasicSimScorer<'a, S> {
    /// Creates the scorer, filling the statistics of the term.
    pub fn new(
        similarity: &'a S,
        boost: Score,
        collection_stats: &CollectionStatistics,
        term_stats: &TermStatistics,
    ) -> BasicSimScorer<'a, S> {
        let mut stats = similarity.new_stats(collection_stats.field(), boost as f64);
        similarity.fill_basic_stats(&mut stats, collection_stats, term_stats);
        BasicSimScorer { similarity, stats }
    }

    /// The filled statistics used by this scorer.
    pub fn stats(&self) -> &S::Stats {
        &self.stats
    }
}

impl<'a, S: SimilarityBase> SimScorer for BasicSimScorer<'a, S> {
    fn score(&self, freq: f32, norm: u8) -> Score {
        let doc_len = fieldnorm_id_to_doc_len(norm);
        self.similarity.score(&self.stats, freq as f64, doc_len) as Score
    }

    fn explain(&self, freq: &Explanation, norm: u8) -> Explanation {
        let doc_len = fieldnorm_id_to_doc_len(norm);
        self.similarity.explain(&self.stats, freq, doc_len)
    }
}

impl<'a, S: SimilarityBase> std::fmt::Debug for BasicSimScorer<'a, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicSimScorer")
            .field("similarity", &self.similarity.to_string())
            .field("field", &self.stats.basic().field())
            .field("stats", &self.stats)
            .finish()
    }
}

/// Sums the scores of several scorers, typically one per term of a phrase.
pub struct MultiSimScorer<'a> {
    sub_scorers: Vec<Box<dyn SimScorer + 'a>>,
}

impl<'a> MultiSimScorer<'a> {
    /// Creates a scorer summing the scores of `sub_scorers`.
    pub fn new(sub_scorers: Vec<Box<dyn SimScorer + 'a>>) -> MultiSimScorer<'a> {
        MultiSimScorer { sub_scorers }
    }
}

impl<'a> SimScorer for MultiSimScorer<'a> {
    fn score(&self, freq: f32, norm: u8) -> Score {
        let sum: f64 = self
            .sub_scorers
            .iter()
            .map(|sub_scorer| sub_scorer.score(freq, norm) as f64)
            .sum();
        sum as Score
    }

    fn explain(&self, freq: &Explanation, norm: u8) -> Explanation {
        let details: Vec<Explanation> = self
            .sub_scorers
            .iter()
            .map(|sub_scorer| sub_scorer.explain(freq, norm))
            .collect();
        Explanation::with_details("sum of:", self.score(freq.value(), norm), details)
    }
}
