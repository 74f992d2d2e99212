use std::sync::Arc;

use super::lm::{CollectionModel, LmEstimator, LmSimilarity, LmStats};
use super::SimilarityStats;
use crate::{Explanation, Result, Score, SimilarityError};

/// Linear interpolation between the document and the collection language
/// models, with `lambda` as the weight of the collection model.
///
/// `score = boost * ln(1 + ((1 - lambda) * freq / dl) / (lambda * P))`, where
/// `P` is the collection probability of the term.
///
/// The optimal value of `lambda` depends on the queries: around `0.1` for
/// title queries, around `0.7` for long queries.
///
/// See Zhai and Lafferty, "A Study of Smoothing Methods for Language Models
/// Applied to Information Retrieval".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JelinekMercer {
    lambda: f32,
}

impl JelinekMercer {
    /// Creates the estimator. `lambda` must be in `(0, 1]`.
    pub fn new(lambda: f32) -> Result<JelinekMercer> {
        if lambda.is_nan() || lambda <= 0.0 || lambda > 1.0 {
            return Err(SimilarityError::InvalidArgument(format!(
                "lambda must be in the range (0 .. 1], got {lambda}"
            )));
        }
        Ok(JelinekMercer { lambda })
    }

    /// Weight of the collection model.
    pub fn lambda(&self) -> f32 {
        self.lambda
    }
}

impl LmEstimator for JelinekMercer {
    fn name(&self) -> String {
        format!("Jelinek-Mercer({})", self.lambda)
    }

    fn score(&self, stats: &LmStats, freq: f64, doc_len: f64) -> f64 {
        let lambda = self.lambda as f64;
        // An empty field is scored like a one token field.
        let doc_len = doc_len.max(1.0);
        let document_part = (1.0 - lambda) * freq / doc_len;
        let collection_part = lambda * stats.collection_probability();
        stats.basic().boost() * (1.0 + document_part / collection_part).ln()
    }

    fn explain_details(
        &self,
        details: &mut Vec<Explanation>,
        stats: &LmStats,
        _freq: f64,
        _doc_len: f64,
    ) {
        let boost = stats.basic().boost();
        if boost != 1.0 {
            details.push(Explanation::new("boost", boost as Score));
        }
        details.push(Explanation::new("lambda", self.lambda));
    }
}

/// Language-model similarity with Jelinek-Mercer smoothing.
pub type LmJelinekMercerSimilarity = LmSimilarity<JelinekMercer>;

impl LmSimilarity<JelinekMercer> {
    /// Creates a Jelinek-Mercer similarity with the given `lambda` and the
    /// default collection model.
    pub fn jelinek_mercer(lambda: f32) -> Result<LmJelinekMercerSimilarity> {
        Ok(LmSimilarity::new(JelinekMercer::new(lambda)?))
    }

    /// Creates a Jelinek-Mercer similarity with the given `lambda` and a
    /// custom collection model.
    pub fn jelinek_mercer_with_collection_model(
        lambda: f32,
        collection_model: Arc<dyn CollectionModel>,
    ) -> Result<LmJelinekMercerSimilarity> {
        Ok(LmSimilarity::with_collection_model(
            JelinekMercer::new(lambda)?,
            collection_model,
        ))
    }

    /// Weight of the collection model.
    pub fn lambda(&self) -> f32 {
        self.estimator().lambda()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::{JelinekMercer, LmJelinekMercerSimilarity};
    use crate::similarity::{
        BasicStats, CollectionModel, LmStats, SimilarityBase, SimilarityStats,
    };
    use crate::statistics::{CollectionStatistics, TermStatistics};
    use crate::{assert_nearly_equals, Explanation};

    struct Uniform;

    impl CollectionModel for Uniform {
        fn compute_probability(&self, _stats: &BasicStats) -> f64 {
            0.001
        }

        fn name(&self) -> Option<String> {
            Some("Uniform(1000)".to_string())
        }
    }

    fn filled_stats(similarity: &LmJelinekMercerSimilarity, boost: f64) -> LmStats {
        let collection_stats = CollectionStatistics::new("body", 100, 100, 999, 500).unwrap();
        let term_stats = TermStatistics::new("lucene", 5, 9).unwrap();
        let mut stats = similarity.new_stats("body", boost);
        similarity.fill_basic_stats(&mut stats, &collection_stats, &term_stats);
        stats
    }

    #[test]
    fn test_lambda_validation() {
        assert!(JelinekMercer::new(0.0).is_err());
        assert!(JelinekMercer::new(-0.5).is_err());
        assert!(JelinekMercer::new(1.01).is_err());
        assert!(JelinekMercer::new(f32::NAN).is_err());
        assert_eq!(JelinekMercer::new(1.0).unwrap().lambda(), 1.0);
        assert_eq!(
            LmJelinekMercerSimilarity::jelinek_mercer(0.7)
                .unwrap()
                .lambda(),
            0.7
        );
    }

    #[test]
    fn test_name() {
        let similarity = LmJelinekMercerSimilarity::jelinek_mercer(0.1).unwrap();
        assert_eq!(similarity.to_string(), "LM Jelinek-Mercer(0.1)");
        let other = LmJelinekMercerSimilarity::jelinek_mercer(0.7).unwrap();
        assert_ne!(similarity.to_string(), other.to_string());
        let custom =
            LmJelinekMercerSimilarity::jelinek_mercer_with_collection_model(0.1, Arc::new(Uniform))
                .unwrap();
        assert_eq!(custom.to_string(), "LM Jelinek-Mercer(0.1) - Uniform(1000)");
    }

    #[test]
    fn test_score() {
        let similarity = LmJelinekMercerSimilarity::jelinek_mercer(0.1).unwrap();
        let stats = filled_stats(&similarity, 1.0);
        // ln(1 + (0.9 * 2 / 20) / (0.1 * 0.01))
        let lambda = 0.1f32 as f64;
        let expected = (1.0 + ((1.0 - lambda) * 2.0 / 20.0) / (lambda * 0.01)).ln();
        assert_nearly_equals!(similarity.score(&stats, 2.0, 20.0), expected, 1e-9f64);
        assert_eq!(similarity.score(&stats, 0.0, 20.0), 0.0);
    }

    #[test]
    fn test_zero_length_field() {
        let similarity = LmJelinekMercerSimilarity::jelinek_mercer(0.5).unwrap();
        let stats = filled_stats(&similarity, 1.0);
        let score = similarity.score(&stats, 1.0, 0.0);
        assert!(score.is_finite());
        assert_eq!(score, similarity.score(&stats, 1.0, 1.0));
    }

    #[test]
    fn test_lambda_one_ignores_the_document() {
        let similarity = LmJelinekMercerSimilarity::jelinek_mercer(1.0).unwrap();
        let stats = filled_stats(&similarity, 1.0);
        assert_eq!(similarity.score(&stats, 5.0, 10.0), 0.0);
    }

    #[test]
    fn test_custom_collection_model() {
        let similarity =
            LmJelinekMercerSimilarity::jelinek_mercer_with_collection_model(0.5, Arc::new(Uniform))
                .unwrap();
        let stats = filled_stats(&similarity, 1.0);
        assert_eq!(stats.collection_probability(), 0.001);
        // ln(1 + (0.5 * 1 / 10) / (0.5 * 0.001))
        assert_nearly_equals!(similarity.score(&stats, 1.0, 10.0), 101.0f64.ln(), 1e-9f64);
    }

    #[test]
    fn test_explain() {
        let similarity = LmJelinekMercerSimilarity::jelinek_mercer(0.1).unwrap();
        let stats = filled_stats(&similarity, 3.0);
        let explanation = similarity.explain(&stats, &Explanation::new("freq", 2.0), 20.0);
        assert_eq!(
            explanation.description(),
            "score(LM Jelinek-Mercer(0.1), freq=2), computed from:"
        );
        assert_nearly_equals!(
            explanation.value(),
            similarity.score(&stats, 2.0, 20.0) as f32
        );
        let details = explanation.details();
        assert_eq!(details.len(), 3);
        assert_eq!(details[0].description(), "boost");
        assert_eq!(details[0].value(), 3.0);
        assert_eq!(details[1].description(), "lambda");
        assert_eq!(details[1].value(), 0.1);
        assert_eq!(details[2].description(), "collection probability");
        assert_nearly_equals!(details[2].value(), 0.01f32);
        assert_eq!(stats.basic().boost(), 3.0);
    }

    proptest! {
        #[test]
        fn test_score_monotonic_in_freq(
            lambda in 0.01f32..=1.0,
            freq in 0u32..1000,
            doc_len in 1u32..100_000,
            total_term_freq in 1u64..1000,
        ) {
            let similarity = LmJelinekMercerSimilarity::jelinek_mercer(lambda).unwrap();
            let collection_stats =
                CollectionStatistics::new("body", 1000, 1000, 1_000_000, 10_000).unwrap();
            let term_stats = TermStatistics::new("term", 1, total_term_freq).unwrap();
            let mut stats = similarity.new_stats("body", 1.0);
            similarity.fill_basic_stats(&mut stats, &collection_stats, &term_stats);
            let doc_len = doc_len as f64;
            let lower = similarity.score(&stats, freq as f64, doc_len);
            let higher = similarity.score(&stats, freq as f64 + 1.0, doc_len);
            prop_assert!(lower >= 0.0);
            prop_assert!(higher >= lower);
            prop_assert_eq!(similarity.score(&stats, 0.0, doc_len), 0.0);
        }
    }
}
