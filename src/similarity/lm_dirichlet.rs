use std::sync::Arc;

use super::lm::{CollectionModel, LmEstimator, LmSimilarity, LmStats};
use super::SimilarityStats;
use crate::{Explanation, Result, Score, SimilarityError};

/// Default value of the prior count `mu`.
pub const DEFAULT_MU: f32 = 2000.0;

/// Bayesian smoothing using Dirichlet priors.
///
/// `score = boost * (ln(1 + freq / (mu * P)) + ln(mu / (dl + mu)))`, where
/// `P` is the collection probability of the term. The document norm part is
/// negative, and a document whose term weight does not make up for it
/// scores `0`: scores are clamped so that they are never negative.
///
/// See Zhai and Lafferty, "A Study of Smoothing Methods for Language Models
/// Applied to Information Retrieval".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dirichlet {
    mu: f32,
}

impl Dirichlet {
    /// Creates the estimator. `mu` must be finite and positive.
    pub fn new(mu: f32) -> Result<Dirichlet> {
        if !mu.is_finite() || mu <= 0.0 {
            return Err(SimilarityError::InvalidArgument(format!(
                "illegal mu value: {mu}, must be a positive finite value"
            )));
        }
        Ok(Dirichlet { mu })
    }

    /// The prior count.
    pub fn mu(&self) -> f32 {
        self.mu
    }

    fn term_weight(&self, stats: &LmStats, freq: f64) -> f64 {
        (1.0 + freq / (self.mu as f64 * stats.collection_probability())).ln()
    }

    fn document_norm(&self, doc_len: f64) -> f64 {
        let mu = self.mu as f64;
        (mu / (doc_len + mu)).ln()
    }
}

impl Default for Dirichlet {
    fn default() -> Dirichlet {
        Dirichlet { mu: DEFAULT_MU }
    }
}

impl LmEstimator for Dirichlet {
    fn name(&self) -> String {
        format!("Dirichlet({})", self.mu)
    }

    fn score(&self, stats: &LmStats, freq: f64, doc_len: f64) -> f64 {
        let score = stats.basic().boost()
            * (self.term_weight(stats, freq) + self.document_norm(doc_len));
        if score > 0.0 {
            score
        } else {
            0.0
        }
    }

    fn explain_details(
        &self,
        details: &mut Vec<Explanation>,
        stats: &LmStats,
        freq: f64,
        doc_len: f64,
    ) {
        let boost = stats.basic().boost();
        if boost != 1.0 {
            details.push(Explanation::new("query boost", boost as Score));
        }
        details.push(Explanation::new("mu", self.mu));
        let mut term_weight = Explanation::new(
            "term weight, computed as log(1 + freq /(mu * P)) from:",
            self.term_weight(stats, freq) as Score,
        );
        term_weight.add_const(
            "freq, number of occurrences of term in the document",
            freq as Score,
        );
        term_weight.add_const(
            "P, probability that the current term is generated by the collection",
            stats.collection_probability() as Score,
        );
        details.push(term_weight);
        details.push(Explanation::new(
            "document norm, computed as log(mu / (dl + mu))",
            self.document_norm(doc_len) as Score,
        ));
        details.push(Explanation::new("dl, length of field", doc_len as Score));
    }

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
                "score({}, freq={}), computed as boost * (term weight + document norm) from:",
                similarity_name, freq as Score
            ),
            self.score(stats, freq, doc_len) as Score,
            details,
        )
    }
}

/// Language-model similarity with Dirichlet smoothing.
pub type LmDirichletSimilarity = LmSimilarity<Dirichlet>;

impl LmSimilarity<Dirichlet> {
    /// Creates a Dirichlet similarity with the prior count `mu` and the
    /// default collection model.
    pub fn dirichlet(mu: f32) -> Result<LmDirichletSimilarity> {
        Ok(LmSimilarity::new(Dirichlet::new(mu)?))
    }

    /// Creates a Dirichlet similarity with the prior count `mu` and a custom
    /// collection model.
    pub fn dirichlet_with_collection_model(
        mu: f32,
        collection_model: Arc<dyn CollectionModel>,
    ) -> Result<LmDirichletSimilarity> {
        Ok(LmSimilarity::with_collection_model(
            Dirichlet::new(mu)?,
            collection_model,
        ))
    }

    /// The prior count.
    pub fn mu(&self) -> f32 {
        self.estimator().mu()
    }
}
