//! Similarities score a document for a term, given statistics
//! of the collection, of the term and of the document.
//!
//! [`Similarity`] is the object-safe interface used by queries.
//! [`SimilarityBase`] is a skeleton for similarities expressed as a formula
//! over a handful of statistics; it handles the plumbing (filling the
//! statistics, encoding norms, assembling explanations).
//!
//! The language-model family lives in [`lm`], with two smoothing methods:
//! Dirichlet priors and Jelinek-Mercer interpolation.

mod basic_stats;
pub mod lm;
mod lm_dirichlet;
mod lm_jelinek_mercer;
mod scorer;
mod similarity_base;

pub use self::basic_stats::{BasicStats, SimilarityStats};
pub use self::lm::{
    CollectionModel, DefaultCollectionModel, LmEstimator, LmSimilarity, LmStats,
};
pub use self::lm_dirichlet::{Dirichlet, LmDirichletSimilarity, DEFAULT_MU};
pub use self::lm_jelinek_mercer::{JelinekMercer, LmJelinekMercerSimilarity};
pub use self::scorer::{BasicSimScorer, MultiSimScorer, SimScorer};
pub use self::similarity_base::{fill_basic_stats, Similarity, SimilarityBase};
