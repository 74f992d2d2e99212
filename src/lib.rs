#![doc(test(attr(allow(unused_variables), deny(warnings))))]
#![warn(missing_docs)]

//! # `lm_similarity`
//!
//! Language-model similarities for ranking documents against a query.
//!
//! A query term is scored by comparing the probability that the language
//! model of the document generates it with the probability that the
//! language model of the whole collection does. Two smoothing methods are
//! provided: Bayesian smoothing with Dirichlet priors and Jelinek-Mercer
//! linear interpolation.
//!
//! ```rust
//! use lm_similarity::similarity::{LmDirichletSimilarity, Similarity};
//! use lm_similarity::fieldnorm::fieldnorm_to_id;
//! use lm_similarity::{CollectionStatistics, TermStatistics};
//!
//! # fn main() -> lm_similarity::Result<()> {
//! let similarity = LmDirichletSimilarity::dirichlet(100.0)?;
//! let collection_stats = CollectionStatistics::new("body", 100, 100, 999, 500)?;
//! let term_stats = [TermStatistics::new("lucene", 5, 9)?];
//! let scorer = similarity.scorer(1.0, &collection_stats, &term_stats);
//! let score = scorer.score(3.0, fieldnorm_to_id(10));
//! assert!(score > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! Similarities can also be described in JSON, see [`SimilarityConfig`].

#[macro_use]
mod macros;

pub mod config;
mod error;
mod explanation;
pub mod fieldnorm;
pub mod similarity;
pub mod statistics;

pub use crate::config::SimilarityConfig;
pub use crate::error::SimilarityError;
pub use crate::explanation::Explanation;
pub use crate::statistics::{CollectionStatistics, TermStatistics};

/// Score of a document.
pub type Score = f32;

/// Result type of the crate.
pub type Result<T> = std::result::Result<T, SimilarityError>;
