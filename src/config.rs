//! Serializable description of a similarity.
//!
//! ```json
//! { "type": "lm_dirichlet", "mu": 1500.0 }
//! { "type": "lm_jelinek_mercer", "lambda": 0.7, "discount_overlaps": false }
//! ```

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::similarity::{
    DefaultCollectionModel, Dirichlet, JelinekMercer, LmSimilarity, Similarity, DEFAULT_MU,
};
use crate::Result;

/// Configuration of the similarity used to score a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum SimilarityConfig {
    /// Language model with Dirichlet smoothing.
    LmDirichlet {
        /// Prior count.
        /// Default: 2000
        #[serde(default = "default_mu")]
        mu: f32,
        /// Leave tokens sharing a position out of the field length.
        /// Default: true
        #[serde(default = "default_discount_overlaps")]
        discount_overlaps: bool,
    },
    /// Language model with Jelinek-Mercer smoothing.
    LmJelinekMercer {
        /// Weight of the collection model, in `(0, 1]`.
        lambda: f32,
        /// Leave tokens sharing a position out of the field length.
        /// Default: true
        #[serde(default = "default_discount_overlaps")]
        discount_overlaps: bool,
    },
}

fn default_mu() -> f32 {
    DEFAULT_MU
}

fn default_discount_overlaps() -> bool {
    true
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig::LmDirichlet {
            mu: default_mu(),
            discount_overlaps: default_discount_overlaps(),
        }
    }
}

impl SimilarityConfig {
    /// Reads a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<SimilarityConfig> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the JSON representation of the configuration.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the similarity, with the default collection model.
    ///
    /// Returns `SimilarityError::InvalidArgument` if a smoothing parameter is
    /// out of its range.
    pub fn build(&self) -> Result<Box<dyn Similarity>> {
        let similarity: Box<dyn Similarity> = match *self {
            SimilarityConfig::LmDirichlet {
                mu,
                discount_overlaps,
            } => Box::new(LmSimilarity::with_discount_overlaps(
                Dirichlet::new(mu)?,
                Arc::new(DefaultCollectionModel),
                discount_overlaps,
            )),
            SimilarityConfig::LmJelinekMercer {
                lambda,
                discount_overlaps,
            } => Box::new(LmSimilarity::with_discount_overlaps(
                JelinekMercer::new(lambda)?,
                Arc::new(DefaultCollectionModel),
                discount_overlaps,
            )),
        };
        info!("built similarity {similarity}");
        Ok(similarity)
    }
}
