//! Facade crate for the Affinity recommendation engine.
//!
//! This crate re-exports the core domain types and the recommender, and
//! exposes the ratings file loader behind the `data` feature.
//!
//! ```
//! use affinity_engine::{RatingMatrix, Recommender};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = RatingMatrix::from_triplets([
//!     (1, 10, 5.0),
//!     (1, 20, 3.0),
//!     (2, 10, 4.0),
//!     (2, 20, 2.0),
//!     (2, 30, 5.0),
//! ])?;
//! let recommendations = Recommender::new().recommend(&matrix, 1)?;
//! assert_eq!(recommendations.first().map(|r| r.item), Some(30));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use affinity_core::{
    ItemId, Neighbor, Rating, RatingMatrix, RatingMatrixError, RecommendError, Recommendation,
    RecommendationReport, Similarity, UserId, UserRatings,
};

pub use affinity_recommender::{
    DEFAULT_NEIGHBOURHOOD_SIZE, DEFAULT_TOP_N, MIN_COMMON_ITEMS, NeighborhoodSelector,
    PearsonSimilarity, Recommender, ScoreAggregator, SimilarityEngine, SimilarityMap, recommend,
    top_n,
};

#[cfg(feature = "data")]
pub use affinity_data::{LoadRatingsError, load_ratings, read_ratings};
