//! Core domain types for the Affinity recommendation engine.
//!
//! The rating matrix is the single source of truth for every query. It is
//! built once, validated on insertion, and then borrowed immutably by the
//! recommender. Derived values (neighbours and recommendations) are plain data
//! allocated per query.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod ratings;
pub mod recommendation;
pub mod similarity;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use ratings::{ItemId, Rating, RatingMatrix, RatingMatrixError, UserId, UserRatings};
pub use recommendation::{Neighbor, Recommendation, RecommendationReport};
pub use similarity::Similarity;

use thiserror::Error;

/// Errors returned when a recommendation request cannot be served.
///
/// Undefined similarities and empty neighbourhoods are ordinary outcomes and
/// never surface here.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The target user has no entry in the rating matrix.
    #[error("user {user} is not present in the rating matrix")]
    UserNotFound {
        /// Identifier that was requested.
        user: UserId,
    },
}
