//! Derived values produced by a recommendation query.

use crate::{ItemId, UserId};

/// A user selected into the neighbourhood of a target user.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    /// Neighbouring user.
    pub user: UserId,
    /// Similarity between the neighbour and the target user.
    pub similarity: f64,
}

impl Neighbor {
    /// Construct a neighbour entry.
    #[must_use]
    pub const fn new(user: UserId, similarity: f64) -> Self {
        Self { user, similarity }
    }
}

/// An item suggested to the target user.
///
/// `score` is an unnormalised similarity-weighted sum of neighbour ratings.
/// It is meant for ranking and is not bounded by the rating scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Recommended item.
    pub item: ItemId,
    /// Predicted score used for ranking.
    pub score: f64,
}

impl Recommendation {
    /// Construct a recommendation entry.
    #[must_use]
    pub const fn new(item: ItemId, score: f64) -> Self {
        Self { item, score }
    }
}

/// Ranked recommendations for one user, as presented to callers.
///
/// # Examples
///
/// ```
/// use affinity_core::{Recommendation, RecommendationReport};
///
/// let report = RecommendationReport::new(1, vec![Recommendation::new(40, 3.5)]);
/// assert_eq!(report.user, 1);
/// assert_eq!(report.recommendations.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationReport {
    /// User the recommendations were computed for.
    pub user: UserId,
    /// Recommendations ordered by descending score.
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    /// Bundle ranked recommendations with the user they belong to.
    #[must_use]
    pub const fn new(user: UserId, recommendations: Vec<Recommendation>) -> Self {
        Self {
            user,
            recommendations,
        }
    }
}
