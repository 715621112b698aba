//! Similarity between a target user and every other user in a matrix.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use affinity_core::{RatingMatrix, RecommendError, Similarity, UserId, UserRatings};

use crate::PearsonSimilarity;

/// Defined similarities keyed by the other user.
///
/// Pairs whose similarity is undefined are absent. Negative scores are kept;
/// filtering them is the caller's decision.
pub type SimilarityMap = BTreeMap<UserId, f64>;

/// Computes similarities between a target user and the rest of a matrix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityEngine<S = PearsonSimilarity> {
    metric: S,
}

impl<S: Similarity> SimilarityEngine<S> {
    /// Create an engine backed by `metric`.
    #[must_use]
    pub const fn new(metric: S) -> Self {
        Self { metric }
    }

    /// Borrow the similarity metric.
    #[must_use]
    pub const fn metric(&self) -> &S {
        &self.metric
    }

    /// Score every user other than `target` against `target`.
    ///
    /// # Errors
    /// Returns [`RecommendError::UserNotFound`] when `target` has no entry in
    /// `matrix`.
    pub fn similarities(
        &self,
        matrix: &RatingMatrix,
        target: UserId,
    ) -> Result<SimilarityMap, RecommendError> {
        let target_ratings = matrix
            .ratings(target)
            .ok_or(RecommendError::UserNotFound { user: target })?;
        Ok(self.similarities_for(matrix, target, target_ratings))
    }

    pub(crate) fn similarities_for(
        &self,
        matrix: &RatingMatrix,
        target: UserId,
        target_ratings: &UserRatings,
    ) -> SimilarityMap {
        matrix
            .users()
            .filter(|&(user, _)| user != target)
            .filter_map(|(user, ratings)| {
                self.metric
                    .similarity(target_ratings, ratings)
                    .filter(|score| score.is_finite())
                    .map(|score| (user, score))
            })
            .collect()
    }
}
