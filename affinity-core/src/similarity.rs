//! Pairwise similarity between two users' rating sets.
//!
//! The `Similarity` trait scores how alike two users are, given the ratings
//! each of them recorded. The recommender is generic over it so the
//! neighbourhood search does not depend on a particular metric.

use crate::UserRatings;

/// Calculate the similarity between two users.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single metric
/// can serve concurrent queries against a shared rating matrix.
///
/// Implementations must:
/// - Return `None` when the similarity is undefined for the pair, never a NaN
///   sentinel.
/// - Return finite values otherwise.
/// - Be symmetric: swapping `lhs` and `rhs` yields the same result.
///
/// # Examples
///
/// ```rust
/// use affinity_core::{RatingMatrix, Similarity, UserRatings};
///
/// struct OverlapCount;
///
/// impl Similarity for OverlapCount {
///     fn similarity(&self, lhs: &UserRatings, rhs: &UserRatings) -> Option<f64> {
///         let shared = lhs.common_ratings(rhs).count();
///         (shared > 0).then(|| f64::from(u32::try_from(shared).unwrap_or(u32::MAX)))
///     }
/// }
///
/// # fn main() -> Result<(), affinity_core::RatingMatrixError> {
/// let matrix = RatingMatrix::from_triplets([(1, 10, 5.0), (2, 10, 1.0)])?;
/// let (a, b) = (matrix.ratings(1).unwrap(), matrix.ratings(2).unwrap());
/// assert_eq!(OverlapCount.similarity(a, b), Some(1.0));
/// # Ok(())
/// # }
/// ```
pub trait Similarity: Send + Sync {
    /// Return the similarity between `lhs` and `rhs`, or `None` when it is
    /// undefined.
    fn similarity(&self, lhs: &UserRatings, rhs: &UserRatings) -> Option<f64>;
}

impl<S: Similarity + ?Sized> Similarity for &S {
    fn similarity(&self, lhs: &UserRatings, rhs: &UserRatings) -> Option<f64> {
        (**self).similarity(lhs, rhs)
    }
}
