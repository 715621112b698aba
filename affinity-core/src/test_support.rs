//! Test-only rating matrices and similarity metrics used by unit, behaviour
//! and property tests across the workspace.

use crate::{ItemId, Rating, RatingMatrix, Similarity, UserId, UserRatings};

/// Build a matrix from triplets, panicking on non-finite ratings.
///
/// # Panics
/// Panics when any rating is NaN or infinite.
pub fn matrix_from(triplets: &[(UserId, ItemId, Rating)]) -> RatingMatrix {
    RatingMatrix::from_triplets(triplets.iter().copied())
        .unwrap_or_else(|err| panic!("test matrix must hold finite ratings: {err}"))
}

/// Three users rating a shared catalogue.
///
/// User 2 tracks user 1 closely and adds item 40. User 3 rates the shared
/// items identically, so its correlation with anyone is undefined, and adds
/// item 50.
pub fn example_matrix() -> RatingMatrix {
    matrix_from(&[
        (1, 10, 5.0),
        (1, 20, 3.0),
        (1, 30, 4.0),
        (2, 10, 5.0),
        (2, 20, 3.0),
        (2, 30, 5.0),
        (2, 40, 4.0),
        (3, 10, 1.0),
        (3, 20, 1.0),
        (3, 30, 1.0),
        (3, 50, 5.0),
    ])
}

/// Deterministic `Similarity` returning the same score for every pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSimilarity(pub f64);

impl Similarity for ConstantSimilarity {
    fn similarity(&self, _lhs: &UserRatings, _rhs: &UserRatings) -> Option<f64> {
        Some(self.0)
    }
}
