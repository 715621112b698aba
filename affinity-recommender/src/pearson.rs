//! Pearson product-moment correlation between two users.

#![forbid(unsafe_code)]

use affinity_core::{Similarity, UserRatings};

/// Minimum number of co-rated items needed for a defined correlation.
pub const MIN_COMMON_ITEMS: usize = 2;

/// Pearson correlation over the items both users rated.
///
/// The correlation is undefined, and `None` is returned, when the users share
/// fewer than [`MIN_COMMON_ITEMS`] items or when either user's co-rated values
/// are all identical.
///
/// # Examples
///
/// ```
/// use affinity_core::{RatingMatrix, Similarity};
/// use affinity_recommender::PearsonSimilarity;
///
/// # fn main() -> Result<(), affinity_core::RatingMatrixError> {
/// let matrix = RatingMatrix::from_triplets([
///     (1, 10, 1.0), (1, 20, 2.0), (1, 30, 3.0),
///     (2, 10, 2.0), (2, 20, 4.0), (2, 30, 6.0),
/// ])?;
/// let (a, b) = (matrix.ratings(1).unwrap(), matrix.ratings(2).unwrap());
/// let r = PearsonSimilarity.similarity(a, b).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PearsonSimilarity;

impl Similarity for PearsonSimilarity {
    fn similarity(&self, lhs: &UserRatings, rhs: &UserRatings) -> Option<f64> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = lhs
            .common_ratings(rhs)
            .map(|(_, left, right)| (left, right))
            .unzip();
        correlation(&xs, &ys)
    }
}

/// Correlate two equally long samples.
///
/// Uses centred sums rather than the single-pass formula so near-constant
/// samples do not cancel catastrophically.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "correlation is computed with floating-point means over small sample counts"
)]
pub(crate) fn correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < MIN_COMMON_ITEMS {
        return None;
    }
    if is_constant(xs) || is_constant(ys) {
        return None;
    }

    let count = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / count;
    let mean_y = ys.iter().sum::<f64>() / count;

    let (covariance, variance_x, variance_y) = xs.iter().zip(ys).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(cov, var_x, var_y), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (cov + dx * dy, var_x + dx * dx, var_y + dy * dy)
        },
    );

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0_f64 || !denominator.is_finite() {
        return None;
    }
    let r = covariance / denominator;
    r.is_finite().then(|| r.clamp(-1.0_f64, 1.0_f64))
}

#[expect(
    clippy::float_cmp,
    reason = "zero variance means every sample is bit-for-bit equal"
)]
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|pair| match pair {
        [first, second] => first == second,
        _ => true,
    })
}
