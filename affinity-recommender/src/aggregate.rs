//! Similarity-weighted scoring of items the target user has not rated.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use affinity_core::{ItemId, Neighbor, RatingMatrix, Recommendation, UserRatings};

use crate::ranking::recommendation_order;

/// Sums `similarity × rating` per unseen item across a neighbourhood.
///
/// The result is an unnormalised weighted sum: an item rated by two neighbours
/// scores the sum of both contributions. Items no neighbour rated are never
/// emitted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Score and rank every item rated by a neighbour but not by the target.
    ///
    /// Neighbours without an entry in `matrix` contribute nothing.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "predicted scores are similarity-weighted sums of ratings"
    )]
    pub fn aggregate(
        &self,
        target: &UserRatings,
        neighbours: &[Neighbor],
        matrix: &RatingMatrix,
    ) -> Vec<Recommendation> {
        let mut scores: BTreeMap<ItemId, f64> = BTreeMap::new();
        for neighbour in neighbours {
            let Some(ratings) = matrix.ratings(neighbour.user) else {
                continue;
            };
            for (item, rating) in ratings.iter().filter(|&(item, _)| !target.contains(item)) {
                *scores.entry(item).or_insert(0.0_f64) += neighbour.similarity * rating;
            }
        }

        let mut ranked: Vec<Recommendation> = scores
            .into_iter()
            .map(|(item, score)| Recommendation::new(item, score))
            .collect();
        ranked.sort_by(recommendation_order);
        ranked
    }
}

/// Keep the first `n` entries of a ranked list.
///
/// Shorter lists are returned whole; nothing is padded.
///
/// # Examples
///
/// ```
/// use affinity_core::Recommendation;
/// use affinity_recommender::top_n;
///
/// let ranked = vec![Recommendation::new(1, 3.0), Recommendation::new(2, 1.0)];
/// assert_eq!(top_n(ranked.clone(), 5), ranked);
/// assert_eq!(top_n(ranked, 1).len(), 1);
/// ```
#[must_use]
pub fn top_n(mut ranked: Vec<Recommendation>, n: usize) -> Vec<Recommendation> {
    ranked.truncate(n);
    ranked
}
