//! Selection of the most similar, positively correlated users.

#![forbid(unsafe_code)]

use affinity_core::Neighbor;

use crate::{DEFAULT_NEIGHBOURHOOD_SIZE, SimilarityMap, ranking::neighbor_order};

/// Keeps the top-K users with a similarity strictly greater than zero.
///
/// Neighbours are ordered by similarity descending. Users with equal
/// similarity are ordered by ascending identifier, which also decides who is
/// kept at the truncation boundary.
///
/// # Examples
///
/// ```
/// use affinity_recommender::{NeighborhoodSelector, SimilarityMap};
///
/// let similarities = SimilarityMap::from([(2, 0.9), (3, -0.4), (4, 0.9), (5, 0.1)]);
/// let neighbours = NeighborhoodSelector::new(2).select(&similarities);
/// let users: Vec<_> = neighbours.iter().map(|n| n.user).collect();
/// assert_eq!(users, vec![2, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodSelector {
    size: usize,
}

impl NeighborhoodSelector {
    /// Create a selector keeping at most `size` neighbours.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Maximum number of neighbours retained.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Rank positively correlated users and keep the top `size`.
    #[must_use]
    pub fn select(&self, similarities: &SimilarityMap) -> Vec<Neighbor> {
        let mut neighbours: Vec<Neighbor> = similarities
            .iter()
            .filter(|&(_, &similarity)| similarity > 0.0_f64)
            .map(|(&user, &similarity)| Neighbor::new(user, similarity))
            .collect();
        neighbours.sort_by(neighbor_order);
        neighbours.truncate(self.size);
        neighbours
    }
}

impl Default for NeighborhoodSelector {
    fn default() -> Self {
        Self::new(DEFAULT_NEIGHBOURHOOD_SIZE)
    }
}
