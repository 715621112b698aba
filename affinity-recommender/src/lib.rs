//! User-based collaborative filtering over a sparse rating matrix.
//!
//! A query runs three steps in sequence:
//! - **Similarity**: [`SimilarityEngine`] correlates the target user with
//!   every other user over the items both rated, using
//!   [`PearsonSimilarity`] by default.
//! - **Neighbourhood**: [`NeighborhoodSelector`] keeps the top-K users whose
//!   similarity is strictly positive.
//! - **Aggregation**: [`ScoreAggregator`] sums `similarity × rating` for every
//!   item a neighbour rated and the target did not, then ranks the items.
//!
//! The matrix is only ever borrowed, so one loaded matrix can serve any number
//! of queries. Every intermediate structure is local to the query.
//!
//! # Examples
//!
//! ```
//! use affinity_core::RatingMatrix;
//! use affinity_recommender::recommend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = RatingMatrix::from_triplets([
//!     (1, 10, 5.0), (1, 20, 3.0), (1, 30, 4.0),
//!     (2, 10, 5.0), (2, 20, 3.0), (2, 30, 5.0), (2, 40, 4.0),
//! ])?;
//! let recommendations = recommend(&matrix, 1, 10, 5)?;
//! assert_eq!(recommendations.len(), 1);
//! assert_eq!(recommendations[0].item, 40);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod aggregate;
mod engine;
mod neighborhood;
mod pearson;
mod ranking;

use affinity_core::{
    Neighbor, RatingMatrix, RecommendError, Recommendation, RecommendationReport, Similarity,
    UserId,
};
use log::debug;

pub use aggregate::{ScoreAggregator, top_n};
pub use engine::{SimilarityEngine, SimilarityMap};
pub use neighborhood::NeighborhoodSelector;
pub use pearson::{MIN_COMMON_ITEMS, PearsonSimilarity};

/// Number of neighbours consulted when none is configured.
pub const DEFAULT_NEIGHBOURHOOD_SIZE: usize = 10;

/// Number of recommendations returned when none is configured.
pub const DEFAULT_TOP_N: usize = 5;

/// Compute the top `top_n` recommendations for `target` with Pearson
/// similarity and a neighbourhood of `neighbourhood_size` users.
///
/// # Errors
/// Returns [`RecommendError::UserNotFound`] when `target` is absent from
/// `matrix`.
pub fn recommend(
    matrix: &RatingMatrix,
    target: UserId,
    neighbourhood_size: usize,
    top_n: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    Recommender::new()
        .with_neighbourhood_size(neighbourhood_size)
        .with_top_n(top_n)
        .recommend(matrix, target)
}

/// Configured recommendation pipeline.
///
/// # Examples
///
/// ```
/// use affinity_core::RatingMatrix;
/// use affinity_recommender::Recommender;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let matrix = RatingMatrix::from_triplets([
///     (1, 10, 1.0), (1, 20, 2.0),
///     (2, 10, 2.0), (2, 20, 4.0), (2, 30, 5.0),
/// ])?;
/// let recommender = Recommender::new().with_neighbourhood_size(3).with_top_n(1);
/// let neighbours = recommender.neighbors(&matrix, 1)?;
/// assert_eq!(neighbours.len(), 1);
/// assert_eq!(recommender.recommend(&matrix, 1)?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommender<S = PearsonSimilarity> {
    engine: SimilarityEngine<S>,
    selector: NeighborhoodSelector,
    aggregator: ScoreAggregator,
    top_n: usize,
}

impl Recommender<PearsonSimilarity> {
    /// Create a recommender using Pearson similarity and the default sizes.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_metric(PearsonSimilarity)
    }
}

impl Default for Recommender<PearsonSimilarity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Similarity> Recommender<S> {
    /// Create a recommender backed by a custom similarity metric.
    #[must_use]
    pub const fn with_metric(metric: S) -> Self {
        Self {
            engine: SimilarityEngine::new(metric),
            selector: NeighborhoodSelector::new(DEFAULT_NEIGHBOURHOOD_SIZE),
            aggregator: ScoreAggregator,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Set how many neighbours contribute to each prediction.
    #[must_use]
    pub const fn with_neighbourhood_size(mut self, size: usize) -> Self {
        self.selector = NeighborhoodSelector::new(size);
        self
    }

    /// Set how many recommendations [`Recommender::recommend`] returns.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Configured neighbourhood size.
    #[must_use]
    pub const fn neighbourhood_size(&self) -> usize {
        self.selector.size()
    }

    /// Configured number of recommendations.
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }

    /// Select the neighbourhood of `target`.
    ///
    /// # Errors
    /// Returns [`RecommendError::UserNotFound`] when `target` is absent from
    /// `matrix`.
    pub fn neighbors(
        &self,
        matrix: &RatingMatrix,
        target: UserId,
    ) -> Result<Vec<Neighbor>, RecommendError> {
        let similarities = self.engine.similarities(matrix, target)?;
        Ok(self.selector.select(&similarities))
    }

    /// Score and rank every unseen item reachable through the neighbourhood.
    ///
    /// # Errors
    /// Returns [`RecommendError::UserNotFound`] when `target` is absent from
    /// `matrix`.
    pub fn rank_items(
        &self,
        matrix: &RatingMatrix,
        target: UserId,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let target_ratings = matrix
            .ratings(target)
            .ok_or(RecommendError::UserNotFound { user: target })?;
        let similarities = self
            .engine
            .similarities_for(matrix, target, target_ratings);
        let neighbours = self.selector.select(&similarities);
        let ranked = self
            .aggregator
            .aggregate(target_ratings, &neighbours, matrix);
        debug!(
            "user {target}: {} defined similarities, {} neighbours, {} scored items",
            similarities.len(),
            neighbours.len(),
            ranked.len()
        );
        Ok(ranked)
    }

    /// Return the top recommendations for `target`.
    ///
    /// # Errors
    /// Returns [`RecommendError::UserNotFound`] when `target` is absent from
    /// `matrix`.
    pub fn recommend(
        &self,
        matrix: &RatingMatrix,
        target: UserId,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        self.rank_items(matrix, target)
            .map(|ranked| top_n(ranked, self.top_n))
    }

    /// Return the top recommendations for `target` bundled with the user.
    ///
    /// # Errors
    /// Returns [`RecommendError::UserNotFound`] when `target` is absent from
    /// `matrix`.
    pub fn report(
        &self,
        matrix: &RatingMatrix,
        target: UserId,
    ) -> Result<RecommendationReport, RecommendError> {
        self.recommend(matrix, target)
            .map(|recommendations| RecommendationReport::new(target, recommendations))
    }
}
