//! Sparse user–item rating storage.
//!
//! Ratings are kept in ordered maps so every walk over a user's items, and
//! every floating-point sum built from such a walk, happens in ascending
//! identifier order.

use std::collections::BTreeMap;

use thiserror::Error;

/// Opaque user identifier.
pub type UserId = u64;

/// Opaque item identifier.
pub type ItemId = u64;

/// A real-valued score a user assigned to an item.
pub type Rating = f64;

/// Errors returned when inserting into a [`RatingMatrix`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum RatingMatrixError {
    /// The rating was NaN or infinite.
    #[error("rating {rating} for user {user} and item {item} is not a finite number")]
    NonFiniteRating {
        /// User the rating belongs to.
        user: UserId,
        /// Item the rating belongs to.
        item: ItemId,
        /// Offending value.
        rating: Rating,
    },
}

/// Ratings recorded for a single user, keyed by item.
///
/// # Examples
///
/// ```
/// use affinity_core::RatingMatrix;
///
/// # fn main() -> Result<(), affinity_core::RatingMatrixError> {
/// let matrix = RatingMatrix::from_triplets([(1, 10, 5.0), (1, 20, 3.0), (2, 10, 4.0)])?;
/// let alice = matrix.ratings(1).expect("user 1 was inserted");
/// let bob = matrix.ratings(2).expect("user 2 was inserted");
/// let shared: Vec<_> = alice.common_ratings(bob).collect();
/// assert_eq!(shared, vec![(10, 5.0, 4.0)]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRatings {
    ratings: BTreeMap<ItemId, Rating>,
}

impl UserRatings {
    /// Create an empty rating set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ratings: BTreeMap::new(),
        }
    }

    /// Return the rating for `item`, if the user rated it.
    #[must_use]
    pub fn get(&self, item: ItemId) -> Option<Rating> {
        self.ratings.get(&item).copied()
    }

    /// Report whether the user rated `item`.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.ratings.contains_key(&item)
    }

    /// Number of rated items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Report whether the user has no ratings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Iterate over `(item, rating)` pairs in ascending item order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, Rating)> + '_ {
        self.ratings.iter().map(|(&item, &rating)| (item, rating))
    }

    /// Iterate over rated item identifiers in ascending order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ratings.keys().copied()
    }

    /// Walk the items rated by both users in ascending item order.
    ///
    /// Each entry yields `(item, self_rating, other_rating)`, so the two
    /// rating columns line up position by position.
    pub fn common_ratings<'a>(
        &'a self,
        other: &'a Self,
    ) -> impl Iterator<Item = (ItemId, Rating, Rating)> + 'a {
        self.iter()
            .filter_map(move |(item, rating)| other.get(item).map(|theirs| (item, rating, theirs)))
    }

    fn insert(&mut self, item: ItemId, rating: Rating) -> Option<Rating> {
        self.ratings.insert(item, rating)
    }
}

/// Sparse mapping from users to their item ratings.
///
/// The matrix only accepts finite ratings. Inserting a rating for a
/// `(user, item)` pair that already exists replaces the earlier value.
///
/// # Examples
///
/// ```
/// use affinity_core::RatingMatrix;
///
/// # fn main() -> Result<(), affinity_core::RatingMatrixError> {
/// let mut matrix = RatingMatrix::new();
/// assert_eq!(matrix.insert(1, 10, 4.0)?, None);
/// assert_eq!(matrix.insert(1, 10, 2.5)?, Some(4.0));
/// assert_eq!(matrix.ratings(1).and_then(|r| r.get(10)), Some(2.5));
/// assert!(matrix.insert(1, 20, f64::NAN).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingMatrix {
    users: BTreeMap<UserId, UserRatings>,
}

impl RatingMatrix {
    /// Create an empty matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: BTreeMap::new(),
        }
    }

    /// Build a matrix from `(user, item, rating)` triplets.
    ///
    /// Later triplets overwrite earlier ones for the same `(user, item)` pair.
    ///
    /// # Errors
    /// Returns [`RatingMatrixError::NonFiniteRating`] for the first rating that
    /// is NaN or infinite.
    pub fn from_triplets<I>(triplets: I) -> Result<Self, RatingMatrixError>
    where
        I: IntoIterator<Item = (UserId, ItemId, Rating)>,
    {
        let mut matrix = Self::new();
        for (user, item, rating) in triplets {
            matrix.insert(user, item, rating)?;
        }
        Ok(matrix)
    }

    /// Record `rating` for `user` and `item`, returning any value it replaced.
    ///
    /// # Errors
    /// Returns [`RatingMatrixError::NonFiniteRating`] when `rating` is NaN or
    /// infinite; the matrix is left unchanged.
    pub fn insert(
        &mut self,
        user: UserId,
        item: ItemId,
        rating: Rating,
    ) -> Result<Option<Rating>, RatingMatrixError> {
        if !rating.is_finite() {
            return Err(RatingMatrixError::NonFiniteRating { user, item, rating });
        }
        Ok(self.users.entry(user).or_default().insert(item, rating))
    }

    /// Return the ratings recorded for `user`.
    #[must_use]
    pub fn ratings(&self, user: UserId) -> Option<&UserRatings> {
        self.users.get(&user)
    }

    /// Report whether `user` has an entry in the matrix.
    #[must_use]
    pub fn contains_user(&self, user: UserId) -> bool {
        self.users.contains_key(&user)
    }

    /// Iterate over users and their ratings in ascending user order.
    pub fn users(&self) -> impl Iterator<Item = (UserId, &UserRatings)> + '_ {
        self.users.iter().map(|(&user, ratings)| (user, ratings))
    }

    /// Number of users with an entry.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Total number of stored ratings across all users.
    #[must_use]
    pub fn rating_count(&self) -> usize {
        self.users.values().map(UserRatings::len).sum()
    }

    /// Report whether the matrix holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
