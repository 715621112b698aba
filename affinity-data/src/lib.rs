//! Rating data access for the Affinity engine.
//!
//! Responsibilities:
//! - Read delimited `user,item,rating` files into a [`RatingMatrix`].
//! - Report malformed input with the offending line number.
//! - Inspect and open input paths through capability-based file handles.
//!
//! Boundaries:
//! - Do not encode recommendation rules (live in `affinity-recommender`).
//! - Never hand a partially loaded matrix to callers; a bad line aborts the
//!   load.
//!
//! Invariants:
//! - Later lines overwrite earlier ones for a repeated `(user, item)` pair.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod fs;

use std::io::BufRead;
use std::num::{ParseFloatError, ParseIntError};

use affinity_core::{ItemId, Rating, RatingMatrix, RatingMatrixError, UserId};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use thiserror::Error;

const FIELD_SEPARATOR: char = ',';

/// Errors returned when loading a ratings file.
#[derive(Debug, Error)]
pub enum LoadRatingsError {
    /// Opening the ratings file failed.
    #[error("failed to open ratings file at {path}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading a line from the input failed.
    #[error("failed to read line {line}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A line did not have exactly three comma-separated fields.
    #[error("line {line}: expected 3 comma-separated fields, found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of fields present.
        found: usize,
    },
    /// The user field was not a non-negative integer.
    #[error("line {line}: invalid user id {value:?}")]
    InvalidUserId {
        /// 1-based line number.
        line: usize,
        /// Raw field value.
        value: String,
        /// Source error from integer parsing.
        #[source]
        source: ParseIntError,
    },
    /// The item field was not a non-negative integer.
    #[error("line {line}: invalid item id {value:?}")]
    InvalidItemId {
        /// 1-based line number.
        line: usize,
        /// Raw field value.
        value: String,
        /// Source error from integer parsing.
        #[source]
        source: ParseIntError,
    },
    /// The rating field was not a decimal number.
    #[error("line {line}: invalid rating {value:?}")]
    InvalidRating {
        /// 1-based line number.
        line: usize,
        /// Raw field value.
        value: String,
        /// Source error from float parsing.
        #[source]
        source: ParseFloatError,
    },
    /// The rating parsed but was NaN or infinite.
    #[error("line {line}: rating is not a finite number")]
    NonFiniteRating {
        /// 1-based line number.
        line: usize,
        /// Source error from the rating matrix.
        #[source]
        source: RatingMatrixError,
    },
}

/// Load a ratings file from disk.
///
/// # Errors
/// Returns [`LoadRatingsError::Open`] when the file cannot be opened and the
/// errors of [`read_ratings`] for malformed content.
pub fn load_ratings(path: &Utf8Path) -> Result<RatingMatrix, LoadRatingsError> {
    let reader = fs::open_buffered(path).map_err(|source| LoadRatingsError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = read_ratings(reader)?;
    debug!(
        "loaded {} ratings for {} users from {path}",
        matrix.rating_count(),
        matrix.user_count()
    );
    Ok(matrix)
}

/// Read `user,item,rating` lines into a matrix.
///
/// Surrounding whitespace in each field is ignored and blank lines are
/// skipped. When a `(user, item)` pair repeats, the later line wins.
///
/// # Errors
/// Returns the first [`LoadRatingsError`] encountered; no partial matrix is
/// produced.
///
/// # Examples
///
/// ```
/// use affinity_data::read_ratings;
///
/// # fn main() -> Result<(), affinity_data::LoadRatingsError> {
/// let input = "1,10,5.0\n1,20,3\n2,10,4.5\n1,10,2.0\n";
/// let matrix = read_ratings(input.as_bytes())?;
/// assert_eq!(matrix.user_count(), 2);
/// assert_eq!(matrix.ratings(1).and_then(|r| r.get(10)), Some(2.0));
/// # Ok(())
/// # }
/// ```
pub fn read_ratings<R: BufRead>(reader: R) -> Result<RatingMatrix, LoadRatingsError> {
    let mut matrix = RatingMatrix::new();
    let mut overwritten = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line_number = index.saturating_add(1);
        let text = line.map_err(|source| LoadRatingsError::Read {
            line: line_number,
            source,
        })?;
        let Some((user, item, rating)) = parse_line(&text, line_number)? else {
            continue;
        };
        let previous = matrix
            .insert(user, item, rating)
            .map_err(|source| LoadRatingsError::NonFiniteRating {
                line: line_number,
                source,
            })?;
        if previous.is_some() {
            overwritten = overwritten.saturating_add(1);
        }
    }
    if overwritten > 0 {
        warn!("{overwritten} duplicate ratings overwrote earlier values");
    }
    Ok(matrix)
}

/// Parse one input line, returning `None` for blank lines.
fn parse_line(
    text: &str,
    line: usize,
) -> Result<Option<(UserId, ItemId, Rating)>, LoadRatingsError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [user, item, rating] = fields.as_slice() else {
        return Err(LoadRatingsError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let user_id = user
        .parse::<UserId>()
        .map_err(|source| LoadRatingsError::InvalidUserId {
            line,
            value: (*user).to_owned(),
            source,
        })?;
    let item_id = item
        .parse::<ItemId>()
        .map_err(|source| LoadRatingsError::InvalidItemId {
            line,
            value: (*item).to_owned(),
            source,
        })?;
    let value = rating
        .parse::<Rating>()
        .map_err(|source| LoadRatingsError::InvalidRating {
            line,
            value: (*rating).to_owned(),
            source,
        })?;
    Ok(Some((user_id, item_id, value)))
}
