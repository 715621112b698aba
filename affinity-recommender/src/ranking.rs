//! Deterministic orderings for ranked output.
//!
//! Scores sort descending under `f64::total_cmp`; equal scores fall back to
//! ascending identifiers so truncation always keeps the same entries.

use std::cmp::Ordering;

use affinity_core::{Neighbor, Recommendation};

pub(crate) fn by_score_then_id(
    lhs_score: f64,
    lhs_id: u64,
    rhs_score: f64,
    rhs_id: u64,
) -> Ordering {
    rhs_score
        .total_cmp(&lhs_score)
        .then_with(|| lhs_id.cmp(&rhs_id))
}

pub(crate) fn neighbor_order(lhs: &Neighbor, rhs: &Neighbor) -> Ordering {
    by_score_then_id(lhs.similarity, lhs.user, rhs.similarity, rhs.user)
}

pub(crate) fn recommendation_order(lhs: &Recommendation, rhs: &Recommendation) -> Ordering {
    by_score_then_id(lhs.score, lhs.item, rhs.score, rhs.item)
}
