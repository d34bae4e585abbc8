// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching pipeline.
//!
//! Debug-mode assertions over the values passed between matcher, merger and
//! excerpt selector. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the stage that broke the invariant, not three stages later
//!    when a highlight lands in the wrong place
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Invariant                                         |
//! |-------------------------------|---------------------------------------------------|
//! | `check_occurrences_sorted`    | position asc, then length desc                    |
//! | `check_slice_well_formed`     | hits increasing, disjoint, inside `[start, end)`  |
//! | `check_fragments_round_trip`  | fragments concatenate back to the source text     |

use crate::types::{Fragment, Occurrence, Slice};

// ============================================================================
// OCCURRENCE CONTRACTS
// ============================================================================

/// Check the matcher's output ordering.
///
/// # Panics (debug builds only)
/// Panics if an adjacent pair is out of order.
#[inline]
pub fn check_occurrences_sorted(occurrences: &[Occurrence]) {
    for (i, pair) in occurrences.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        debug_assert!(
            prev.position < curr.position
                || (prev.position == curr.position && prev.len >= curr.len),
            "Contract violation: occurrences[{}] ({}, len {}) sorts after occurrences[{}] ({}, len {})",
            i,
            prev.position,
            prev.len,
            i + 1,
            curr.position,
            curr.len
        );
    }
}

// ============================================================================
// SLICE CONTRACTS
// ============================================================================

/// Check that a slice's hits are ordered, disjoint and inside its window.
///
/// # Panics (debug builds only)
/// Panics on the first hit that violates the invariant.
#[inline]
pub fn check_slice_well_formed(slice: &Slice) {
    let mut cursor = slice.start;
    for (i, hit) in slice.hits.iter().enumerate() {
        debug_assert!(
            hit.position >= cursor,
            "Contract violation: hit[{}] at {} overlaps or precedes {}",
            i,
            hit.position,
            cursor
        );
        debug_assert!(
            hit.end() <= slice.end,
            "Contract violation: hit[{}] ends at {} past slice end {}",
            i,
            hit.end(),
            slice.end
        );
        cursor = hit.end();
    }
    debug_assert!(
        slice.distinct <= slice.hits.len(),
        "Contract violation: {} distinct keywords from {} hits",
        slice.distinct,
        slice.hits.len()
    );
}

// ============================================================================
// FRAGMENT CONTRACTS
// ============================================================================

/// Check that splitting a text into fragments lost nothing.
///
/// # Panics (debug builds only)
/// Panics if the concatenation differs from `text`.
#[inline]
pub fn check_fragments_round_trip(text: &str, fragments: &[Fragment]) {
    debug_assert!(
        fragments.iter().map(Fragment::text).collect::<String>() == text,
        "Contract violation: fragments do not reassemble {:?}",
        text.chars().take(40).collect::<String>()
    );
}
