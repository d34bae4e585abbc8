// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Coverage dominates. A document matching two different keywords once each
//! beats a document matching one keyword fifty times. Hit counts only matter
//! as tiebreakers among documents with the same coverage.

use crate::types::ResultItem;
use std::cmp::Ordering;

/// Compare two result items for ranking.
///
/// Sort order:
/// 1. **Included count** - distinct keywords matched (descending)
/// 2. **Hit count** - total occurrences (descending)
/// 3. **Id** - later insertion first, the final tiebreaker
///
/// Ids are unique within one query, so this is a total order and sorting is
/// idempotent.
///
/// # Example
///
/// ```ignore
/// // Broad coverage beats many hits of one keyword
/// let broad = ResultItem { included_count: 2, hit_count: 2, .. };
/// let narrow = ResultItem { included_count: 1, hit_count: 50, .. };
///
/// assert_eq!(compare_items(&broad, &narrow), Ordering::Less);
/// ```
pub fn compare_items(a: &ResultItem, b: &ResultItem) -> Ordering {
    match b.included_count.cmp(&a.included_count) {
        Ordering::Equal => match b.hit_count.cmp(&a.hit_count) {
            Ordering::Equal => b.id.cmp(&a.id),
            ord => ord,
        },
        ord => ord,
    }
}

/// Sort result items into display order.
pub fn rank(items: &mut [ResultItem]) {
    items.sort_by(compare_items);
}
