// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: how matching documents get ordered.
//!
//! There are no scores. Documents are ordered by two counts, coverage first
//! and raw hits second, with insertion order breaking what is left.

pub mod ranking;

pub use ranking::{compare_items, rank};
