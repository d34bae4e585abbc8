// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the matcher, the excerpt selector and the renderer.
//!
//! Case folding that remembers where every folded byte came from, and
//! character-counted stepping over UTF-8 byte offsets.

pub mod fold;
pub mod text;

pub use fold::{fold_keyword, FoldedText};
pub use text::{chars_back, chars_forward};
