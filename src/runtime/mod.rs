// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! Only the browser for now: `wasm-bindgen` exports for the search box and
//! the DOM implementation of the highlighter's text tree. Build with
//! `--no-default-features --features wasm` for `wasm32-unknown-unknown`.

#[cfg(feature = "wasm")]
pub mod wasm;
