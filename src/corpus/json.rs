// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON corpus: an array of `{title, content, url}` records.

use super::RawRecord;
use crate::error::ParseError;

pub(super) fn parse_records(body: &str) -> Result<Vec<RawRecord>, ParseError> {
    let records: Vec<RawRecord> = serde_json::from_str(body)?;
    Ok(records)
}
