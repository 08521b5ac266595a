// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interval normalizer for schedule interval sets
//!
//! A schedule's interval set has no caller-meaningful order: the remote
//! control plane may return intervals in any order, and two configurations
//! that differ only in listing order are the same configuration. Normalizing
//! canonicalizes every literal through the duration codec, then sorts
//! lexicographically on the canonical `every` literal (ties broken by the
//! canonical `offset` literal). The sort is on the string, not the numeric
//! duration, so output stays stable and human-diffable.

use crate::duration::canonicalize;
use crate::error::SpecError;
use serde::{Deserialize, Serialize};

/// One interval specification: run every `every`, shifted by `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSpec {
    /// Period to repeat the interval. E.g. `"30s"`, `"10m"`, `"4h"`, `"7d"`.
    pub every: String,
    /// Fixed offset added to the interval period. Empty means `"0s"`.
    #[serde(default)]
    pub offset: String,
}

impl IntervalSpec {
    pub fn new(every: impl Into<String>, offset: impl Into<String>) -> Self {
        Self {
            every: every.into(),
            offset: offset.into(),
        }
    }
}

/// Canonicalize and deterministically order an interval set.
///
/// Idempotent: normalizing an already-normalized sequence is a no-op.
/// Fails with `InvalidDuration` if any literal does not parse.
pub fn normalize_intervals(intervals: Vec<IntervalSpec>) -> Result<Vec<IntervalSpec>, SpecError> {
    let mut normalized = intervals
        .into_iter()
        .map(|interval| {
            let offset = if interval.offset.is_empty() {
                "0s".to_string()
            } else {
                canonicalize(&interval.offset)?
            };
            Ok(IntervalSpec {
                every: canonicalize(&interval.every)?,
                offset,
            })
        })
        .collect::<Result<Vec<_>, SpecError>>()?;

    normalized.sort_by(|a, b| a.every.cmp(&b.every).then_with(|| a.offset.cmp(&b.offset)));

    Ok(normalized)
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
