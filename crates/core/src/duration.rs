// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration codec for short literals
//!
//! Literals are a positive integer followed by exactly one unit character
//! in `{s, m, h, d}` (`d` = 24h). Formatting always picks the largest unit
//! that divides the duration exactly, so two literals that parse to the
//! same duration format identically (`"24h"` comes back as `"1d"`). The
//! interval normalizer relies on that canonical form for stable ordering.

use crate::error::SpecError;
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 86_400;

/// Parse a short duration literal like `"30s"`, `"10m"`, `"4h"`, `"365d"`.
pub fn parse_duration(literal: &str) -> Result<Duration, SpecError> {
    if literal.len() < 2 || !literal.is_ascii() {
        return Err(SpecError::InvalidDuration(literal.to_string()));
    }

    // One trailing ASCII unit character; everything before it is the value.
    let (value_str, unit) = literal.split_at(literal.len() - 1);
    let value: u64 = value_str
        .parse()
        .map_err(|_| SpecError::InvalidDuration(literal.to_string()))?;

    // Checked: a grammar-valid value can still overflow seconds.
    let secs = match unit {
        "s" => Some(value),
        "m" => value.checked_mul(SECS_PER_MINUTE),
        "h" => value.checked_mul(SECS_PER_HOUR),
        "d" => value.checked_mul(SECS_PER_DAY),
        _ => None,
    }
    .ok_or_else(|| SpecError::InvalidDuration(literal.to_string()))?;

    Ok(Duration::from_secs(secs))
}

/// Format a duration as its canonical short literal.
///
/// Picks the largest unit that divides the duration exactly, checked in
/// order d, h, m, then falls back to seconds. Zero formats as `"0s"`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    let (value, unit) = match secs {
        0 => (0, "s"),
        s if s % SECS_PER_DAY == 0 => (s / SECS_PER_DAY, "d"),
        s if s % SECS_PER_HOUR == 0 => (s / SECS_PER_HOUR, "h"),
        s if s % SECS_PER_MINUTE == 0 => (s / SECS_PER_MINUTE, "m"),
        s => (s, "s"),
    };

    format!("{}{}", value, unit)
}

/// Re-format a literal into its canonical form.
pub fn canonicalize(literal: &str) -> Result<String, SpecError> {
    Ok(format_duration(parse_duration(literal)?))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
