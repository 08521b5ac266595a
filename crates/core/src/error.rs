// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local error taxonomy for pre-flight validation
//!
//! Every variant here is detected before any remote call is issued, so a
//! failing encode never leaves a partially-mutated remote object.

use thiserror::Error;

/// Errors from translating a desired spec into wire form
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid duration literal: {0:?}")]
    InvalidDuration(String),
    #[error("unknown {field} value: {value:?}")]
    InvalidEnum { field: &'static str, value: String },
    #[error("invalid input payload: {0}")]
    InvalidPayload(String),
}
