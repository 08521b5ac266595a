// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type shared by the control-plane client traits

use thiserror::Error;

/// Errors from remote control-plane calls.
///
/// `NotFound` is a recognized response class, not just a failure: read-shaped
/// reconciler operations translate it into an "absent" outcome instead of an
/// error. Everything the client cannot classify lands in `Call`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },
    #[error("{kind} already exists: {key}")]
    AlreadyExists { kind: &'static str, key: String },
    #[error("remote call failed: {0}")]
    Call(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
