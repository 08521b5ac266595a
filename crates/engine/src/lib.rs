// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tempo-engine: reconciles desired namespace and schedule configuration
//! against the control plane's live state
//!
//! Each reconciler owns one resource kind and implements the same
//! create/read/update/delete/import shape: encode the desired spec, issue
//! the remote call through the injected client handle, read back the
//! authoritative state, decode. No state persists between calls; the
//! control plane is the single source of truth.

mod error;
mod namespace;
mod schedule;

pub use error::{Operation, ReadOutcome, ReconcileError, Warning};
pub use namespace::NamespaceReconciler;
pub use schedule::ScheduleReconciler;
