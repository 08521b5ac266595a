// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error and outcome types for the reconcilers

use tempo_adapters::ClientError;
use tempo_core::SpecError;
use thiserror::Error;

/// The reconciler operation being attempted when a remote call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Import,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Import => "import",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from reconciling one resource.
///
/// `Spec` failures happen before any remote call, so the remote object is
/// untouched. `Remote` failures carry the resource identity and the
/// operation that was in flight; they are reported once and never retried
/// here.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error("{operation} failed for {kind} {identity:?}: {source}")]
    Remote {
        kind: &'static str,
        identity: String,
        operation: Operation,
        #[source]
        source: ClientError,
    },
}

impl ReconcileError {
    pub(crate) fn remote(
        kind: &'static str,
        identity: &str,
        operation: Operation,
        source: ClientError,
    ) -> Self {
        Self::Remote {
            kind,
            identity: identity.to_string(),
            operation,
            source,
        }
    }
}

/// Outcome of a read-shaped operation.
///
/// `Absent` is a recognized outcome, not an error: it tells the caller the
/// remote object no longer exists and any persisted record should be
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<T> {
    Found(T),
    Absent,
}

impl<T> ReadOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(state) => Some(state),
            Self::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Non-fatal configuration warning: the operation succeeded but a requested
/// sub-setting was not actually applied by the control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    HistoryArchivalNotEnabled { namespace: String },
    VisibilityArchivalNotEnabled { namespace: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HistoryArchivalNotEnabled { namespace } => write!(
                f,
                "unable to enable history archival for namespace {:?}: is history archival enabled at the cluster level?",
                namespace
            ),
            Self::VisibilityArchivalNotEnabled { namespace } => write!(
                f,
                "unable to enable visibility archival for namespace {:?}: is visibility archival enabled at the cluster level?",
                namespace
            ),
        }
    }
}
