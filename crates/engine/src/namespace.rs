// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Namespace reconciliation: translator and reconciler
//!
//! The translator maps a [`NamespaceSpec`] to wire requests and a
//! [`NamespaceDescription`] back to an observed [`NamespaceState`]. The
//! reconciler drives the remote lifecycle through an injected
//! [`NamespaceClient`].

use crate::error::{Operation, ReadOutcome, ReconcileError, Warning};
use tempo_adapters::{
    ArchivalStateWire, NamespaceClient, NamespaceDescription, NamespaceKey,
    RegisterNamespaceRequest, UpdateNamespaceRequest,
};
use tempo_core::{
    format_duration, parse_duration, ArchivalState, NamespaceSpec, NamespaceState, SpecError,
};

const KIND: &str = "namespace";

fn archival_wire(word: &str) -> Result<ArchivalStateWire, SpecError> {
    // Strict: unknown words are rejected. The overlap-policy table on the
    // schedule side falls back instead; see DESIGN.md.
    Ok(match ArchivalState::from_word(word)? {
        ArchivalState::Unspecified => ArchivalStateWire::Unspecified,
        ArchivalState::Enabled => ArchivalStateWire::Enabled,
        ArchivalState::Disabled => ArchivalStateWire::Disabled,
    })
}

fn archival_word(wire: ArchivalStateWire) -> &'static str {
    match wire {
        ArchivalStateWire::Unspecified => ArchivalState::Unspecified.as_word(),
        ArchivalStateWire::Enabled => ArchivalState::Enabled.as_word(),
        ArchivalStateWire::Disabled => ArchivalState::Disabled.as_word(),
    }
}

/// Encode a desired spec as a registration request.
pub fn encode_register(spec: &NamespaceSpec) -> Result<RegisterNamespaceRequest, SpecError> {
    Ok(RegisterNamespaceRequest {
        namespace: spec.name.clone(),
        description: spec.description.clone(),
        owner_email: spec.owner_email.clone(),
        retention: parse_duration(&spec.retention)?,
        is_global: spec.is_global,
        history_archival_state: archival_wire(&spec.history_archival_state)?,
        history_archival_uri: spec.history_archival_uri.clone(),
        visibility_archival_state: archival_wire(&spec.visibility_archival_state)?,
        visibility_archival_uri: spec.visibility_archival_uri.clone(),
        data: spec.data.clone(),
    })
}

/// Encode a desired spec as a full-object update request.
pub fn encode_update(spec: &NamespaceSpec) -> Result<UpdateNamespaceRequest, SpecError> {
    Ok(UpdateNamespaceRequest {
        namespace: spec.name.clone(),
        description: spec.description.clone(),
        owner_email: spec.owner_email.clone(),
        data: spec.data.clone(),
        retention: parse_duration(&spec.retention)?,
        history_archival_state: archival_wire(&spec.history_archival_state)?,
        history_archival_uri: spec.history_archival_uri.clone(),
        visibility_archival_state: archival_wire(&spec.visibility_archival_state)?,
        visibility_archival_uri: spec.visibility_archival_uri.clone(),
        promote: spec.is_global,
    })
}

/// Decode a described namespace into observed state.
///
/// Archival states come out as canonical lowercase words, the retention as
/// its canonical literal.
pub fn decode(description: &NamespaceDescription) -> NamespaceState {
    NamespaceState {
        id: description.id.clone(),
        name: description.name.clone(),
        description: description.description.clone(),
        retention: format_duration(description.retention),
        owner_email: description.owner_email.clone(),
        is_global: description.is_global,
        history_archival_state: archival_word(description.history_archival_state).to_string(),
        history_archival_uri: description.history_archival_uri.clone(),
        visibility_archival_state: archival_word(description.visibility_archival_state).to_string(),
        visibility_archival_uri: description.visibility_archival_uri.clone(),
        data: description.data.clone(),
    }
}

/// Cross-check requested archival enablement against what the control plane
/// actually applied. A silent downgrade is a warning, never a failure.
fn archival_warnings(spec: &NamespaceSpec, description: &NamespaceDescription) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if spec.history_archival_state.eq_ignore_ascii_case("enabled")
        && description.history_archival_state != ArchivalStateWire::Enabled
    {
        warnings.push(Warning::HistoryArchivalNotEnabled {
            namespace: spec.name.clone(),
        });
    }
    if spec
        .visibility_archival_state
        .eq_ignore_ascii_case("enabled")
        && description.visibility_archival_state != ArchivalStateWire::Enabled
    {
        warnings.push(Warning::VisibilityArchivalNotEnabled {
            namespace: spec.name.clone(),
        });
    }

    warnings
}

/// Reconciles one namespace against the control plane.
///
/// Holds a shared client handle; concurrent reconcilers for different
/// namespaces are independent.
#[derive(Clone)]
pub struct NamespaceReconciler<C: NamespaceClient> {
    client: C,
}

impl<C: NamespaceClient> NamespaceReconciler<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Register the namespace, then read it back.
    ///
    /// The registration response is not authoritative for archival
    /// settings, so observed state always comes from the follow-up
    /// describe. Requested-but-unapplied archival enablement is returned
    /// as warnings alongside the state.
    pub async fn create(
        &self,
        desired: &NamespaceSpec,
    ) -> Result<(NamespaceState, Vec<Warning>), ReconcileError> {
        let request = encode_register(desired)?;

        self.client
            .register(request)
            .await
            .map_err(|e| ReconcileError::remote(KIND, &desired.name, Operation::Create, e))?;

        let described = self
            .client
            .describe(&NamespaceKey::Name(desired.name.clone()))
            .await
            .map_err(|e| ReconcileError::remote(KIND, &desired.name, Operation::Create, e))?;

        let warnings = archival_warnings(desired, &described);
        for warning in &warnings {
            tracing::warn!(namespace = %desired.name, %warning, "partial apply");
        }

        Ok((decode(&described), warnings))
    }

    /// Read by server-assigned id. A not-found response is the `Absent`
    /// outcome, not an error.
    pub async fn read(&self, id: &str) -> Result<ReadOutcome<NamespaceState>, ReconcileError> {
        self.describe_outcome(id, Operation::Read).await
    }

    /// Replace the namespace's configuration with the desired spec, then
    /// decode the returned object. Same archival cross-check as create.
    pub async fn update(
        &self,
        desired: &NamespaceSpec,
    ) -> Result<(NamespaceState, Vec<Warning>), ReconcileError> {
        let request = encode_update(desired)?;

        let described = self
            .client
            .update(request)
            .await
            .map_err(|e| ReconcileError::remote(KIND, &desired.name, Operation::Update, e))?;

        let warnings = archival_warnings(desired, &described);
        for warning in &warnings {
            tracing::warn!(namespace = %desired.name, %warning, "partial apply");
        }

        Ok((decode(&described), warnings))
    }

    /// Administratively delete by server-assigned id.
    ///
    /// Not idempotent: deleting an already-absent namespace surfaces the
    /// remote error. Callers skip delete when their own record is gone.
    pub async fn delete(&self, id: &str) -> Result<(), ReconcileError> {
        self.client
            .delete(id)
            .await
            .map_err(|e| ReconcileError::remote(KIND, id, Operation::Delete, e))
    }

    /// Adopt an existing remote namespace without a prior create.
    pub async fn import_existing(
        &self,
        id: &str,
    ) -> Result<ReadOutcome<NamespaceState>, ReconcileError> {
        self.describe_outcome(id, Operation::Import).await
    }

    async fn describe_outcome(
        &self,
        id: &str,
        operation: Operation,
    ) -> Result<ReadOutcome<NamespaceState>, ReconcileError> {
        match self.client.describe(&NamespaceKey::Id(id.to_string())).await {
            Ok(described) => Ok(ReadOutcome::Found(decode(&described))),
            Err(e) if e.is_not_found() => {
                tracing::debug!(id, "namespace absent");
                Ok(ReadOutcome::Absent)
            }
            Err(e) => Err(ReconcileError::remote(KIND, id, operation, e)),
        }
    }
}

#[cfg(test)]
#[path = "namespace_tests.rs"]
mod tests;
