// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake namespace client for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{
    ArchivalStateWire, NamespaceClient, NamespaceDescription, NamespaceKey,
    RegisterNamespaceRequest, UpdateNamespaceRequest,
};
use crate::error::ClientError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded namespace call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceCall {
    Register { name: String },
    Describe { key: NamespaceKey },
    Update { name: String },
    Delete { id: String },
}

#[derive(Default)]
struct FakeNamespaceState {
    namespaces: HashMap<String, NamespaceDescription>,
    calls: Vec<NamespaceCall>,
    next_id: u32,
    // Configurable cluster behavior
    history_archival_available: bool,
    visibility_archival_available: bool,
}

/// In-memory namespace client with call recording for testing.
///
/// Mimics the control plane's quiet downgrade of archival enablement: unless
/// cluster-level archival is switched on, a requested `Enabled` state is
/// stored as `Disabled` without the call failing.
#[derive(Clone, Default)]
pub struct FakeNamespaceClient {
    state: Arc<Mutex<FakeNamespaceState>>,
}

impl FakeNamespaceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<NamespaceCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Switch cluster-level archival on or off.
    pub fn set_archival_available(&self, history: bool, visibility: bool) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.history_archival_available = history;
        state.visibility_archival_available = visibility;
    }

    /// Get a stored namespace by name
    pub fn get(&self, name: &str) -> Option<NamespaceDescription> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .namespaces
            .get(name)
            .cloned()
    }
}

fn effective_archival(requested: ArchivalStateWire, available: bool) -> ArchivalStateWire {
    match requested {
        ArchivalStateWire::Enabled if !available => ArchivalStateWire::Disabled,
        other => other,
    }
}

#[async_trait]
impl NamespaceClient for FakeNamespaceClient {
    async fn register(&self, request: RegisterNamespaceRequest) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(NamespaceCall::Register {
            name: request.namespace.clone(),
        });

        if state.namespaces.contains_key(&request.namespace) {
            return Err(ClientError::AlreadyExists {
                kind: "namespace",
                key: request.namespace,
            });
        }

        state.next_id += 1;
        let description = NamespaceDescription {
            id: format!("ns-{}", state.next_id),
            name: request.namespace.clone(),
            description: request.description,
            owner_email: request.owner_email,
            retention: request.retention,
            is_global: request.is_global,
            history_archival_state: effective_archival(
                request.history_archival_state,
                state.history_archival_available,
            ),
            history_archival_uri: request.history_archival_uri,
            visibility_archival_state: effective_archival(
                request.visibility_archival_state,
                state.visibility_archival_available,
            ),
            visibility_archival_uri: request.visibility_archival_uri,
            data: request.data,
        };
        state.namespaces.insert(request.namespace, description);

        Ok(())
    }

    async fn describe(&self, key: &NamespaceKey) -> Result<NamespaceDescription, ClientError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(NamespaceCall::Describe { key: key.clone() });

        let found = match key {
            NamespaceKey::Name(name) => state.namespaces.get(name),
            NamespaceKey::Id(id) => state.namespaces.values().find(|ns| &ns.id == id),
        };

        found.cloned().ok_or_else(|| ClientError::NotFound {
            kind: "namespace",
            key: key.to_string(),
        })
    }

    async fn update(
        &self,
        request: UpdateNamespaceRequest,
    ) -> Result<NamespaceDescription, ClientError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(NamespaceCall::Update {
            name: request.namespace.clone(),
        });

        let history_available = state.history_archival_available;
        let visibility_available = state.visibility_archival_available;

        let existing = state.namespaces.get_mut(&request.namespace).ok_or_else(|| {
            ClientError::NotFound {
                kind: "namespace",
                key: request.namespace.clone(),
            }
        })?;

        existing.description = request.description;
        existing.owner_email = request.owner_email;
        existing.data = request.data;
        existing.retention = request.retention;
        existing.history_archival_state =
            effective_archival(request.history_archival_state, history_available);
        existing.history_archival_uri = request.history_archival_uri;
        existing.visibility_archival_state =
            effective_archival(request.visibility_archival_state, visibility_available);
        existing.visibility_archival_uri = request.visibility_archival_uri;
        if request.promote {
            existing.is_global = true;
        }

        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(NamespaceCall::Delete { id: id.to_string() });

        let name = state
            .namespaces
            .values()
            .find(|ns| ns.id == id)
            .map(|ns| ns.name.clone())
            .ok_or_else(|| ClientError::NotFound {
                kind: "namespace",
                key: id.to_string(),
            })?;

        state.namespaces.remove(&name);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
