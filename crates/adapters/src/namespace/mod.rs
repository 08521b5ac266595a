// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Namespace client handle and wire types

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNamespaceClient, NamespaceCall};

use crate::error::ClientError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// Archival state as the control plane encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchivalStateWire {
    Unspecified,
    Enabled,
    Disabled,
}

/// Key a namespace describe call is issued against.
///
/// Mutation is keyed by name; deletion by the server-assigned id. Describe
/// accepts either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceKey {
    Name(String),
    Id(String),
}

impl std::fmt::Display for NamespaceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Request to register a new namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterNamespaceRequest {
    pub namespace: String,
    pub description: String,
    pub owner_email: String,
    pub retention: Duration,
    pub is_global: bool,
    pub history_archival_state: ArchivalStateWire,
    pub history_archival_uri: String,
    pub visibility_archival_state: ArchivalStateWire,
    pub visibility_archival_uri: String,
    pub data: BTreeMap<String, String>,
}

/// Full-object namespace update, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNamespaceRequest {
    pub namespace: String,
    pub description: String,
    pub owner_email: String,
    pub data: BTreeMap<String, String>,
    pub retention: Duration,
    pub history_archival_state: ArchivalStateWire,
    pub history_archival_uri: String,
    pub visibility_archival_state: ArchivalStateWire,
    pub visibility_archival_uri: String,
    /// Promote the namespace to global.
    pub promote: bool,
}

/// Namespace object as the control plane reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDescription {
    /// Server-assigned namespace id.
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner_email: String,
    pub retention: Duration,
    pub is_global: bool,
    pub history_archival_state: ArchivalStateWire,
    pub history_archival_uri: String,
    pub visibility_archival_state: ArchivalStateWire,
    pub visibility_archival_uri: String,
    pub data: BTreeMap<String, String>,
}

/// Client handle for namespace operations on the control plane.
#[async_trait]
pub trait NamespaceClient: Clone + Send + Sync + 'static {
    /// Register a new namespace. The response carries no authoritative
    /// state; callers describe afterwards.
    async fn register(&self, request: RegisterNamespaceRequest) -> Result<(), ClientError>;

    /// Describe a namespace by name or id.
    async fn describe(&self, key: &NamespaceKey) -> Result<NamespaceDescription, ClientError>;

    /// Replace a namespace's configuration, returning the updated object.
    async fn update(
        &self,
        request: UpdateNamespaceRequest,
    ) -> Result<NamespaceDescription, ClientError>;

    /// Administratively delete a namespace by server-assigned id.
    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}
