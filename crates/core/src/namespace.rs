// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Namespace state records and the archival-state word table

use crate::error::SpecError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Archival state of a namespace's history or visibility records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchivalState {
    Unspecified,
    Enabled,
    Disabled,
}

impl ArchivalState {
    /// Parse a caller-entered word, case-insensitively.
    ///
    /// Unlike the overlap-policy table, unknown words are rejected here.
    /// That asymmetry is inherited behavior; see DESIGN.md.
    pub fn from_word(word: &str) -> Result<Self, SpecError> {
        match word.to_ascii_lowercase().as_str() {
            "unspecified" => Ok(Self::Unspecified),
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            _ => Err(SpecError::InvalidEnum {
                field: "archival state",
                value: word.to_string(),
            }),
        }
    }

    /// Canonical lowercase word for this state.
    pub fn as_word(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

/// Desired configuration for a namespace.
///
/// `name` is the namespace's identity: it is never mutated in place, a name
/// change means destroy-and-recreate at the caller level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSpec {
    pub name: String,
    pub description: String,
    /// Workflow execution retention TTL literal. E.g. `"24h"`, `"365d"`.
    pub retention: String,
    pub owner_email: String,
    pub is_global: bool,
    /// Archival state word: `unspecified`, `enabled` or `disabled`.
    pub history_archival_state: String,
    pub history_archival_uri: String,
    pub visibility_archival_state: String,
    pub visibility_archival_uri: String,
    /// Free-form namespace data in key=value form.
    pub data: BTreeMap<String, String>,
}

impl NamespaceSpec {
    /// A spec with the stock defaults, ready for field-by-field override.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            retention: "365d".to_string(),
            owner_email: String::new(),
            is_global: false,
            history_archival_state: "disabled".to_string(),
            history_archival_uri: String::new(),
            visibility_archival_state: "disabled".to_string(),
            visibility_archival_uri: String::new(),
            data: BTreeMap::new(),
        }
    }
}

/// Observed namespace state as reported by the control plane.
///
/// Superset of [`NamespaceSpec`]: adds the server-assigned `id`, which is
/// the key namespace deletion is issued against. Archival state words and
/// the retention literal come back in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceState {
    pub id: String,
    pub name: String,
    pub description: String,
    pub retention: String,
    pub owner_email: String,
    pub is_global: bool,
    pub history_archival_state: String,
    pub history_archival_uri: String,
    pub visibility_archival_state: String,
    pub visibility_archival_uri: String,
    pub data: BTreeMap<String, String>,
}

#[cfg(test)]
#[path = "namespace_tests.rs"]
mod tests;
