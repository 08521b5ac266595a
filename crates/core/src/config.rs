// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection configuration resolution
//!
//! Resolves the options a transport layer dials with: explicitly supplied
//! values win over environment variables (`TEMPO_ADDRESS`, `TEMPO_NAMESPACE`,
//! `TEMPO_TLS`, `TEMPO_API_KEY`). Dialing itself lives outside this crate;
//! reconcilers only ever see the connected client handle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_ADDRESS: &str = "TEMPO_ADDRESS";
pub const ENV_NAMESPACE: &str = "TEMPO_NAMESPACE";
pub const ENV_TLS: &str = "TEMPO_TLS";
pub const ENV_API_KEY: &str = "TEMPO_API_KEY";

const DEFAULT_NAMESPACE: &str = "default";

/// Errors from resolving connection configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing control-plane address: set it explicitly or via {ENV_ADDRESS}")]
    MissingAddress,
    #[error("invalid {ENV_TLS} value: {0:?} (must be true or false)")]
    InvalidTls(String),
}

/// Resolved connection configuration for the control-plane client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Control-plane address, `host:port`.
    pub address: String,
    /// Namespace schedule operations are issued in.
    pub namespace: String,
    pub tls: bool,
    /// Bearer-token credential. Forces TLS on when present.
    pub api_key: Option<String>,
}

/// Partially-specified connection options, before environment fallback.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub address: Option<String>,
    pub namespace: Option<String>,
    pub tls: Option<bool>,
    pub api_key: Option<String>,
}

impl ConnectOptions {
    /// Resolve against the process environment.
    pub fn resolve(self) -> Result<ConnectConfig, ConfigError> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup (tests inject one).
    pub fn resolve_with(
        self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ConnectConfig, ConfigError> {
        let address = self
            .address
            .or_else(|| env(ENV_ADDRESS).filter(|v| !v.is_empty()))
            .ok_or(ConfigError::MissingAddress)?;
        if address.is_empty() {
            return Err(ConfigError::MissingAddress);
        }

        let namespace = self
            .namespace
            .or_else(|| env(ENV_NAMESPACE).filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        // Set-but-empty environment values count as unset.
        let mut tls = match self.tls {
            Some(tls) => tls,
            None => match env(ENV_TLS).filter(|v| !v.is_empty()) {
                Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidTls(raw))?,
                None => false,
            },
        };

        let api_key = self
            .api_key
            .or_else(|| env(ENV_API_KEY).filter(|v| !v.is_empty()));

        // An API key always travels over TLS.
        if api_key.is_some() {
            tls = true;
        }

        Ok(ConnectConfig {
            address,
            namespace,
            tls,
            api_key,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
