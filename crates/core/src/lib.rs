// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tempo-core: Domain layer for the tempo reconciliation engine
//!
//! This crate provides:
//! - The duration codec for short literals (`"30s"`, `"3h"`, `"365d"`)
//! - The interval normalizer for schedule interval sets
//! - Desired/observed state records for namespaces and schedules
//! - Enum word tables (archival state, overlap policy)
//! - Connection configuration resolution
//!
//! Everything here is pure: no I/O, no remote calls.

pub mod config;
pub mod duration;
pub mod error;
pub mod interval;
pub mod namespace;
pub mod schedule;

// Re-exports
pub use config::{ConfigError, ConnectConfig, ConnectOptions};
pub use duration::{format_duration, parse_duration};
pub use error::SpecError;
pub use interval::{normalize_intervals, IntervalSpec};
pub use namespace::{ArchivalState, NamespaceSpec, NamespaceState};
pub use schedule::{
    OverlapPolicy, ScheduleAction, ScheduleActionState, ScheduleSpec, ScheduleState,
};
