// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Control-plane client handles for the tempo reconcilers
//!
//! The reconcilers never dial anything themselves: they are handed a
//! connected client as an injected capability, and several reconcilers may
//! share one handle. This crate defines the wire-level request/response
//! types, the `NamespaceClient` / `ScheduleClient` traits, in-memory fakes
//! for testing, and tracing wrappers.

pub mod error;
pub mod namespace;
pub mod schedule;
pub mod traced;

pub use error::ClientError;
pub use namespace::{
    ArchivalStateWire, NamespaceClient, NamespaceDescription, NamespaceKey,
    RegisterNamespaceRequest, UpdateNamespaceRequest,
};
pub use schedule::{
    CreateScheduleRequest, DescribedAction, IntervalWire, OverlapPolicyWire, ScheduleClient,
    ScheduleDescription, ScheduleMutator, ScheduleWorkflowAction,
};
pub use traced::{TracedNamespaceClient, TracedScheduleClient};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use namespace::{FakeNamespaceClient, NamespaceCall};
#[cfg(any(test, feature = "test-support"))]
pub use schedule::{FakeScheduleClient, ScheduleCall};
