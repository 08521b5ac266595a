// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule client handle and wire types

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeScheduleClient, ScheduleCall};

use crate::error::ClientError;
use async_trait::async_trait;
use std::time::Duration;

/// Overlap policy as the control plane encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapPolicyWire {
    Unspecified,
    Skip,
    BufferOne,
    BufferAll,
    CancelOther,
    TerminateOther,
    AllowAll,
}

/// One interval in wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalWire {
    pub every: Duration,
    pub offset: Duration,
}

/// The workflow a schedule starts, as submitted on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleWorkflowAction {
    pub workflow_type: String,
    pub task_queue: String,
    /// When `None`, the server generates an execution id.
    pub workflow_id: Option<String>,
    /// Workflow arguments; at most one structured argument is submitted.
    pub args: Vec<serde_json::Value>,
}

/// Request to create a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScheduleRequest {
    pub schedule_id: String,
    pub intervals: Vec<IntervalWire>,
    pub action: ScheduleWorkflowAction,
    pub overlap_policy: OverlapPolicyWire,
    pub catchup_window: Duration,
    pub pause_on_failure: bool,
    pub paused: bool,
}

/// The action a described schedule holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedAction {
    /// Always present: server-generated when the caller did not pin one.
    pub workflow_id: String,
    pub workflow_type: String,
    pub task_queue: String,
    /// Serialized argument payloads, raw bytes per element.
    pub payloads: Vec<Vec<u8>>,
}

/// Schedule object as the control plane reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDescription {
    pub intervals: Vec<IntervalWire>,
    pub action: DescribedAction,
    pub overlap_policy: OverlapPolicyWire,
    pub catchup_window: Duration,
    pub pause_on_failure: bool,
    pub paused: bool,
}

/// Pure full-object mutation applied under a schedule update.
///
/// The control plane only accepts whole-object replacement: the mutator is
/// handed the current description and must return the complete next one,
/// never a partial patch.
pub type ScheduleMutator = Box<dyn FnOnce(ScheduleDescription) -> ScheduleDescription + Send>;

/// Client handle for schedule operations on the control plane.
///
/// The handle is bound to one namespace at connection time; schedule ids
/// are unique within it.
#[async_trait]
pub trait ScheduleClient: Clone + Send + Sync + 'static {
    /// Create a schedule. The response carries no authoritative state;
    /// callers describe afterwards.
    async fn create(&self, request: CreateScheduleRequest) -> Result<(), ClientError>;

    /// Describe a schedule by id.
    async fn describe(&self, schedule_id: &str) -> Result<ScheduleDescription, ClientError>;

    /// Read-modify-write update: fetch the current description, apply the
    /// mutator, store the result wholesale.
    async fn update(&self, schedule_id: &str, mutate: ScheduleMutator) -> Result<(), ClientError>;

    /// Delete a schedule by id.
    async fn delete(&self, schedule_id: &str) -> Result<(), ClientError>;
}
