// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake schedule client for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{
    CreateScheduleRequest, DescribedAction, ScheduleClient, ScheduleDescription, ScheduleMutator,
};
use crate::error::ClientError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded schedule call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleCall {
    Create { schedule_id: String },
    Describe { schedule_id: String },
    Update { schedule_id: String },
    Delete { schedule_id: String },
}

#[derive(Default)]
struct FakeScheduleState {
    schedules: HashMap<String, ScheduleDescription>,
    calls: Vec<ScheduleCall>,
    next_workflow_seq: u32,
    // Configurable behavior: store explicit workflow ids in a normalized
    // form, the way a server that rewrites them would
    rewrites_workflow_ids: bool,
}

/// In-memory schedule client with call recording for testing.
///
/// Generates a workflow id for actions that do not pin one, the way the
/// control plane does.
#[derive(Clone, Default)]
pub struct FakeScheduleClient {
    state: Arc<Mutex<FakeScheduleState>>,
}

impl FakeScheduleClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ScheduleCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Make describe echo explicit workflow ids in rewritten form.
    pub fn set_rewrites_workflow_ids(&self, on: bool) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .rewrites_workflow_ids = on;
    }

    /// Get a stored schedule by id
    pub fn get(&self, schedule_id: &str) -> Option<ScheduleDescription> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .schedules
            .get(schedule_id)
            .cloned()
    }
}

#[async_trait]
impl ScheduleClient for FakeScheduleClient {
    async fn create(&self, request: CreateScheduleRequest) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(ScheduleCall::Create {
            schedule_id: request.schedule_id.clone(),
        });

        if state.schedules.contains_key(&request.schedule_id) {
            return Err(ClientError::AlreadyExists {
                kind: "schedule",
                key: request.schedule_id,
            });
        }

        let workflow_id = match request.action.workflow_id {
            Some(explicit) if state.rewrites_workflow_ids => {
                format!("{}-started", explicit)
            }
            Some(explicit) => explicit,
            None => {
                state.next_workflow_seq += 1;
                format!(
                    "{}-workflow-{}",
                    request.schedule_id, state.next_workflow_seq
                )
            }
        };

        let payloads = request
            .action
            .args
            .iter()
            .map(|arg| serde_json::to_vec(arg).map_err(|e| ClientError::Call(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        let description = ScheduleDescription {
            intervals: request.intervals,
            action: DescribedAction {
                workflow_id,
                workflow_type: request.action.workflow_type,
                task_queue: request.action.task_queue,
                payloads,
            },
            overlap_policy: request.overlap_policy,
            catchup_window: request.catchup_window,
            pause_on_failure: request.pause_on_failure,
            paused: request.paused,
        };
        state.schedules.insert(request.schedule_id, description);

        Ok(())
    }

    async fn describe(&self, schedule_id: &str) -> Result<ScheduleDescription, ClientError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(ScheduleCall::Describe {
            schedule_id: schedule_id.to_string(),
        });

        state
            .schedules
            .get(schedule_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                kind: "schedule",
                key: schedule_id.to_string(),
            })
    }

    async fn update(&self, schedule_id: &str, mutate: ScheduleMutator) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(ScheduleCall::Update {
            schedule_id: schedule_id.to_string(),
        });

        let current =
            state
                .schedules
                .get(schedule_id)
                .cloned()
                .ok_or_else(|| ClientError::NotFound {
                    kind: "schedule",
                    key: schedule_id.to_string(),
                })?;

        let next = mutate(current);
        state.schedules.insert(schedule_id.to_string(), next);

        Ok(())
    }

    async fn delete(&self, schedule_id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(ScheduleCall::Delete {
            schedule_id: schedule_id.to_string(),
        });

        if state.schedules.remove(schedule_id).is_none() {
            return Err(ClientError::NotFound {
                kind: "schedule",
                key: schedule_id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
