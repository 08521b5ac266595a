// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule reconciliation: translator and reconciler
//!
//! Schedules are keyed by name for every operation. Updates go through the
//! control plane's read-modify-write contract: a pure mutator is handed the
//! current description and returns the complete next one.

use crate::error::{Operation, ReadOutcome, ReconcileError, Warning};
use tempo_adapters::{
    CreateScheduleRequest, IntervalWire, OverlapPolicyWire, ScheduleClient, ScheduleDescription,
    ScheduleMutator, ScheduleWorkflowAction,
};
use tempo_core::{
    format_duration, normalize_intervals, parse_duration, IntervalSpec, OverlapPolicy,
    ScheduleActionState, ScheduleSpec, ScheduleState, SpecError,
};

const KIND: &str = "schedule";

fn overlap_wire(word: &str) -> OverlapPolicyWire {
    // Lenient: unrecognized words encode as Unspecified. The archival-state
    // table on the namespace side rejects instead; see DESIGN.md.
    match OverlapPolicy::from_word(word) {
        OverlapPolicy::Unspecified => OverlapPolicyWire::Unspecified,
        OverlapPolicy::Skip => OverlapPolicyWire::Skip,
        OverlapPolicy::BufferOne => OverlapPolicyWire::BufferOne,
        OverlapPolicy::BufferAll => OverlapPolicyWire::BufferAll,
        OverlapPolicy::CancelOther => OverlapPolicyWire::CancelOther,
        OverlapPolicy::TerminateOther => OverlapPolicyWire::TerminateOther,
        OverlapPolicy::AllowAll => OverlapPolicyWire::AllowAll,
    }
}

fn overlap_word(wire: OverlapPolicyWire) -> &'static str {
    let policy = match wire {
        OverlapPolicyWire::Unspecified => OverlapPolicy::Unspecified,
        OverlapPolicyWire::Skip => OverlapPolicy::Skip,
        OverlapPolicyWire::BufferOne => OverlapPolicy::BufferOne,
        OverlapPolicyWire::BufferAll => OverlapPolicy::BufferAll,
        OverlapPolicyWire::CancelOther => OverlapPolicy::CancelOther,
        OverlapPolicyWire::TerminateOther => OverlapPolicy::TerminateOther,
        OverlapPolicyWire::AllowAll => OverlapPolicy::AllowAll,
    };
    policy.as_word()
}

/// Parse the optional JSON input payload into the action's argument list.
///
/// The payload must be a JSON object (a single structured argument, not an
/// array of them). Malformed payloads fail before any remote call.
fn parse_payload(payload: Option<&str>) -> Result<Vec<serde_json::Value>, SpecError> {
    match payload {
        None => Ok(Vec::new()),
        Some(raw) => {
            let object: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(raw).map_err(|e| SpecError::InvalidPayload(e.to_string()))?;
            Ok(vec![serde_json::Value::Object(object)])
        }
    }
}

/// Normalize the interval set, then convert to wire durations.
fn encode_intervals(intervals: &[IntervalSpec]) -> Result<Vec<IntervalWire>, SpecError> {
    normalize_intervals(intervals.to_vec())?
        .into_iter()
        .map(|interval| {
            Ok(IntervalWire {
                every: parse_duration(&interval.every)?,
                offset: parse_duration(&interval.offset)?,
            })
        })
        .collect()
}

/// Encode a desired spec as a schedule creation request.
pub fn encode_create(spec: &ScheduleSpec) -> Result<CreateScheduleRequest, SpecError> {
    Ok(CreateScheduleRequest {
        schedule_id: spec.name.clone(),
        intervals: encode_intervals(&spec.intervals)?,
        action: ScheduleWorkflowAction {
            workflow_type: spec.action.workflow_type.clone(),
            task_queue: spec.action.task_queue.clone(),
            workflow_id: spec.action.workflow_id.clone(),
            args: parse_payload(spec.action.input_payload.as_deref())?,
        },
        overlap_policy: overlap_wire(&spec.overlap_policy),
        catchup_window: parse_duration(&spec.catchup_window)?,
        pause_on_failure: spec.pause_on_failure,
        paused: spec.paused,
    })
}

/// Build the pure full-object mutator that applies a desired spec under
/// the read-modify-write update contract.
///
/// Everything fallible is resolved up front, so the returned closure is
/// total. The action is left as the server holds it: action changes are
/// replace-on-change at the caller level, not update material.
pub fn desired_mutation(spec: &ScheduleSpec) -> Result<ScheduleMutator, SpecError> {
    let intervals = encode_intervals(&spec.intervals)?;
    let overlap_policy = overlap_wire(&spec.overlap_policy);
    let catchup_window = parse_duration(&spec.catchup_window)?;
    let paused = spec.paused;
    let pause_on_failure = spec.pause_on_failure;

    Ok(Box::new(move |mut current: ScheduleDescription| {
        current.paused = paused;
        current.pause_on_failure = pause_on_failure;
        current.overlap_policy = overlap_policy;
        current.catchup_window = catchup_window;
        current.intervals = intervals;
        current
    }))
}

/// Decode a described schedule into observed state.
///
/// Intervals come out normalized, duration literals canonical, the overlap
/// policy as its word form (`"unspecified"` for wire values outside the
/// table). Only the first payload element is read back: schedule actions
/// are modeled as single-argument workflows.
pub fn decode(name: &str, description: &ScheduleDescription) -> Result<ScheduleState, SpecError> {
    let intervals = normalize_intervals(
        description
            .intervals
            .iter()
            .map(|interval| IntervalSpec {
                every: format_duration(interval.every),
                offset: format_duration(interval.offset),
            })
            .collect(),
    )?;

    let input_payload = description
        .action
        .payloads
        .first()
        .map(|raw| {
            String::from_utf8(raw.clone())
                .map_err(|e| SpecError::InvalidPayload(e.to_string()))
        })
        .transpose()?;

    Ok(ScheduleState {
        name: name.to_string(),
        paused: description.paused,
        pause_on_failure: description.pause_on_failure,
        action: ScheduleActionState {
            workflow_type: description.action.workflow_type.clone(),
            task_queue: description.action.task_queue.clone(),
            workflow_id: description.action.workflow_id.clone(),
            input_payload,
        },
        overlap_policy: overlap_word(description.overlap_policy).to_string(),
        catchup_window: format_duration(description.catchup_window),
        intervals,
    })
}

/// Reconciles one schedule against the control plane.
#[derive(Clone)]
pub struct ScheduleReconciler<C: ScheduleClient> {
    client: C,
}

impl<C: ScheduleClient> ScheduleReconciler<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Create the schedule, then read it back for the computed values.
    ///
    /// If the caller pinned an explicit workflow id, that literal wins over
    /// whatever the read-back reports; a server that normalizes the stored
    /// value must not cause representation drift. Without a pinned id, the
    /// server-generated one becomes part of observed state.
    ///
    /// The warning list is part of the shared operation contract; schedules
    /// have no archival concept, so it is always empty here.
    pub async fn create(
        &self,
        desired: &ScheduleSpec,
    ) -> Result<(ScheduleState, Vec<Warning>), ReconcileError> {
        let request = encode_create(desired)?;

        self.client
            .create(request)
            .await
            .map_err(|e| ReconcileError::remote(KIND, &desired.name, Operation::Create, e))?;

        let described = self
            .client
            .describe(&desired.name)
            .await
            .map_err(|e| ReconcileError::remote(KIND, &desired.name, Operation::Create, e))?;

        let mut state = decode(&desired.name, &described)?;
        if let Some(explicit) = &desired.action.workflow_id {
            state.action.workflow_id = explicit.clone();
        }

        Ok((state, Vec::new()))
    }

    /// Read by name. A not-found response is the `Absent` outcome, not an
    /// error.
    pub async fn read(&self, name: &str) -> Result<ReadOutcome<ScheduleState>, ReconcileError> {
        self.describe_outcome(name, Operation::Read).await
    }

    /// Apply the desired spec through the read-modify-write contract, then
    /// re-describe for the authoritative state.
    pub async fn update(
        &self,
        desired: &ScheduleSpec,
    ) -> Result<(ScheduleState, Vec<Warning>), ReconcileError> {
        let mutator = desired_mutation(desired)?;

        self.client
            .update(&desired.name, mutator)
            .await
            .map_err(|e| ReconcileError::remote(KIND, &desired.name, Operation::Update, e))?;

        let described = self
            .client
            .describe(&desired.name)
            .await
            .map_err(|e| ReconcileError::remote(KIND, &desired.name, Operation::Update, e))?;

        Ok((decode(&desired.name, &described)?, Vec::new()))
    }

    /// Delete by name.
    ///
    /// Not idempotent: deleting an already-absent schedule surfaces the
    /// remote error. Callers skip delete when their own record is gone.
    pub async fn delete(&self, name: &str) -> Result<(), ReconcileError> {
        self.client
            .delete(name)
            .await
            .map_err(|e| ReconcileError::remote(KIND, name, Operation::Delete, e))
    }

    /// Adopt an existing remote schedule without a prior create.
    pub async fn import_existing(
        &self,
        name: &str,
    ) -> Result<ReadOutcome<ScheduleState>, ReconcileError> {
        self.describe_outcome(name, Operation::Import).await
    }

    async fn describe_outcome(
        &self,
        name: &str,
        operation: Operation,
    ) -> Result<ReadOutcome<ScheduleState>, ReconcileError> {
        match self.client.describe(name).await {
            Ok(described) => Ok(ReadOutcome::Found(decode(name, &described)?)),
            Err(e) if e.is_not_found() => {
                tracing::debug!(name, "schedule absent");
                Ok(ReadOutcome::Absent)
            }
            Err(e) => Err(ReconcileError::remote(KIND, name, operation, e)),
        }
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
