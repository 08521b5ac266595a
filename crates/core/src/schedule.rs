// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule state records and the overlap-policy word table

use crate::interval::IntervalSpec;
use serde::{Deserialize, Serialize};

/// What happens when a scheduled action would start while an older one is
/// still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlapPolicy {
    Unspecified,
    Skip,
    BufferOne,
    BufferAll,
    CancelOther,
    TerminateOther,
    AllowAll,
}

impl OverlapPolicy {
    /// Map a caller-entered word to a policy.
    ///
    /// Unrecognized words fall back to `Unspecified` rather than erroring.
    /// The archival-state table rejects instead; the asymmetry is inherited
    /// behavior, see DESIGN.md.
    pub fn from_word(word: &str) -> Self {
        match word {
            "skip" => Self::Skip,
            "buffer_one" => Self::BufferOne,
            "buffer_all" => Self::BufferAll,
            "cancel_other" => Self::CancelOther,
            "terminate_other" => Self::TerminateOther,
            "allow_all" => Self::AllowAll,
            _ => Self::Unspecified,
        }
    }

    pub fn as_word(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::BufferOne => "buffer_one",
            Self::BufferAll => "buffer_all",
            Self::CancelOther => "cancel_other",
            Self::TerminateOther => "terminate_other",
            Self::AllowAll => "allow_all",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Desired action a schedule triggers: start a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAction {
    /// Name of the workflow definition this schedule starts.
    pub workflow_type: String,
    /// Queue the workflow execution will be placed in.
    pub task_queue: String,
    /// Explicit workflow execution id. When `None`, the server generates one.
    pub workflow_id: Option<String>,
    /// JSON object passed as the single workflow argument.
    pub input_payload: Option<String>,
}

/// Desired configuration for a schedule.
///
/// `name` is the schedule's identity for every operation; it is never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    pub name: String,
    pub paused: bool,
    pub pause_on_failure: bool,
    pub action: ScheduleAction,
    /// Overlap policy word; unrecognized words encode as `unspecified`.
    pub overlap_policy: String,
    /// How far back missed actions are taken after an outage. E.g. `"10m"`, `"3h"`.
    pub catchup_window: String,
    /// Unordered interval set; normalized before encoding.
    pub intervals: Vec<IntervalSpec>,
}

impl ScheduleSpec {
    /// A spec with the stock defaults for the given name and action.
    pub fn named(name: impl Into<String>, action: ScheduleAction) -> Self {
        Self {
            name: name.into(),
            paused: false,
            pause_on_failure: false,
            action,
            overlap_policy: "skip".to_string(),
            catchup_window: "365d".to_string(),
            intervals: Vec::new(),
        }
    }
}

/// Observed action state: like [`ScheduleAction`] but the workflow id is
/// always present (server-generated when the caller did not pin one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleActionState {
    pub workflow_type: String,
    pub task_queue: String,
    pub workflow_id: String,
    pub input_payload: Option<String>,
}

/// Observed schedule state as reported by the control plane.
///
/// Intervals are normalized, duration literals canonical, the overlap
/// policy a word (`"unspecified"` for wire values we do not know).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleState {
    pub name: String,
    pub paused: bool,
    pub pause_on_failure: bool,
    pub action: ScheduleActionState,
    pub overlap_policy: String,
    pub catchup_window: String,
    pub intervals: Vec<IntervalSpec>,
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
