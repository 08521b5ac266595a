// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule reconciliation lifecycle, end to end against a fake backend.

use tempo_adapters::FakeScheduleClient;
use tempo_core::{IntervalSpec, ScheduleAction, ScheduleSpec};
use tempo_engine::ScheduleReconciler;

fn example_spec(name: &str) -> ScheduleSpec {
    let mut spec = ScheduleSpec::named(
        name,
        ScheduleAction {
            workflow_type: "exampleWorkflow".to_string(),
            task_queue: "example-task-queue".to_string(),
            workflow_id: None,
            input_payload: Some(r#"{"myVar":"abc"}"#.to_string()),
        },
    );
    spec.catchup_window = "3h".to_string();
    spec.intervals = vec![IntervalSpec::new("1d", "1h")];
    spec
}

#[tokio::test]
async fn full_lifecycle_create_read_update_delete() {
    let client = FakeScheduleClient::new();
    let reconciler = ScheduleReconciler::new(client);

    let (created, warnings) = reconciler.create(&example_spec("nightly")).await.unwrap();
    assert!(warnings.is_empty());
    assert_eq!(created.catchup_window, "3h");
    assert_eq!(created.action.input_payload.as_deref(), Some(r#"{"myVar":"abc"}"#));
    assert!(!created.action.workflow_id.is_empty());

    let read = reconciler.read("nightly").await.unwrap().found().unwrap();
    assert_eq!(read, created);

    let mut desired = example_spec("nightly");
    desired.paused = true;
    desired.intervals = vec![IntervalSpec::new("4h", "")];
    let (updated, _) = reconciler.update(&desired).await.unwrap();
    assert!(updated.paused);
    assert_eq!(updated.intervals, vec![IntervalSpec::new("4h", "0s")]);
    // Action untouched by update
    assert_eq!(updated.action.workflow_id, created.action.workflow_id);

    reconciler.delete("nightly").await.unwrap();
    assert!(reconciler.read("nightly").await.unwrap().is_absent());
}

#[tokio::test]
async fn interval_permutations_observe_identically() {
    let client = FakeScheduleClient::new();
    let reconciler = ScheduleReconciler::new(client.clone());

    let mut forward = example_spec("forward");
    forward.intervals = vec![
        IntervalSpec::new("1h", "19m"),
        IntervalSpec::new("30s", ""),
        IntervalSpec::new("1d", "0s"),
    ];
    let mut reversed = example_spec("reversed");
    reversed.intervals = vec![
        IntervalSpec::new("1d", "0s"),
        IntervalSpec::new("30s", ""),
        IntervalSpec::new("1h", "19m"),
    ];

    let (a, _) = reconciler.create(&forward).await.unwrap();
    let (b, _) = reconciler.create(&reversed).await.unwrap();

    assert_eq!(a.intervals, b.intervals);
}

#[tokio::test]
async fn pinned_workflow_id_survives_backend_rewriting() {
    let client = FakeScheduleClient::new();
    client.set_rewrites_workflow_ids(true);
    let reconciler = ScheduleReconciler::new(client);

    let mut desired = example_spec("pinned");
    desired.action.workflow_id = Some("wf-1".to_string());

    let (created, _) = reconciler.create(&desired).await.unwrap();
    assert_eq!(created.action.workflow_id, "wf-1");
}

#[tokio::test]
async fn import_adopts_unmanaged_schedule() {
    let client = FakeScheduleClient::new();
    let reconciler = ScheduleReconciler::new(client);

    reconciler.create(&example_spec("existing")).await.unwrap();

    let imported = reconciler
        .import_existing("existing")
        .await
        .unwrap()
        .found()
        .unwrap();
    assert_eq!(imported.name, "existing");

    assert!(reconciler
        .import_existing("never-created")
        .await
        .unwrap()
        .is_absent());
}

#[tokio::test]
async fn zero_offset_reads_back_as_zero_seconds() {
    let client = FakeScheduleClient::new();
    let reconciler = ScheduleReconciler::new(client);

    let mut desired = example_spec("zero-offset");
    desired.intervals = vec![IntervalSpec::new("5m", "")];

    let (state, _) = reconciler.create(&desired).await.unwrap();
    // "" before encode vs "0s" after decode is canonicalization, not drift
    assert_eq!(state.intervals, vec![IntervalSpec::new("5m", "0s")]);
}
