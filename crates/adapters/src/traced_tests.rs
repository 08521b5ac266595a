// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::namespace::{ArchivalStateWire, FakeNamespaceClient};
use crate::schedule::{FakeScheduleClient, OverlapPolicyWire, ScheduleWorkflowAction};
use std::collections::BTreeMap;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("trace")
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn traced_namespace_client_delegates() {
    init_tracing();
    let fake = FakeNamespaceClient::new();
    let client = TracedNamespaceClient::new(fake.clone());

    client
        .register(RegisterNamespaceRequest {
            namespace: "accounting".to_string(),
            description: String::new(),
            owner_email: String::new(),
            retention: Duration::from_secs(86_400),
            is_global: false,
            history_archival_state: ArchivalStateWire::Disabled,
            history_archival_uri: String::new(),
            visibility_archival_state: ArchivalStateWire::Disabled,
            visibility_archival_uri: String::new(),
            data: BTreeMap::new(),
        })
        .await
        .unwrap();

    let described = client
        .describe(&NamespaceKey::Name("accounting".to_string()))
        .await
        .unwrap();
    assert_eq!(described.name, "accounting");

    // Errors pass through untouched
    let err = client.delete("ns-404").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn traced_schedule_client_delegates() {
    init_tracing();
    let fake = FakeScheduleClient::new();
    let client = TracedScheduleClient::new(fake.clone());

    client
        .create(CreateScheduleRequest {
            schedule_id: "nightly".to_string(),
            intervals: Vec::new(),
            action: ScheduleWorkflowAction {
                workflow_type: "exampleWorkflow".to_string(),
                task_queue: "example-task-queue".to_string(),
                workflow_id: None,
                args: Vec::new(),
            },
            overlap_policy: OverlapPolicyWire::Skip,
            catchup_window: Duration::from_secs(3600),
            pause_on_failure: false,
            paused: false,
        })
        .await
        .unwrap();

    client
        .update(
            "nightly",
            Box::new(|mut current| {
                current.paused = true;
                current
            }),
        )
        .await
        .unwrap();

    let described = client.describe("nightly").await.unwrap();
    assert!(described.paused);

    client.delete("nightly").await.unwrap();
    let err = client.describe("nightly").await.unwrap_err();
    assert!(err.is_not_found());
}
