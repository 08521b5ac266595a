// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Namespace reconciliation lifecycle, end to end against a fake backend.

use tempo_adapters::FakeNamespaceClient;
use tempo_core::NamespaceSpec;
use tempo_engine::{NamespaceReconciler, ReadOutcome, Warning};

#[tokio::test]
async fn full_lifecycle_create_read_update_delete() {
    let client = FakeNamespaceClient::new();
    let reconciler = NamespaceReconciler::new(client);

    // Create
    let mut desired = NamespaceSpec::named("acct");
    desired.description = "accounting workflows".to_string();
    desired.retention = "30d".to_string();
    desired
        .data
        .insert("team".to_string(), "billing".to_string());

    let (created, warnings) = reconciler.create(&desired).await.unwrap();
    assert!(warnings.is_empty());
    assert_eq!(created.retention, "30d");
    assert_eq!(created.data.get("team").map(String::as_str), Some("billing"));

    // Read by the server-assigned id
    let read = reconciler.read(&created.id).await.unwrap();
    assert_eq!(read, ReadOutcome::Found(created.clone()));

    // Update: full-object replace
    desired.description = "accounting and audit workflows".to_string();
    let (updated, _) = reconciler.update(&desired).await.unwrap();
    assert_eq!(updated.description, "accounting and audit workflows");
    assert_eq!(updated.id, created.id);

    // Delete by id, then the namespace is gone
    reconciler.delete(&created.id).await.unwrap();
    let after = reconciler.read(&created.id).await.unwrap();
    assert!(after.is_absent());
}

#[tokio::test]
async fn archival_refusal_is_a_warning_not_a_failure() {
    let client = FakeNamespaceClient::new();
    let reconciler = NamespaceReconciler::new(client);

    let mut desired = NamespaceSpec::named("acct");
    desired.retention = "365d".to_string();
    desired.history_archival_state = "enabled".to_string();

    let (state, warnings) = reconciler.create(&desired).await.unwrap();

    // The namespace exists and is returned; the refusal is reported alongside
    assert_eq!(state.name, "acct");
    assert_eq!(state.history_archival_state, "disabled");
    assert_eq!(
        warnings,
        vec![Warning::HistoryArchivalNotEnabled {
            namespace: "acct".to_string()
        }]
    );
}

#[tokio::test]
async fn import_then_update_preserves_server_id() {
    let client = FakeNamespaceClient::new();
    let reconciler = NamespaceReconciler::new(client);

    let (created, _) = reconciler
        .create(&NamespaceSpec::named("adopted"))
        .await
        .unwrap();

    // A fresh orchestrator adopts the namespace by id
    let imported = reconciler
        .import_existing(&created.id)
        .await
        .unwrap()
        .found()
        .unwrap();
    assert_eq!(imported.name, "adopted");

    let mut desired = NamespaceSpec::named("adopted");
    desired.owner_email = "ops@example.com".to_string();
    let (updated, _) = reconciler.update(&desired).await.unwrap();
    assert_eq!(updated.id, imported.id);
}

#[tokio::test]
async fn round_trip_canonicalizes_duration_literals() {
    let client = FakeNamespaceClient::new();
    let reconciler = NamespaceReconciler::new(client);

    let mut desired = NamespaceSpec::named("acct");
    desired.retention = "24h".to_string();

    let (state, _) = reconciler.create(&desired).await.unwrap();

    // 24h and 1d are the same duration; observed state uses the canonical form
    assert_eq!(state.retention, "1d");
}
