// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced client wrappers for consistent observability

use crate::error::ClientError;
use crate::namespace::{
    NamespaceClient, NamespaceDescription, NamespaceKey, RegisterNamespaceRequest,
    UpdateNamespaceRequest,
};
use crate::schedule::{
    CreateScheduleRequest, ScheduleClient, ScheduleDescription, ScheduleMutator,
};
use async_trait::async_trait;

/// Wrapper that adds tracing to any NamespaceClient
#[derive(Clone)]
pub struct TracedNamespaceClient<C> {
    inner: C,
}

impl<C> TracedNamespaceClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: NamespaceClient> NamespaceClient for TracedNamespaceClient<C> {
    async fn register(&self, request: RegisterNamespaceRequest) -> Result<(), ClientError> {
        let span = tracing::info_span!("namespace.register", name = %request.namespace);
        let _guard = span.enter();

        tracing::info!(is_global = request.is_global, "registering");

        let start = std::time::Instant::now();
        let result = self.inner.register(request).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "registered"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "register failed"
            ),
        }

        result
    }

    async fn describe(&self, key: &NamespaceKey) -> Result<NamespaceDescription, ClientError> {
        let result = self.inner.describe(key).await;
        match &result {
            Ok(description) => {
                tracing::debug!(key = %key, id = %description.id, "described namespace");
            }
            Err(e) => tracing::debug!(key = %key, error = %e, "describe failed"),
        }
        result
    }

    async fn update(
        &self,
        request: UpdateNamespaceRequest,
    ) -> Result<NamespaceDescription, ClientError> {
        let span = tracing::info_span!("namespace.update", name = %request.namespace);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.update(request).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "updated"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "update failed"
            ),
        }

        result
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let span = tracing::info_span!("namespace.delete", id);
        let _guard = span.enter();

        let result = self.inner.delete(id).await;
        match &result {
            Ok(()) => tracing::info!("deleted"),
            Err(e) => tracing::warn!(error = %e, "delete failed"),
        }

        result
    }
}

/// Wrapper that adds tracing to any ScheduleClient
#[derive(Clone)]
pub struct TracedScheduleClient<C> {
    inner: C,
}

impl<C> TracedScheduleClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: ScheduleClient> ScheduleClient for TracedScheduleClient<C> {
    async fn create(&self, request: CreateScheduleRequest) -> Result<(), ClientError> {
        let span = tracing::info_span!("schedule.create", schedule_id = %request.schedule_id);
        let _guard = span.enter();

        tracing::info!(
            workflow_type = %request.action.workflow_type,
            intervals = request.intervals.len(),
            "creating"
        );

        let start = std::time::Instant::now();
        let result = self.inner.create(request).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "created"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "create failed"
            ),
        }

        result
    }

    async fn describe(&self, schedule_id: &str) -> Result<ScheduleDescription, ClientError> {
        let result = self.inner.describe(schedule_id).await;
        match &result {
            Ok(_) => tracing::debug!(schedule_id, "described schedule"),
            Err(e) => tracing::debug!(schedule_id, error = %e, "describe failed"),
        }
        result
    }

    async fn update(&self, schedule_id: &str, mutate: ScheduleMutator) -> Result<(), ClientError> {
        let span = tracing::info_span!("schedule.update", schedule_id);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.update(schedule_id, mutate).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "updated"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "update failed"
            ),
        }

        result
    }

    async fn delete(&self, schedule_id: &str) -> Result<(), ClientError> {
        let span = tracing::info_span!("schedule.delete", schedule_id);
        let _guard = span.enter();

        let result = self.inner.delete(schedule_id).await;
        match &result {
            Ok(()) => tracing::info!("deleted"),
            Err(e) => tracing::warn!(error = %e, "delete failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
