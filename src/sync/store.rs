// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource-store and event-sink seams over the Kubernetes API.

use crate::constants::{mirror_secret_name, OPERATOR_NAME};
use crate::error::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ObjectReference, Secret};
use kube::{
    api::PostParams,
    runtime::events::{Event, EventType, Recorder, Reporter},
    Api, Client, ResourceExt,
};
use tracing::warn;

/// Read and write access to the secrets of a single namespace.
///
/// Lookups report a missing secret as `Ok(None)` rather than an error; any
/// other store failure propagates untouched so the caller's retry policy
/// sees the original error.
#[async_trait]
pub trait SecretStore {
    async fn get(&self, name: &str) -> Result<Option<Secret>>;
    async fn create(&self, secret: &Secret) -> Result<()>;
    async fn update(&self, secret: &Secret) -> Result<()>;
}

/// Sink for domain events; only the reason is contractually significant.
#[async_trait]
pub trait EventSink {
    async fn emit(&self, reason: &str, message: &str);
}

/// Secret store backed by the Kubernetes API, scoped to one namespace.
pub struct KubeSecretStore {
    api: Api<Secret>,
}

impl KubeSecretStore {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
        }
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get(&self, name: &str) -> Result<Option<Secret>> {
        match self.api.get(name).await {
            Ok(secret) => Ok(Some(secret)),
            Err(kube::Error::Api(err)) if err.code == 404 => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn create(&self, secret: &Secret) -> Result<()> {
        self.api.create(&PostParams::default(), secret).await?;
        Ok(())
    }

    async fn update(&self, secret: &Secret) -> Result<()> {
        let name = secret.name_any();
        self.api.replace(&name, &PostParams::default(), secret).await?;
        Ok(())
    }
}

/// Event sink publishing Kubernetes Events attached to the mirror secret.
pub struct KubeEventSink {
    recorder: Recorder,
    reference: ObjectReference,
}

impl KubeEventSink {
    pub fn new(client: Client, namespace: &str) -> Self {
        let reporter = Reporter {
            controller: OPERATOR_NAME.to_string(),
            instance: None,
        };
        let reference = ObjectReference {
            api_version: Some("v1".to_string()),
            kind: Some("Secret".to_string()),
            name: Some(mirror_secret_name()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        };

        Self {
            recorder: Recorder::new(client, reporter),
            reference,
        }
    }
}

#[async_trait]
impl EventSink for KubeEventSink {
    async fn emit(&self, reason: &str, message: &str) {
        let event = Event {
            type_: EventType::Normal,
            reason: reason.to_string(),
            note: Some(message.to_string()),
            action: "Sync".to_string(),
            secondary: None,
        };

        // A lost event must not block convergence
        if let Err(e) = self.recorder.publish(&event, &self.reference).await {
            warn!("Failed to publish {} event: {}", reason, e);
        }
    }
}
