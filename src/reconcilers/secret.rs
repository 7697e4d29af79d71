// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret reconciler - watches the managed namespace and re-syncs the mirror
//! whenever the canonical secret or the mirror itself changes.

use crate::config::Config;
use crate::constants::{mirror_secret_name, source_secret_name};
use crate::error::{EncmirrorError, Result};
use crate::sync::{sync_mirror_secret, KubeEventSink, KubeSecretStore};
use futures::StreamExt;
use k8s_openapi::api::core::v1::Secret;
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

pub struct SecretReconciler {
    client: Client,
    config: Config,
}

impl SecretReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let secrets: Api<Secret> =
            Api::namespaced(self.client.clone(), &self.config.managed_namespace);
        let context = Arc::new(self);

        Controller::new(secrets, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled secret: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(secret: Arc<Secret>, ctx: Arc<SecretReconciler>) -> Result<Action> {
    let name = secret.name_any();

    // Only the canonical secret and its mirror are interesting; the managed
    // namespace holds plenty of other secrets
    if name != source_secret_name() && name != mirror_secret_name() {
        return Ok(Action::await_change());
    }

    debug!(
        "Reconciling secret: {}/{}",
        ctx.config.managed_namespace, name
    );

    // State is re-derived from a fresh read of both secrets, so duplicate or
    // racing triggers converge on the same result
    let store = KubeSecretStore::new(ctx.client.clone(), &ctx.config.managed_namespace);
    let sink = KubeEventSink::new(ctx.client.clone(), &ctx.config.managed_namespace);
    sync_mirror_secret(&store, &sink).await?;

    Ok(Action::await_change())
}

fn error_policy(_secret: Arc<Secret>, error: &EncmirrorError, ctx: Arc<SecretReconciler>) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(Duration::from_secs(ctx.config.error_requeue_secs))
}
