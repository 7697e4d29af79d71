// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};

use encmirror::config::Config;
use encmirror::reconcilers::SecretReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting encmirror operator");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: managed_namespace={}",
        config.managed_namespace
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // Watch the managed namespace and keep the mirror secret in sync
    let reconciler = SecretReconciler::new(client, config);

    info!("Starting reconciler...");
    reconciler.run().await?;

    // This should never be reached as the reconciler runs forever
    warn!("Reconciler stopped unexpectedly");
    Ok(())
}
