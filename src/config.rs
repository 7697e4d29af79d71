// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::MANAGED_NAMESPACE;
use anyhow::Result;
use std::env;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace holding the canonical and mirror secrets
    pub managed_namespace: String,
    /// How long to wait before retrying a failed reconciliation
    pub error_requeue_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Overridable for dev clusters that relocate the managed config namespace
        let managed_namespace =
            env::var("MANAGED_CONFIG_NAMESPACE").unwrap_or(MANAGED_NAMESPACE.to_string());
        let error_requeue_secs: u64 = env::var("ERROR_REQUEUE_SECS")
            .unwrap_or("60".to_string())
            .parse()
            .unwrap_or(60);

        Ok(Config {
            managed_namespace,
            error_requeue_secs,
        })
    }
}
