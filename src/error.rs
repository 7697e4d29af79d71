// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncmirrorError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),
}

pub type Result<T> = std::result::Result<T, EncmirrorError>;
