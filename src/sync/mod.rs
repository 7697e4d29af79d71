// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mirror secret decision logic and resource-store access.

pub mod mirror;
pub mod store;

pub use mirror::{decide, sync_mirror_secret, SyncAction};
pub use store::{EventSink, KubeEventSink, KubeSecretStore, SecretStore};
