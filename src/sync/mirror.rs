// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The mirror decision algorithm and its effect executor.
//!
//! The canonical encryption-config secret is owned by an upstream controller;
//! this module keeps a mirror of it under the oauth-apiserver name. The
//! decision is a pure function of the two observed secrets, so every
//! invocation re-derives what to do from scratch and repeated runs converge.

use crate::constants::{
    annotations, events, mirror_secret_name, source_secret_name, ENCRYPTION_SECRET_FINALIZER,
};
use crate::error::Result;
use crate::sync::store::{EventSink, SecretStore};
use k8s_openapi::api::core::v1::Secret;
use kube::{api::ObjectMeta, ResourceExt};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// The single write (if any) one reconciliation will perform.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    NoOp,
    Create(Secret),
    Update(Secret),
}

/// Check if a secret carries this operator's managed-by marker.
///
/// A missing or unreadable annotations map counts as unmanaged, which routes
/// to the non-destructive branch of [`decide`].
pub fn is_managed(secret: &Secret) -> bool {
    secret
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(annotations::MANAGED_BY))
        .is_some_and(|v| v == annotations::MANAGED_BY_VALUE)
}

/// Build the mirror secret as it should look when freshly created.
///
/// Data is copied byte-for-byte from the source; of the source's annotations
/// only the description travels along. The finalizer keeps the mirror from
/// being deleted before the operator can react.
pub fn desired_mirror(source: &Secret) -> Secret {
    let mut mirror_annotations = BTreeMap::from([(
        annotations::MANAGED_BY.to_string(),
        annotations::MANAGED_BY_VALUE.to_string(),
    )]);
    if let Some(description) = source
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(annotations::DESCRIPTION))
    {
        mirror_annotations.insert(annotations::DESCRIPTION.to_string(), description.clone());
    }

    Secret {
        metadata: ObjectMeta {
            name: Some(mirror_secret_name()),
            namespace: source.metadata.namespace.clone(),
            annotations: Some(mirror_annotations),
            finalizers: Some(vec![ENCRYPTION_SECRET_FINALIZER.to_string()]),
            ..Default::default()
        },
        data: source.data.clone(),
        type_: source.type_.clone(),
        ..Default::default()
    }
}

/// Decide what to do for the observed canonical and mirror secrets.
///
/// Ordered rules, first match wins:
/// 1. no source: encryption is off, nothing to mirror
/// 2. no mirror: create it from the source
/// 3. mirror without the managed-by marker: foreign secret, never touch
/// 4. data already equal: in sync
/// 5. otherwise: update the mirror's data wholesale, everything else untouched
pub fn decide(source: Option<&Secret>, target: Option<&Secret>) -> SyncAction {
    let Some(source) = source else {
        return SyncAction::NoOp;
    };

    let Some(target) = target else {
        return SyncAction::Create(desired_mirror(source));
    };

    if !is_managed(target) {
        // Possibly created by an older component; ownership transfer is manual
        return SyncAction::NoOp;
    }

    if target.data == source.data {
        return SyncAction::NoOp;
    }

    let mut updated = target.clone();
    updated.data = source.data.clone();
    SyncAction::Update(updated)
}

/// Run one synchronous reconciliation: read both secrets, decide, perform at
/// most one write and emit at most one event. Store errors propagate to the
/// caller untouched; the next invocation recomputes the same action.
#[instrument(skip(store, sink))]
pub async fn sync_mirror_secret<S: SecretStore, E: EventSink>(store: &S, sink: &E) -> Result<()> {
    let source = store.get(&source_secret_name()).await?;
    let target = store.get(&mirror_secret_name()).await?;

    match decide(source.as_ref(), target.as_ref()) {
        SyncAction::NoOp => {
            debug!("Mirror secret in sync, nothing to do");
        }
        SyncAction::Create(secret) => {
            let namespace = secret.namespace().unwrap_or_default();
            let name = secret.name_any();
            store.create(&secret).await?;
            info!("Created mirror secret {}/{}", namespace, name);
            sink.emit(
                events::SECRET_CREATED,
                &format!("Created secret {}/{} because it was missing", namespace, name),
            )
            .await;
        }
        SyncAction::Update(secret) => {
            let namespace = secret.namespace().unwrap_or_default();
            let name = secret.name_any();
            store.update(&secret).await?;
            info!("Updated mirror secret {}/{}", namespace, name);
            sink.emit(
                events::SECRET_UPDATED,
                &format!(
                    "Updated secret {}/{} because the encryption configuration changed",
                    namespace, name
                ),
            )
            .await;
        }
    }

    Ok(())
}
