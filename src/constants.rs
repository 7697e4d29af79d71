// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace holding both the canonical and the mirrored encryption-config
/// secrets. Shared with the upstream encryption controllers.
pub const MANAGED_NAMESPACE: &str = "openshift-config-managed";

/// Base name of the encryption configuration secrets; full names are derived
/// by suffixing the consuming API server.
pub const ENCRYPTION_CONFIG_SECRET_NAME: &str = "encryption-config";

/// Data key under which the serialized encryption configuration lives.
pub const ENCRYPTION_CONFIG_KEY: &str = "encryption-config";

/// Finalizer placed on every secret this operator creates, so it gets a
/// chance to react before deletion.
pub const ENCRYPTION_SECRET_FINALIZER: &str =
    "encryption.apiserver.operator.openshift.io/deletion-protection";

/// Kubernetes annotation keys used by encmirror
pub mod annotations {
    /// Marks a secret as created and owned by this operator. A mirror
    /// without this annotation belongs to someone else and is never touched.
    pub const MANAGED_BY: &str = "encryption.apiserver.operator.openshift.io/managed-by";
    /// Sentinel value for [`MANAGED_BY`], shared with other components that
    /// read the annotation.
    pub const MANAGED_BY_VALUE: &str = "oauth-apiserver";
    /// Informational description, copied verbatim from source to mirror.
    pub const DESCRIPTION: &str = "openshift.io/description";
}

/// Event reasons emitted on successful writes
pub mod events {
    pub const SECRET_CREATED: &str = "SecretCreated";
    pub const SECRET_UPDATED: &str = "SecretUpdated";
}

/// The operator name used as the event reporting controller
pub const OPERATOR_NAME: &str = "encmirror";

/// Name of the canonical secret produced by the upstream encryption
/// controller for the openshift-apiserver.
pub fn source_secret_name() -> String {
    format!("{}-openshift-apiserver", ENCRYPTION_CONFIG_SECRET_NAME)
}

/// Name of the mirror secret maintained for the oauth-apiserver.
pub fn mirror_secret_name() -> String {
    format!("{}-oauth-apiserver", ENCRYPTION_CONFIG_SECRET_NAME)
}
