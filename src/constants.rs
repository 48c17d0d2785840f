// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at startup
pub mod env {
    /// Name of the pod the controller runs in (downward API)
    pub const POD_NAME: &str = "POD_NAME";
    /// Namespace of the pod the controller runs in (downward API)
    pub const POD_NAMESPACE: &str = "POD_NAMESPACE";
    /// When "true", a node InternalIP may be used as the public address
    pub const ALLOW_INTERNAL_IP: &str = "ALLOW_INTERNAL_IP";
    /// Service (namespace/name) that receives unmatched traffic
    pub const DEFAULT_BACKEND_SERVICE: &str = "DEFAULT_BACKEND_SERVICE";
    /// TLS secret (namespace/name) served when no other certificate matches
    pub const DEFAULT_SSL_CERTIFICATE: &str = "DEFAULT_SSL_CERTIFICATE";
    pub const POD_WAIT_INTERVAL_MS: &str = "POD_WAIT_INTERVAL_MS";
    pub const POD_WAIT_TIMEOUT_SECS: &str = "POD_WAIT_TIMEOUT_SECS";
}

/// Pod self-check polling configuration
pub mod pod_wait {
    /// Interval between pod lookups in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 200;
    /// Give up waiting for the pod after this many seconds
    pub const POLL_TIMEOUT_SECS: u64 = 30;
}

/// Pod phases as reported in `status.phase`
pub mod phase {
    pub const RUNNING: &str = "Running";
    pub const SUCCEEDED: &str = "Succeeded";
    pub const FAILED: &str = "Failed";
}

/// Node address types as reported in `status.addresses[].type`
pub mod address_type {
    pub const EXTERNAL_IP: &str = "ExternalIP";
    pub const INTERNAL_IP: &str = "InternalIP";
    pub const LEGACY_HOST_IP: &str = "LegacyHostIP";
}

/// Keys of a `kubernetes.io/tls` secret
pub mod tls_secret {
    pub const CERTIFICATE_KEY: &str = "tls.crt";
}
