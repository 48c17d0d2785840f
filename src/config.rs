// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as keys, pod_wait};
use crate::types::{NamespacedName, PodIdentity};
use crate::wait::PollSpec;
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Controller configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// The pod this controller runs in
    pub pod: PodIdentity,
    /// Use a node's InternalIP when it has no ExternalIP
    pub allow_internal_ip: bool,
    /// Service receiving traffic no rule matches, as `namespace/name`
    pub default_backend_service: Option<String>,
    /// TLS secret served when no other certificate covers the host
    pub default_ssl_certificate: Option<NamespacedName>,
    pub pod_wait: PollSpec,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            match lookup(key) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => bail!("{} environment variable not set", key),
            }
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let pod = PodIdentity::new(
            required(keys::POD_NAMESPACE)?,
            required(keys::POD_NAME)?,
        );

        let allow_internal_ip = optional(keys::ALLOW_INTERNAL_IP)
            .map(|v| v.parse().unwrap_or(false))
            .unwrap_or(false);

        let default_ssl_certificate = optional(keys::DEFAULT_SSL_CERTIFICATE)
            .map(|v| v.parse::<NamespacedName>())
            .transpose()
            .with_context(|| format!("Invalid {}", keys::DEFAULT_SSL_CERTIFICATE))?;

        let interval_ms = parse_u64(
            optional(keys::POD_WAIT_INTERVAL_MS),
            keys::POD_WAIT_INTERVAL_MS,
            pod_wait::POLL_INTERVAL_MS,
        )?;
        let timeout_secs = parse_u64(
            optional(keys::POD_WAIT_TIMEOUT_SECS),
            keys::POD_WAIT_TIMEOUT_SECS,
            pod_wait::POLL_TIMEOUT_SECS,
        )?;
        let pod_wait = PollSpec::new(
            Duration::from_millis(interval_ms),
            Duration::from_secs(timeout_secs),
        )
        .with_context(|| format!("Invalid {}", keys::POD_WAIT_INTERVAL_MS))?;

        Ok(Config {
            pod,
            allow_internal_ip,
            default_backend_service: optional(keys::DEFAULT_BACKEND_SERVICE),
            default_ssl_certificate,
            pod_wait,
        })
    }
}

fn parse_u64(value: Option<String>, key: &str, default: u64) -> Result<u64> {
    match value {
        Some(v) => v
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got '{}'", key, v)),
        None => Ok(default),
    }
}
