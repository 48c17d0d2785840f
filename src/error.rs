// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngressError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Condition check failed: {0}")]
    ConditionFailed(String),

    #[error("Timed out after {0:?} waiting for the condition")]
    DeadlineExceeded(Duration),

    #[error("Wait cancelled before the condition was met")]
    Cancelled,

    #[error("Invalid poll settings: {0}")]
    InvalidPollSpec(String),

    #[error("Invalid format (namespace/name) found in '{0}'")]
    MalformedName(String),

    #[error("Empty string is not a valid service name")]
    EmptyServiceName,

    #[error("Pod {0} not found")]
    PodNotFound(String),

    #[error("Pod {0} is not scheduled on a node")]
    PodNotScheduled(String),

    #[error("No external IP found for node {0}")]
    NoNodeAddress(String),

    #[error("Invalid certificate: {0}")]
    CertificateError(String),
}

impl IngressError {
    /// True when a poll gave up because its timeout elapsed
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, IngressError::DeadlineExceeded(_))
    }
}

pub type Result<T> = std::result::Result<T, IngressError>;
