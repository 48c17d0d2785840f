// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{IngressError, Result};
use std::fmt;
use std::str::FromStr;

/// A namespaced object reference, written as `namespace/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

/// Identity of the pod the controller itself runs in
pub type PodIdentity = NamespacedName;

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for NamespacedName {
    type Err = IngressError;

    fn from_str(s: &str) -> Result<Self> {
        let (namespace, name) = parse_ns_name(s)?;
        Ok(Self::new(namespace, name))
    }
}

/// Split a `namespace/name` string into its two parts.
///
/// Exactly one separator and two non-empty parts are accepted.
pub fn parse_ns_name(input: &str) -> Result<(&str, &str)> {
    let mut parts = input.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(namespace), Some(name), None) if !namespace.is_empty() && !name.is_empty() => {
            Ok((namespace, name))
        }
        _ => Err(IngressError::MalformedName(input.to_string())),
    }
}
