// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Hostname matching against certificate name patterns

/// Check whether `host` is covered by the certificate name `pattern`.
///
/// One trailing dot is ignored on both sides. Only the leftmost pattern label
/// may be the wildcard `*`, and it stands for exactly one host label, so the
/// label counts must be equal. Empty input never matches.
pub fn matches_hostname(pattern: &str, host: &str) -> bool {
    let pattern = pattern.strip_suffix('.').unwrap_or(pattern);
    let host = host.strip_suffix('.').unwrap_or(host);

    if pattern.is_empty() || host.is_empty() {
        return false;
    }

    let pattern_labels: Vec<&str> = pattern.split('.').collect();
    let host_labels: Vec<&str> = host.split('.').collect();

    if pattern_labels.len() != host_labels.len() {
        return false;
    }

    pattern_labels
        .iter()
        .zip(&host_labels)
        .enumerate()
        .all(|(i, (p, h))| (i == 0 && *p == "*") || p == h)
}

/// Check whether any of the certificate names covers `host`
pub fn is_host_valid<I, S>(host: &str, names: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .any(|name| matches_hostname(name.as_ref(), host))
}
