// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Node address selection

use crate::constants::address_type;
use k8s_openapi::api::core::v1::Node;

/// Pick the address under which a node is reachable from outside the cluster.
///
/// The first non-empty `ExternalIP` wins. Otherwise the first `InternalIP` is
/// used when `allow_internal_ip` is set, and `LegacyHostIP` comes last.
pub fn select_node_address(node: &Node, allow_internal_ip: bool) -> Option<String> {
    let addresses = node.status.as_ref()?.addresses.as_ref()?;

    let first_of = |kind: &str| {
        addresses
            .iter()
            .find(|a| a.type_ == kind && !a.address.is_empty())
            .map(|a| a.address.clone())
    };

    first_of(address_type::EXTERNAL_IP)
        .or_else(|| {
            allow_internal_ip
                .then(|| first_of(address_type::INTERNAL_IP))
                .flatten()
        })
        .or_else(|| first_of(address_type::LEGACY_HOST_IP))
}
