// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Plain value types passed between configuration and the cluster helpers.

pub mod identity;
pub mod pod;

pub use identity::{parse_ns_name, NamespacedName, PodIdentity};
pub use pod::PodInfo;
