// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for cluster reads, pod self-checks, node addresses and service validation.

pub mod client;
pub mod nodes;
pub mod pods;
pub mod services;

pub use client::{ClusterApi, KubeClusterApi};
pub use nodes::select_node_address;
pub use pods::{get_pod_details, wait_for_pod_condition, wait_for_pod_running, PodRunning};
pub use services::validate_service;
