// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Self-checks for the pod the controller runs in

use crate::constants::phase;
use crate::error::{IngressError, Result};
use crate::kubernetes::{select_node_address, ClusterApi};
use crate::types::{PodIdentity, PodInfo};
use crate::wait::{poll_immediate, Condition, PollOutcome, PollSpec};
use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Satisfied once the pod reports phase `Running`.
///
/// A pod in a terminal phase can never get there, so that is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PodRunning;

impl Condition<Pod> for PodRunning {
    fn evaluate(&self, pod: &Pod) -> Result<PollOutcome> {
        match pod.status.as_ref().and_then(|s| s.phase.as_deref()) {
            Some(phase::RUNNING) => Ok(PollOutcome::Satisfied),
            Some(terminal @ (phase::SUCCEEDED | phase::FAILED)) => {
                Err(IngressError::ConditionFailed(format!(
                    "pod {} is in terminal phase {}",
                    pod.name_any(),
                    terminal
                )))
            }
            _ => Ok(PollOutcome::Pending),
        }
    }
}

/// Wait until `condition` holds for the pod, tolerating the pod not existing yet
#[instrument(skip(api, identity, condition, cancel), fields(pod = %identity))]
pub async fn wait_for_pod_condition<A, C>(
    api: &A,
    identity: &PodIdentity,
    condition: &C,
    spec: PollSpec,
    cancel: &CancellationToken,
) -> Result<()>
where
    A: ClusterApi + ?Sized,
    C: Condition<Pod> + ?Sized,
{
    poll_immediate(
        spec,
        cancel,
        move || api.get_pod(&identity.namespace, &identity.name),
        condition,
    )
    .await
}

/// Wait until the pod reaches phase `Running`
pub async fn wait_for_pod_running<A>(
    api: &A,
    identity: &PodIdentity,
    spec: PollSpec,
    cancel: &CancellationToken,
) -> Result<()>
where
    A: ClusterApi + ?Sized,
{
    info!(
        "Waiting up to {:?} for pod {} to be running...",
        spec.timeout(),
        identity
    );
    wait_for_pod_condition(api, identity, &PodRunning, spec, cancel).await
}

/// Wait for the pod to run, then resolve the public address of its node
#[instrument(skip(api, identity, cancel), fields(pod = %identity))]
pub async fn get_pod_details<A>(
    api: &A,
    identity: &PodIdentity,
    allow_internal_ip: bool,
    spec: PollSpec,
    cancel: &CancellationToken,
) -> Result<PodInfo>
where
    A: ClusterApi + ?Sized,
{
    wait_for_pod_running(api, identity, spec, cancel).await?;

    let pod = api
        .get_pod(&identity.namespace, &identity.name)
        .await?
        .ok_or_else(|| IngressError::PodNotFound(identity.to_string()))?;

    let Some(node_name) = pod
        .spec
        .as_ref()
        .and_then(|s| s.node_name.clone())
        .filter(|n| !n.is_empty())
    else {
        return Err(IngressError::PodNotScheduled(identity.to_string()));
    };

    let node = api.get_node(&node_name).await?;
    let node_ip = select_node_address(&node, allow_internal_ip)
        .ok_or_else(|| IngressError::NoNodeAddress(node_name.clone()))?;

    info!("Pod {} runs on node {} ({})", identity, node_name, node_ip);

    Ok(PodInfo {
        name: identity.name.clone(),
        namespace: identity.namespace.clone(),
        node_ip,
    })
}
