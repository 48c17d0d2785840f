// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read access to the cluster objects the controller depends on

use crate::error::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Node, Pod, Secret, Service};
use kube::{Api, Client};
use tracing::{debug, instrument};

/// The cluster reads needed by the startup checks.
///
/// `get_pod` reports a missing pod as `Ok(None)` so callers can tell it apart
/// from a failed request.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Option<Pod>>;

    async fn get_node(&self, name: &str) -> Result<Node>;

    async fn get_service(&self, namespace: &str, name: &str) -> Result<Service>;

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret>;
}

/// [`ClusterApi`] backed by a live Kubernetes client
#[derive(Clone)]
pub struct KubeClusterApi {
    client: Client,
}

impl KubeClusterApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterApi for KubeClusterApi {
    #[instrument(skip(self))]
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Option<Pod>> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let pod = pods.get_opt(name).await?;
        if pod.is_none() {
            debug!("Pod {}/{} not found", namespace, name);
        }
        Ok(pod)
    }

    #[instrument(skip(self))]
    async fn get_node(&self, name: &str) -> Result<Node> {
        let nodes: Api<Node> = Api::all(self.client.clone());
        Ok(nodes.get(name).await?)
    }

    #[instrument(skip(self))]
    async fn get_service(&self, namespace: &str, name: &str) -> Result<Service> {
        let services: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        Ok(services.get(name).await?)
    }

    #[instrument(skip(self))]
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        Ok(secrets.get(name).await?)
    }
}
