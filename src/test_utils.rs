// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock Kubernetes HTTP service and an in-memory cluster.

use crate::error::{IngressError, Result};
use crate::kubernetes::ClusterApi;
use async_trait::async_trait;
use http::{Request, Response};
use k8s_openapi::api::core::v1::{
    Node, NodeAddress, NodeStatus, Pod, PodSpec, PodStatus, Secret, Service,
};
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::{Client, ResourceExt};
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service as TowerService;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "https://kubernetes.default.svc")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl TowerService<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let (status, body) = self
            .find_response(&method, &path)
            .unwrap_or_else(|| (404, not_found_json("object", &path)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock pod JSON response
pub fn pod_json(namespace: &str, name: &str, phase: &str, node: Option<&str>) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": {
            "containers": [],
            "nodeName": node
        },
        "status": {
            "phase": phase
        }
    })
    .to_string()
}

/// Create a mock node JSON response
pub fn node_json(name: &str, addresses: &[(&str, &str)]) -> String {
    let addresses: Vec<_> = addresses
        .iter()
        .map(|(kind, address)| serde_json::json!({ "type": kind, "address": address }))
        .collect();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Node",
        "metadata": { "name": name },
        "status": { "addresses": addresses }
    })
    .to_string()
}

/// Create a mock service JSON response
pub fn service_json(namespace: &str, name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": {
            "name": name,
            "namespace": namespace
        },
        "spec": {
            "ports": [{ "port": 80 }]
        }
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

pub fn make_pod(namespace: &str, name: &str, phase: Option<&str>, node: Option<&str>) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            node_name: node.map(str::to_string),
            ..Default::default()
        }),
        status: Some(PodStatus {
            phase: phase.map(str::to_string),
            ..Default::default()
        }),
    }
}

pub fn make_node(name: &str, addresses: &[(&str, &str)]) -> Node {
    Node {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        status: Some(NodeStatus {
            addresses: Some(
                addresses
                    .iter()
                    .map(|(kind, address)| NodeAddress {
                        type_: kind.to_string(),
                        address: address.to_string(),
                    })
                    .collect(),
            ),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn make_tls_secret(namespace: &str, name: &str, certificate_pem: &str) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([
            (
                "tls.crt".to_string(),
                ByteString(certificate_pem.as_bytes().to_vec()),
            ),
            ("tls.key".to_string(), ByteString(b"unused".to_vec())),
        ])),
        type_: Some("kubernetes.io/tls".to_string()),
        ..Default::default()
    }
}

/// Self-signed PEM certificate with the given subject CN and subject alternative names
pub fn make_cert_pem(common_name: &str, subject_alt_names: &[&str]) -> String {
    let key_pair = KeyPair::generate().unwrap();
    let mut params = CertificateParams::new(
        subject_alt_names
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
    )
    .unwrap();
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, common_name);
    params.distinguished_name = dn;
    params.self_signed(&key_pair).unwrap().pem()
}

/// Scripted answer to a `get_pod` call
#[derive(Clone, Debug)]
pub enum PodResponse {
    Found(Pod),
    NotFound,
    Fail(String),
}

fn request_failed(message: impl Into<String>) -> IngressError {
    let message: String = message.into();
    IngressError::KubeError(kube::Error::Service(message.into()))
}

/// In-memory [`ClusterApi`].
///
/// Pod lookups replay a script per pod; the last entry repeats forever.
/// Unknown pods are not found, unknown nodes, services and secrets fail.
#[derive(Default)]
pub struct FakeClusterApi {
    pods: Mutex<HashMap<(String, String), VecDeque<PodResponse>>>,
    nodes: HashMap<String, Node>,
    services: HashSet<(String, String)>,
    secrets: HashMap<(String, String), Secret>,
    pod_fetches: AtomicUsize,
    service_fetches: AtomicUsize,
}

impl FakeClusterApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pod_responses(
        self,
        namespace: &str,
        name: &str,
        responses: Vec<PodResponse>,
    ) -> Self {
        self.pods
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()), responses.into());
        self
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.insert(node.name_any(), node);
        self
    }

    pub fn with_service(mut self, namespace: &str, name: &str) -> Self {
        self.services
            .insert((namespace.to_string(), name.to_string()));
        self
    }

    pub fn with_secret(mut self, secret: Secret) -> Self {
        let key = (secret.namespace().unwrap_or_default(), secret.name_any());
        self.secrets.insert(key, secret);
        self
    }

    pub fn pod_fetches(&self) -> usize {
        self.pod_fetches.load(Ordering::SeqCst)
    }

    pub fn service_fetches(&self) -> usize {
        self.service_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterApi for FakeClusterApi {
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Option<Pod>> {
        self.pod_fetches.fetch_add(1, Ordering::SeqCst);

        let response = {
            let mut pods = self.pods.lock().unwrap();
            let Some(script) = pods.get_mut(&(namespace.to_string(), name.to_string())) else {
                return Ok(None);
            };
            if script.len() > 1 {
                script.pop_front()
            } else {
                script.front().cloned()
            }
        };

        match response {
            Some(PodResponse::Found(pod)) => Ok(Some(pod)),
            Some(PodResponse::NotFound) | None => Ok(None),
            Some(PodResponse::Fail(message)) => Err(request_failed(message)),
        }
    }

    async fn get_node(&self, name: &str) -> Result<Node> {
        self.nodes
            .get(name)
            .cloned()
            .ok_or_else(|| request_failed(format!("nodes \"{}\" not found", name)))
    }

    async fn get_service(&self, namespace: &str, name: &str) -> Result<Service> {
        self.service_fetches.fetch_add(1, Ordering::SeqCst);

        if !self
            .services
            .contains(&(namespace.to_string(), name.to_string()))
        {
            return Err(request_failed(format!(
                "services \"{}/{}\" not found",
                namespace, name
            )));
        }

        Ok(Service {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret> {
        self.secrets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| {
                request_failed(format!("secrets \"{}/{}\" not found", namespace, name))
            })
    }
}
