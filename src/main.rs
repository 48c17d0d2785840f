// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ingress_runtime::config::Config;
use ingress_runtime::kubernetes::{get_pod_details, validate_service, KubeClusterApi};
use ingress_runtime::tls::load_certificate_names;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting ingress runtime");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: pod={}, allow_internal_ip={}",
        config.pod, config.allow_internal_ip
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    let api = KubeClusterApi::new(client);
    info!("Connected to Kubernetes cluster");

    // Ctrl-C aborts the startup checks
    let shutdown = CancellationToken::new();
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling startup checks");
            on_signal.cancel();
        }
    });

    let pod_info = get_pod_details(
        &api,
        &config.pod,
        config.allow_internal_ip,
        config.pod_wait,
        &shutdown,
    )
    .await
    .with_context(|| format!("Pod {} did not become ready", config.pod))?;
    info!("Pod details resolved: {}", pod_info);

    if let Some(service) = &config.default_backend_service {
        validate_service(&api, service)
            .await
            .with_context(|| format!("Invalid default backend service '{}'", service))?;
        info!("Default backend service {} is valid", service);
    }

    if let Some(secret) = &config.default_ssl_certificate {
        let names = load_certificate_names(&api, secret)
            .await
            .with_context(|| format!("Invalid default SSL certificate '{}'", secret))?;
        if names.is_empty() {
            warn!("Default SSL certificate {} does not name any host", secret);
        } else {
            info!("Default SSL certificate {} covers {}", secret, names.join(", "));
        }
    }

    info!("Startup checks complete");
    Ok(())
}
