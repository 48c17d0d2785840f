// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Extract the host names a serving certificate is valid for

use crate::constants::tls_secret::CERTIFICATE_KEY;
use crate::error::{IngressError, Result};
use crate::kubernetes::ClusterApi;
use crate::types::NamespacedName;
use k8s_openapi::api::core::v1::Secret;
use kube::ResourceExt;
use tracing::{debug, instrument};
use x509_parser::prelude::{FromDer, GeneralName, X509Certificate};

/// Subject common names and DNS subject alternative names of the leaf certificate.
///
/// The leaf is the first `CERTIFICATE` block in `pem_data`; any chain after it
/// is ignored. Names keep their order and appear once.
pub fn certificate_names(pem_data: &[u8]) -> Result<Vec<String>> {
    let blocks = ::pem::parse_many(pem_data)
        .map_err(|e| IngressError::CertificateError(format!("failed to parse PEM: {}", e)))?;

    let leaf = blocks
        .iter()
        .find(|b| b.tag() == "CERTIFICATE")
        .ok_or_else(|| IngressError::CertificateError("no CERTIFICATE block found".to_string()))?;

    let (_, cert) = X509Certificate::from_der(leaf.contents()).map_err(|e| {
        IngressError::CertificateError(format!("failed to parse certificate: {}", e))
    })?;

    let mut names: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    };

    for cn in cert.subject().iter_common_name() {
        if let Ok(cn) = cn.as_str() {
            push(cn);
        }
    }

    let san = cert.subject_alternative_name().map_err(|e| {
        IngressError::CertificateError(format!("invalid subject alternative names: {}", e))
    })?;
    if let Some(san) = san {
        for general_name in &san.value.general_names {
            if let GeneralName::DNSName(dns) = general_name {
                push(*dns);
            }
        }
    }

    Ok(names)
}

/// Certificate names from the `tls.crt` entry of a TLS secret
pub fn certificate_names_from_secret(secret: &Secret) -> Result<Vec<String>> {
    let secret_name = format!(
        "{}/{}",
        secret.namespace().unwrap_or_default(),
        secret.name_any()
    );

    let Some(data) = secret.data.as_ref() else {
        return Err(IngressError::CertificateError(format!(
            "secret {} has no data",
            secret_name
        )));
    };

    let Some(certificate) = data.get(CERTIFICATE_KEY) else {
        return Err(IngressError::CertificateError(format!(
            "secret {} does not contain '{}' key",
            secret_name, CERTIFICATE_KEY
        )));
    };

    certificate_names(&certificate.0)
}

/// Fetch a TLS secret and return the names its certificate covers
#[instrument(skip(api), fields(secret = %secret))]
pub async fn load_certificate_names<A>(api: &A, secret: &NamespacedName) -> Result<Vec<String>>
where
    A: ClusterApi + ?Sized,
{
    let tls_secret = api.get_secret(&secret.namespace, &secret.name).await?;
    let names = certificate_names_from_secret(&tls_secret)?;
    debug!("Certificate in {} covers {:?}", secret, names);
    Ok(names)
}
