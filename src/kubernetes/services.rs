// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service reference validation

use crate::error::{IngressError, Result};
use crate::kubernetes::ClusterApi;
use crate::types::parse_ns_name;
use tracing::{debug, instrument};

/// Check that `name` has the form `namespace/name` and that the service exists
#[instrument(skip(api))]
pub async fn validate_service<A>(api: &A, name: &str) -> Result<()>
where
    A: ClusterApi + ?Sized,
{
    if name.is_empty() {
        return Err(IngressError::EmptyServiceName);
    }

    let (namespace, service) = parse_ns_name(name)?;
    api.get_service(namespace, service).await?;
    debug!("Service {} exists", name);

    Ok(())
}
