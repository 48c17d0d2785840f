// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! TLS host validation: which hosts a serving certificate may answer for.

pub mod certificate;
pub mod hostnames;

pub use certificate::{certificate_names, certificate_names_from_secret, load_certificate_names};
pub use hostnames::{is_host_valid, matches_hostname};
