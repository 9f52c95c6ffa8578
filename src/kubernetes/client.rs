// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Caller-scoped client creation.
//!
//! Every cluster call made on behalf of a request goes through a client built here, so the
//! cluster's RBAC evaluates it as the caller and not as the API server's own account.

use crate::error::ClientBuildError;
use crate::identity::Identity;
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// Builds a cluster client carrying exactly one caller's privileges
pub trait ClientBuilder: Send + Sync {
    fn build(&self, identity: &Identity) -> Result<Client, ClientBuildError>;
}

/// Builds clients that impersonate the caller on top of the server's own connection settings
#[derive(Clone)]
pub struct ImpersonatingClientBuilder {
    base: KConfig,
}

impl ImpersonatingClientBuilder {
    pub fn new(base: KConfig) -> Self {
        Self { base }
    }
}

impl ClientBuilder for ImpersonatingClientBuilder {
    #[instrument(skip(self, identity), fields(principal = %identity))]
    fn build(&self, identity: &Identity) -> Result<Client, ClientBuildError> {
        let config = impersonation_config(&self.base, identity);
        debug!("Building impersonating client");
        Client::try_from(config).map_err(ClientBuildError)
    }
}

/// Derive a connection config that impersonates `identity`
pub fn impersonation_config(base: &KConfig, identity: &Identity) -> KConfig {
    let mut config = base.clone();
    config.auth_info.impersonate = Some(identity.name().to_string());
    config.auth_info.impersonate_groups = if identity.groups().is_empty() {
        None
    } else {
        Some(identity.groups().to_vec())
    };
    config
}
