// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Caller identity and the per-request context threaded through every repository call.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::time::{timeout_at, Instant};

use crate::error::ApiError;

const SERVICE_ACCOUNT_PREFIX: &str = "system:serviceaccount:";

/// Kind of principal a request is made by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalKind {
    User,
    ServiceAccount,
}

/// The caller's identity as established by the authenticating front proxy.
///
/// Immutable for the life of a request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    kind: PrincipalKind,
    groups: Vec<String>,
}

impl Identity {
    /// Create an identity from a principal name as the cluster knows it.
    ///
    /// Names of the form `system:serviceaccount:<namespace>:<name>` are service accounts,
    /// everything else is a user.
    pub fn new(principal: impl Into<String>, groups: Vec<String>) -> Self {
        let name = principal.into();
        let kind = if name.starts_with(SERVICE_ACCOUNT_PREFIX) {
            PrincipalKind::ServiceAccount
        } else {
            PrincipalKind::User
        };
        Self { name, kind, groups }
    }

    pub fn service_account(namespace: &str, name: &str, groups: Vec<String>) -> Self {
        Self::new(format!("{SERVICE_ACCOUNT_PREFIX}{namespace}:{name}"), groups)
    }

    /// Principal name used for impersonation
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PrincipalKind {
        self.kind
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Everything a repository needs to know about the request it serves
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub identity: Identity,
    pub deadline: Instant,
}

impl RequestContext {
    pub fn new(identity: Identity, timeout: Duration) -> Self {
        Self {
            identity,
            deadline: Instant::now() + timeout,
        }
    }

    /// Run a cluster call bounded by the request deadline.
    ///
    /// Expiry of the deadline aborts the call and is reported as an unknown error; the
    /// cluster's own result is handed back untouched for classification.
    pub async fn call<T, F>(&self, fut: F) -> Result<kube::Result<T>, ApiError>
    where
        F: Future<Output = kube::Result<T>>,
    {
        timeout_at(self.deadline, fut).await.map_err(ApiError::unknown)
    }
}
