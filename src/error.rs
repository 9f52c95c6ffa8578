// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

use thiserror::Error;

use crate::constants::webhooks::DUPLICATE_NAME_ERROR;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Resource kinds as they are named in error details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Org,
    Space,
    Domain,
    Route,
    App,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::Org => "Org",
            ResourceType::Space => "Space",
            ResourceType::Domain => "Domain",
            ResourceType::Route => "Route",
            ResourceType::App => "App",
        };
        f.write_str(name)
    }
}

/// The closed set of failures a request can end in
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(ResourceType),

    #[error("not authorized to perform the requested action")]
    Forbidden,

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("request carries no authenticated identity")]
    NotAuthenticated,

    #[error("unknown error: {0}")]
    Unknown(#[source] BoxError),
}

impl ApiError {
    pub fn unknown(err: impl Into<BoxError>) -> Self {
        ApiError::Unknown(err.into())
    }

    /// Demote any error to `Unknown`, keeping the original as the cause.
    pub fn into_unknown(self) -> Self {
        match self {
            ApiError::Unknown(_) => self,
            other => ApiError::Unknown(Box::new(other)),
        }
    }

    /// Classify a failed read. Forbidden and absent look the same to the caller.
    pub(crate) fn from_read(err: kube::Error, resource: ResourceType) -> Self {
        match api_code(&err) {
            Some(403 | 404) => ApiError::NotFound(resource),
            _ => ApiError::unknown(err),
        }
    }

    /// Classify a failed write (delete, or create without a uniqueness violation).
    pub(crate) fn from_write(err: kube::Error, resource: ResourceType) -> Self {
        match api_code(&err) {
            Some(404) => ApiError::NotFound(resource),
            Some(403) => ApiError::Forbidden,
            _ => ApiError::unknown(err),
        }
    }

    /// Classify a failed create, turning uniqueness violations into a readable detail.
    pub(crate) fn from_create(
        err: kube::Error,
        resource: ResourceType,
        duplicate_detail: impl FnOnce() -> String,
    ) -> Self {
        if is_duplicate(&err) {
            return ApiError::UnprocessableEntity(duplicate_detail());
        }
        Self::from_write(err, resource)
    }
}

/// Wraps a failure to construct a caller-scoped cluster client.
///
/// This is an infrastructure failure, never an authorization decision.
#[derive(Error, Debug)]
#[error("failed to build impersonating client: {0}")]
pub struct ClientBuildError(#[source] pub kube::Error);

impl From<ClientBuildError> for ApiError {
    fn from(err: ClientBuildError) -> Self {
        ApiError::unknown(err)
    }
}

/// Whether the cluster refused to show anything for a list in one namespace
pub(crate) fn is_list_denied(err: &kube::Error) -> bool {
    matches!(api_code(err), Some(403 | 404))
}

fn api_code(err: &kube::Error) -> Option<u16> {
    match err {
        kube::Error::Api(resp) => Some(resp.code),
        _ => None,
    }
}

fn is_duplicate(err: &kube::Error) -> bool {
    match err {
        kube::Error::Api(resp) => {
            (resp.code == 409 && resp.reason == "AlreadyExists")
                || resp.message.contains(DUPLICATE_NAME_ERROR)
        }
        _ => false,
    }
}
