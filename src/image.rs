// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry push contract used when staging application packages.
//!
//! Push failures are not cluster failures: they are handed back to the staging caller as-is
//! and never pass through [`crate::error::ApiError`].

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use thiserror::Error;
use tracing::{info, instrument};

/// A built container image: its config blob and layer blobs, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub config: Bytes,
    pub layers: Vec<Bytes>,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistryCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RegistryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOptions {
    pub credentials: Option<RegistryCredentials>,
    /// Allow plain HTTP / unverified TLS to the registry
    pub insecure: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    #[error("invalid image reference: {0}")]
    InvalidReference(String),

    #[error("registry unreachable: {0}")]
    Unreachable(String),

    #[error("registry rejected push of {reference}: {message}")]
    Rejected { reference: String, message: String },
}

#[async_trait]
pub trait ImagePusher: Send + Sync {
    /// Push `image` to `reference`, returning the reference it ended up under
    /// (typically pinned by digest).
    async fn push(
        &self,
        reference: &str,
        image: &Image,
        options: &PushOptions,
    ) -> Result<String, PushError>;
}

/// Push the image built from a package's bits to `<registry_base>/<package_guid>-packages`.
#[instrument(skip(pusher, image, options))]
pub async fn upload_package_image(
    pusher: &dyn ImagePusher,
    registry_base: &str,
    package_guid: &str,
    image: &Image,
    options: &PushOptions,
) -> Result<String, PushError> {
    let registry_base = registry_base.trim_end_matches('/');
    if registry_base.is_empty() || package_guid.is_empty() {
        return Err(PushError::InvalidReference(format!(
            "{}/{}-packages",
            registry_base, package_guid
        )));
    }

    let reference = format!("{}/{}-packages", registry_base, package_guid);
    let pushed = pusher.push(&reference, image, options).await?;

    info!("Pushed package {} as {}", package_guid, pushed);
    Ok(pushed)
}
