// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::constants::defaults;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Externally visible base URL; every hyperlink is rooted here
    pub server_url: Url,
    /// Namespace holding orgs and domains
    pub root_namespace: String,
    pub listen_addr: String,
    /// Deadline applied to each inbound request and propagated into cluster calls
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_url = lookup("SERVER_URL").context("SERVER_URL environment variable not set")?;
        let server_url = Url::parse(&server_url)
            .with_context(|| format!("SERVER_URL is not a valid URL: {}", server_url))?;

        let root_namespace =
            lookup("ROOT_NAMESPACE").unwrap_or_else(|| defaults::ROOT_NAMESPACE.to_string());
        let listen_addr =
            lookup("LISTEN_ADDR").unwrap_or_else(|| defaults::LISTEN_ADDR.to_string());
        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a number: {}", v))?,
            None => defaults::REQUEST_TIMEOUT_SECS,
        };

        Ok(Config {
            server_url,
            root_namespace,
            listen_addr,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
