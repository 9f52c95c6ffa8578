// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for caller-scoped client creation and namespace resolution.

pub mod client;
pub mod namespaces;

pub use client::{ClientBuilder, ImpersonatingClientBuilder};
pub use namespaces::NamespaceRetriever;
