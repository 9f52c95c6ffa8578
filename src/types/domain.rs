// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(
    group = "korifi.cloudfoundry.org",
    version = "v1alpha1",
    kind = "CFDomain",
    plural = "cfdomains"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct CFDomainSpec {
    /// Fully-qualified DNS name
    pub name: String,
}
