// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// A platform organization. Lives in the root namespace; its own namespace is named by its GUID.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(
    group = "korifi.cloudfoundry.org",
    version = "v1alpha1",
    kind = "CFOrg",
    plural = "cforgs"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct CFOrgSpec {
    pub display_name: String,
    #[serde(default)]
    pub suspended: bool,
}
