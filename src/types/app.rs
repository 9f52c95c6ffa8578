// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

use super::ResourceRef;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(
    group = "korifi.cloudfoundry.org",
    version = "v1alpha1",
    kind = "CFApp",
    plural = "cfapps"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct CFAppSpec {
    pub display_name: String,
    pub desired_state: DesiredState,
    pub lifecycle: Lifecycle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_droplet_ref: Option<ResourceRef>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DesiredState {
    Started,
    #[default]
    Stopped,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lifecycle {
    #[serde(rename = "type")]
    pub type_: LifecycleType,
    #[serde(default)]
    pub data: LifecycleData,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleType {
    #[default]
    Buildpack,
    Docker,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleData {
    #[serde(default)]
    pub buildpacks: Vec<String>,
    #[serde(default)]
    pub stack: String,
}
