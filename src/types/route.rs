// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

use super::ResourceRef;
use crate::constants::DEFAULT_ROUTE_PROTOCOL;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(
    group = "korifi.cloudfoundry.org",
    version = "v1alpha1",
    kind = "CFRoute",
    plural = "cfroutes"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct CFRouteSpec {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub path: String,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    pub domain_ref: ResourceRef,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

/// Where a route sends its traffic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub guid: String,
    pub app_ref: ResourceRef,
    pub process_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

fn default_protocol() -> String {
    DEFAULT_ROUTE_PROTOCOL.to_string()
}
