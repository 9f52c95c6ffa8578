// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resources the platform API maps onto.

pub mod app;
pub mod domain;
pub mod org;
pub mod route;
pub mod space;

use serde::{Deserialize, Serialize};

pub use app::{CFApp, CFAppSpec};
pub use domain::{CFDomain, CFDomainSpec};
pub use org::{CFOrg, CFOrgSpec};
pub use route::{CFRoute, CFRouteSpec};
pub use space::{CFSpace, CFSpaceSpec};

/// Reference to another custom resource by name
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}
