// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;
use url::Url;

use super::{link, Link, MetadataResponse, Relationship};
use crate::repositories::AppRecord;
use crate::types::app::{DesiredState, LifecycleType};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppResponse {
    pub guid: String,
    pub name: String,
    pub state: DesiredState,
    pub lifecycle: LifecycleResponse,
    pub relationships: AppRelationships,
    pub metadata: MetadataResponse,
    pub links: AppLinks,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LifecycleResponse {
    #[serde(rename = "type")]
    pub type_: LifecycleType,
    pub data: LifecycleDataResponse,
}

/// Docker lifecycles carry no data, so both fields are omitted for them.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LifecycleDataResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildpacks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppRelationships {
    pub space: Relationship,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub space: Link,
    pub processes: Link,
    pub packages: Link,
    pub environment_variables: Link,
    pub current_droplet: Link,
    pub droplets: Link,
}

pub fn present_app(app: &AppRecord, base: &Url) -> AppResponse {
    let path = format!("/v3/apps/{}", app.guid);
    let data = match app.lifecycle.type_ {
        LifecycleType::Buildpack => LifecycleDataResponse {
            buildpacks: Some(app.lifecycle.data.buildpacks.clone()),
            stack: Some(app.lifecycle.data.stack.clone()),
        },
        LifecycleType::Docker => LifecycleDataResponse {
            buildpacks: None,
            stack: None,
        },
    };

    AppResponse {
        guid: app.guid.clone(),
        name: app.name.clone(),
        state: app.state,
        lifecycle: LifecycleResponse {
            type_: app.lifecycle.type_,
            data,
        },
        relationships: AppRelationships {
            space: Relationship::to(&app.space_guid),
        },
        metadata: (&app.metadata).into(),
        links: AppLinks {
            self_: link(base, &path),
            space: link(base, &format!("/v3/spaces/{}", app.space_guid)),
            processes: link(base, &format!("{}/processes", path)),
            packages: link(base, &format!("{}/packages", path)),
            environment_variables: link(base, &format!("{}/environment_variables", path)),
            current_droplet: link(base, &format!("{}/droplets/current", path)),
            droplets: link(base, &format!("{}/droplets", path)),
        },
    }
}
