// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;
use url::Url;

use super::{link, Link, MetadataResponse, Relationship};
use crate::repositories::SpaceRecord;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SpaceResponse {
    pub guid: String,
    pub name: String,
    pub relationships: SpaceRelationships,
    pub metadata: MetadataResponse,
    pub links: SpaceLinks,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SpaceRelationships {
    pub organization: Relationship,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SpaceLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub organization: Link,
}

pub fn present_space(space: &SpaceRecord, base: &Url) -> SpaceResponse {
    SpaceResponse {
        guid: space.guid.clone(),
        name: space.name.clone(),
        relationships: SpaceRelationships {
            organization: Relationship::to(&space.org_guid),
        },
        metadata: (&space.metadata).into(),
        links: SpaceLinks {
            self_: link(base, &format!("/v3/spaces/{}", space.guid)),
            organization: link(base, &format!("/v3/organizations/{}", space.org_guid)),
        },
    }
}
