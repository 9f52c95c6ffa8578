// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;
use url::Url;

use super::{link, Link, MetadataResponse, RelationshipData};
use crate::repositories::DomainRecord;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DomainResponse {
    pub guid: String,
    pub name: String,
    pub internal: bool,
    pub relationships: DomainRelationships,
    pub metadata: MetadataResponse,
    pub links: DomainLinks,
}

/// Domains are shared from the root namespace and never owned by an org
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DomainRelationships {
    pub organization: OptionalRelationship,
    pub shared_organizations: ManyRelationship,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionalRelationship {
    pub data: Option<RelationshipData>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ManyRelationship {
    pub data: Vec<RelationshipData>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DomainLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub route_reservations: Link,
}

pub fn present_domain(domain: &DomainRecord, base: &Url) -> DomainResponse {
    let path = format!("/v3/domains/{}", domain.guid);
    DomainResponse {
        guid: domain.guid.clone(),
        name: domain.name.clone(),
        internal: false,
        relationships: DomainRelationships {
            organization: OptionalRelationship { data: None },
            shared_organizations: ManyRelationship { data: Vec::new() },
        },
        metadata: (&domain.metadata).into(),
        links: DomainLinks {
            self_: link(base, &path),
            route_reservations: link(base, &format!("{}/route_reservations", path)),
        },
    }
}
