// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use super::{link, Link, MetadataResponse, Relationship};
use crate::repositories::OrgRecord;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OrgResponse {
    pub guid: String,
    pub name: String,
    pub suspended: bool,
    pub relationships: BTreeMap<String, Relationship>,
    pub metadata: MetadataResponse,
    pub links: OrgLinks,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OrgLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub domains: Link,
    pub default_domain: Link,
}

pub fn present_org(org: &OrgRecord, base: &Url) -> OrgResponse {
    let path = format!("/v3/organizations/{}", org.guid);
    OrgResponse {
        guid: org.guid.clone(),
        name: org.name.clone(),
        suspended: org.suspended,
        relationships: BTreeMap::new(),
        metadata: (&org.metadata).into(),
        links: OrgLinks {
            self_: link(base, &path),
            domains: link(base, &format!("{}/domains", path)),
            default_domain: link(base, &format!("{}/domains/default", path)),
        },
    }
}
