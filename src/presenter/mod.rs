// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of records into the platform API's JSON shapes.
//!
//! Presenters are pure: the same record and base URL always produce the same output.
//! Collections are always present, never null.

pub mod app;
pub mod domain;
pub mod org;
pub mod route;
pub mod space;

pub use app::{present_app, AppResponse};
pub use domain::{present_domain, DomainResponse};
pub use org::{present_org, OrgResponse};
pub use route::{
    present_destinations, present_route, route_url, DestinationsResponse, RouteResponse,
};
pub use space::{present_space, SpaceResponse};

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::repositories::Metadata;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
}

/// Link to `path` under the server's base URL
pub fn link(base: &Url, path: &str) -> Link {
    Link {
        href: format!("{}{}", base.as_str().trim_end_matches('/'), path),
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RelationshipData {
    pub guid: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub data: RelationshipData,
}

impl Relationship {
    pub fn to(guid: &str) -> Self {
        Self {
            data: RelationshipData {
                guid: guid.to_string(),
            },
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataResponse {
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

impl From<&Metadata> for MetadataResponse {
    fn from(metadata: &Metadata) -> Self {
        Self {
            labels: metadata.labels.clone(),
            annotations: metadata.annotations.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub total_results: usize,
    pub total_pages: usize,
    pub first: Link,
    pub last: Link,
    pub next: Option<Link>,
    pub previous: Option<Link>,
}

/// A single-page list of resources
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ListResponse<T> {
    pub pagination: Pagination,
    pub resources: Vec<T>,
}

pub fn present_list<R, T>(
    records: &[R],
    base: &Url,
    collection_path: &str,
    present: impl Fn(&R, &Url) -> T,
) -> ListResponse<T> {
    let page = link(base, &format!("{}?page=1", collection_path));
    ListResponse {
        pagination: Pagination {
            total_results: records.len(),
            total_pages: 1,
            first: page.clone(),
            last: page,
            next: None,
            previous: None,
        },
        resources: records.iter().map(|r| present(r, base)).collect(),
    }
}
