// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;
use url::Url;

use super::{link, Link, MetadataResponse, Relationship};
use crate::repositories::{DestinationRecord, RouteRecord};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteResponse {
    pub guid: String,
    pub port: Option<i32>,
    pub path: String,
    pub protocol: String,
    pub host: String,
    pub url: String,
    pub destinations: Vec<DestinationResponse>,
    pub relationships: RouteRelationships,
    pub metadata: MetadataResponse,
    pub links: RouteLinks,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteRelationships {
    pub space: Relationship,
    pub domain: Relationship,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub space: Link,
    pub domain: Link,
    pub destinations: Link,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationResponse {
    pub guid: String,
    pub app: DestinationApp,
    pub port: Option<i32>,
    pub protocol: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationApp {
    pub guid: String,
    pub process: DestinationProcess,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationProcess {
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationsResponse {
    pub destinations: Vec<DestinationResponse>,
    pub links: DestinationsLinks,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationsLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub route: Link,
}

/// `host.domain`, or just the domain for a route without a host
pub fn route_url(host: &str, domain_name: &str) -> String {
    if host.is_empty() {
        domain_name.to_string()
    } else {
        format!("{}.{}", host, domain_name)
    }
}

fn present_destination(destination: &DestinationRecord) -> DestinationResponse {
    DestinationResponse {
        guid: destination.guid.clone(),
        app: DestinationApp {
            guid: destination.app_guid.clone(),
            process: DestinationProcess {
                type_: destination.process_type.clone(),
            },
        },
        port: destination.port,
        protocol: destination.protocol.clone(),
    }
}

/// Expects `route.domain_ref` to carry the fetched domain, its name is used for `url`.
pub fn present_route(route: &RouteRecord, base: &Url) -> RouteResponse {
    let path = format!("/v3/routes/{}", route.guid);
    RouteResponse {
        guid: route.guid.clone(),
        port: route.port,
        path: route.path.clone(),
        protocol: route.protocol.clone(),
        host: route.host.clone(),
        url: route_url(&route.host, &route.domain_ref.name),
        destinations: route.destinations.iter().map(present_destination).collect(),
        relationships: RouteRelationships {
            space: Relationship::to(&route.space_guid),
            domain: Relationship::to(&route.domain_ref.guid),
        },
        metadata: (&route.metadata).into(),
        links: RouteLinks {
            self_: link(base, &path),
            space: link(base, &format!("/v3/spaces/{}", route.space_guid)),
            domain: link(base, &format!("/v3/domains/{}", route.domain_ref.guid)),
            destinations: link(base, &format!("{}/destinations", path)),
        },
    }
}

pub fn present_destinations(route: &RouteRecord, base: &Url) -> DestinationsResponse {
    let path = format!("/v3/routes/{}", route.guid);
    DestinationsResponse {
        destinations: route.destinations.iter().map(present_destination).collect(),
        links: DestinationsLinks {
            self_: link(base, &format!("{}/destinations", path)),
            route: link(base, &path),
        },
    }
}
