// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use async_trait::async_trait;
use kube::{api::PostParams, Api, ResourceExt};
use tracing::{info, instrument};

use super::{
    delete_located, get_located, list_in_namespaces, matches_filter, new_guid, DomainRecord,
    Metadata,
};
use crate::constants::DEFAULT_ROUTE_PROTOCOL;
use crate::error::{ApiError, ResourceType};
use crate::identity::RequestContext;
use crate::kubernetes::{ClientBuilder, NamespaceRetriever};
use crate::types::route::Destination;
use crate::types::{CFRoute, CFRouteSpec, ResourceRef};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RouteRecord {
    pub guid: String,
    pub space_guid: String,
    /// Only the GUID is filled in by the repository; callers attach the fetched domain.
    pub domain_ref: DomainRecord,
    pub host: String,
    pub path: String,
    pub protocol: String,
    pub port: Option<i32>,
    pub destinations: Vec<DestinationRecord>,
    pub metadata: Metadata,
}

impl RouteRecord {
    pub fn with_domain(mut self, domain: DomainRecord) -> Self {
        self.domain_ref = domain;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DestinationRecord {
    pub guid: String,
    pub app_guid: String,
    pub process_type: String,
    pub port: Option<i32>,
    pub protocol: Option<String>,
}

impl From<Destination> for DestinationRecord {
    fn from(d: Destination) -> Self {
        Self {
            guid: d.guid,
            app_guid: d.app_ref.name,
            process_type: d.process_type,
            port: d.port,
            protocol: d.protocol,
        }
    }
}

impl From<CFRoute> for RouteRecord {
    fn from(route: CFRoute) -> Self {
        Self {
            guid: route.name_any(),
            space_guid: route.namespace().unwrap_or_default(),
            metadata: Metadata::from_object_meta(&route.metadata),
            domain_ref: DomainRecord::reference(route.spec.domain_ref.name),
            host: route.spec.host,
            path: route.spec.path,
            protocol: route.spec.protocol,
            port: route.spec.port,
            destinations: route
                .spec
                .destinations
                .into_iter()
                .map(DestinationRecord::from)
                .collect(),
        }
    }
}

/// Routes are listed within the given spaces only; no spaces means no routes.
#[derive(Debug, Clone, Default)]
pub struct RouteListFilter {
    pub space_guids: Vec<String>,
    pub domain_guids: Vec<String>,
    pub hosts: Vec<String>,
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateRouteMessage {
    pub host: String,
    pub path: String,
    pub space_guid: String,
    pub domain_guid: String,
    pub metadata: Metadata,
}

#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn fetch_route(&self, ctx: &RequestContext, guid: &str) -> Result<RouteRecord, ApiError>;
    async fn list_routes(
        &self,
        ctx: &RequestContext,
        filter: RouteListFilter,
    ) -> Result<Vec<RouteRecord>, ApiError>;
    async fn create_route(
        &self,
        ctx: &RequestContext,
        message: CreateRouteMessage,
    ) -> Result<RouteRecord, ApiError>;
    async fn delete_route(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError>;
}

/// Routes stored as `CFRoute` objects in their space's namespace
pub struct K8sRouteRepository {
    client_builder: Arc<dyn ClientBuilder>,
    namespaces: NamespaceRetriever,
    root_namespace: String,
}

impl K8sRouteRepository {
    pub fn new(
        client_builder: Arc<dyn ClientBuilder>,
        namespaces: NamespaceRetriever,
        root_namespace: impl Into<String>,
    ) -> Self {
        Self {
            client_builder,
            namespaces,
            root_namespace: root_namespace.into(),
        }
    }
}

#[async_trait]
impl RouteRepository for K8sRouteRepository {
    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn fetch_route(&self, ctx: &RequestContext, guid: &str) -> Result<RouteRecord, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let route: CFRoute =
            get_located(&self.namespaces, client, ctx, ResourceType::Route, guid).await?;
        Ok(route.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn list_routes(
        &self,
        ctx: &RequestContext,
        filter: RouteListFilter,
    ) -> Result<Vec<RouteRecord>, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let routes: Vec<CFRoute> = list_in_namespaces(&client, ctx, &filter.space_guids).await?;

        Ok(routes
            .into_iter()
            .filter(|r| {
                matches_filter(&filter.domain_guids, &r.spec.domain_ref.name)
                    && matches_filter(&filter.hosts, &r.spec.host)
                    && matches_filter(&filter.paths, &r.spec.path)
            })
            .map(RouteRecord::from)
            .collect())
    }

    #[instrument(skip(self, ctx, message), fields(principal = %ctx.identity, host = %message.host))]
    async fn create_route(
        &self,
        ctx: &RequestContext,
        message: CreateRouteMessage,
    ) -> Result<RouteRecord, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let routes: Api<CFRoute> = Api::namespaced(client, &message.space_guid);

        let guid = new_guid();
        let mut route = CFRoute::new(
            &guid,
            CFRouteSpec {
                host: message.host.clone(),
                path: message.path.clone(),
                protocol: DEFAULT_ROUTE_PROTOCOL.to_string(),
                port: None,
                domain_ref: ResourceRef {
                    name: message.domain_guid.clone(),
                    namespace: Some(self.root_namespace.clone()),
                },
                destinations: Vec::new(),
            },
        );
        route.metadata = message.metadata.into_object_meta(&guid, &message.space_guid);

        let created = ctx
            .call(routes.create(&PostParams::default(), &route))
            .await?
            .map_err(|e| {
                ApiError::from_create(e, ResourceType::Route, || {
                    format!(
                        "Route already exists with host '{}' and path '{}'.",
                        message.host, message.path
                    )
                })
            })?;

        info!("Created route {} in space {}", guid, message.space_guid);
        Ok(created.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn delete_route(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        delete_located::<CFRoute>(&self.namespaces, client, ctx, ResourceType::Route, guid).await?;
        info!("Deleted route {}", guid);
        Ok(())
    }
}
