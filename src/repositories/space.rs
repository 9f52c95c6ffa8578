// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use async_trait::async_trait;
use kube::{api::PostParams, Api, ResourceExt};
use tracing::{info, instrument};

use super::{delete_located, get_located, list_in_namespaces, matches_filter, new_guid, Metadata};
use crate::error::{ApiError, ResourceType};
use crate::identity::RequestContext;
use crate::kubernetes::{ClientBuilder, NamespaceRetriever};
use crate::types::{CFSpace, CFSpaceSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SpaceRecord {
    pub guid: String,
    pub name: String,
    pub org_guid: String,
    pub metadata: Metadata,
}

impl From<CFSpace> for SpaceRecord {
    fn from(space: CFSpace) -> Self {
        Self {
            guid: space.name_any(),
            org_guid: space.namespace().unwrap_or_default(),
            metadata: Metadata::from_object_meta(&space.metadata),
            name: space.spec.display_name,
        }
    }
}

/// Spaces are listed within the given orgs only; no orgs means no spaces.
#[derive(Debug, Clone, Default)]
pub struct SpaceListFilter {
    pub org_guids: Vec<String>,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateSpaceMessage {
    pub name: String,
    pub org_guid: String,
    pub metadata: Metadata,
}

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn fetch_space(&self, ctx: &RequestContext, guid: &str) -> Result<SpaceRecord, ApiError>;
    async fn list_spaces(
        &self,
        ctx: &RequestContext,
        filter: SpaceListFilter,
    ) -> Result<Vec<SpaceRecord>, ApiError>;
    async fn create_space(
        &self,
        ctx: &RequestContext,
        message: CreateSpaceMessage,
    ) -> Result<SpaceRecord, ApiError>;
    async fn delete_space(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError>;
}

/// Spaces stored as `CFSpace` objects in their org's namespace
pub struct K8sSpaceRepository {
    client_builder: Arc<dyn ClientBuilder>,
    namespaces: NamespaceRetriever,
}

impl K8sSpaceRepository {
    pub fn new(client_builder: Arc<dyn ClientBuilder>, namespaces: NamespaceRetriever) -> Self {
        Self {
            client_builder,
            namespaces,
        }
    }
}

#[async_trait]
impl SpaceRepository for K8sSpaceRepository {
    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn fetch_space(&self, ctx: &RequestContext, guid: &str) -> Result<SpaceRecord, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let space: CFSpace =
            get_located(&self.namespaces, client, ctx, ResourceType::Space, guid).await?;
        Ok(space.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn list_spaces(
        &self,
        ctx: &RequestContext,
        filter: SpaceListFilter,
    ) -> Result<Vec<SpaceRecord>, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let spaces: Vec<CFSpace> = list_in_namespaces(&client, ctx, &filter.org_guids).await?;

        Ok(spaces
            .into_iter()
            .filter(|s| matches_filter(&filter.names, &s.spec.display_name))
            .map(SpaceRecord::from)
            .collect())
    }

    #[instrument(skip(self, ctx, message), fields(principal = %ctx.identity, name = %message.name))]
    async fn create_space(
        &self,
        ctx: &RequestContext,
        message: CreateSpaceMessage,
    ) -> Result<SpaceRecord, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let spaces: Api<CFSpace> = Api::namespaced(client, &message.org_guid);

        let guid = new_guid();
        let mut space = CFSpace::new(
            &guid,
            CFSpaceSpec {
                display_name: message.name.clone(),
            },
        );
        space.metadata = message.metadata.into_object_meta(&guid, &message.org_guid);

        let created = ctx
            .call(spaces.create(&PostParams::default(), &space))
            .await?
            .map_err(|e| {
                ApiError::from_create(e, ResourceType::Space, || {
                    format!("Space '{}' already exists.", message.name)
                })
            })?;

        info!(
            "Created space {} ({}) in org {}",
            message.name, guid, message.org_guid
        );
        Ok(created.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn delete_space(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        delete_located::<CFSpace>(&self.namespaces, client, ctx, ResourceType::Space, guid).await?;
        info!("Deleted space {}", guid);
        Ok(())
    }
}
