// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use async_trait::async_trait;
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    Api, ResourceExt,
};
use tracing::{info, instrument};

use super::{matches_filter, new_guid, Metadata};
use crate::error::{is_list_denied, ApiError, ResourceType};
use crate::identity::RequestContext;
use crate::kubernetes::ClientBuilder;
use crate::types::{CFDomain, CFDomainSpec};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct DomainRecord {
    pub guid: String,
    pub name: String,
    pub metadata: Metadata,
}

impl DomainRecord {
    /// A reference carrying only the GUID, to be replaced by the fetched domain
    pub(crate) fn reference(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            ..Default::default()
        }
    }
}

impl From<CFDomain> for DomainRecord {
    fn from(domain: CFDomain) -> Self {
        Self {
            guid: domain.name_any(),
            metadata: Metadata::from_object_meta(&domain.metadata),
            name: domain.spec.name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DomainListFilter {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateDomainMessage {
    pub name: String,
    pub metadata: Metadata,
}

#[async_trait]
pub trait DomainRepository: Send + Sync {
    async fn fetch_domain(&self, ctx: &RequestContext, guid: &str)
        -> Result<DomainRecord, ApiError>;
    async fn list_domains(
        &self,
        ctx: &RequestContext,
        filter: DomainListFilter,
    ) -> Result<Vec<DomainRecord>, ApiError>;
    async fn create_domain(
        &self,
        ctx: &RequestContext,
        message: CreateDomainMessage,
    ) -> Result<DomainRecord, ApiError>;
    async fn delete_domain(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError>;
}

/// Domains stored as `CFDomain` objects in the root namespace
pub struct K8sDomainRepository {
    client_builder: Arc<dyn ClientBuilder>,
    root_namespace: String,
}

impl K8sDomainRepository {
    pub fn new(client_builder: Arc<dyn ClientBuilder>, root_namespace: impl Into<String>) -> Self {
        Self {
            client_builder,
            root_namespace: root_namespace.into(),
        }
    }

    fn api(&self, ctx: &RequestContext) -> Result<Api<CFDomain>, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        Ok(Api::namespaced(client, &self.root_namespace))
    }
}

#[async_trait]
impl DomainRepository for K8sDomainRepository {
    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn fetch_domain(
        &self,
        ctx: &RequestContext,
        guid: &str,
    ) -> Result<DomainRecord, ApiError> {
        let domains = self.api(ctx)?;

        let domain = ctx
            .call(domains.get(guid))
            .await?
            .map_err(|e| ApiError::from_read(e, ResourceType::Domain))?;

        Ok(domain.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn list_domains(
        &self,
        ctx: &RequestContext,
        filter: DomainListFilter,
    ) -> Result<Vec<DomainRecord>, ApiError> {
        let domains = self.api(ctx)?;

        let items = match ctx.call(domains.list(&ListParams::default())).await? {
            Ok(list) => list.items,
            Err(e) if is_list_denied(&e) => Vec::new(),
            Err(e) => return Err(ApiError::unknown(e)),
        };

        Ok(items
            .into_iter()
            .filter(|d| matches_filter(&filter.names, &d.spec.name))
            .map(DomainRecord::from)
            .collect())
    }

    #[instrument(skip(self, ctx, message), fields(principal = %ctx.identity, name = %message.name))]
    async fn create_domain(
        &self,
        ctx: &RequestContext,
        message: CreateDomainMessage,
    ) -> Result<DomainRecord, ApiError> {
        let domains = self.api(ctx)?;

        let guid = new_guid();
        let mut domain = CFDomain::new(
            &guid,
            CFDomainSpec {
                name: message.name.clone(),
            },
        );
        domain.metadata = message.metadata.into_object_meta(&guid, &self.root_namespace);

        let created = ctx
            .call(domains.create(&PostParams::default(), &domain))
            .await?
            .map_err(|e| {
                ApiError::from_create(e, ResourceType::Domain, || {
                    format!("The domain name \"{}\" is already in use", message.name)
                })
            })?;

        info!("Created domain {} ({})", message.name, guid);
        Ok(created.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn delete_domain(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        let domains = self.api(ctx)?;

        ctx.call(domains.delete(guid, &DeleteParams::default()))
            .await?
            .map_err(|e| ApiError::from_write(e, ResourceType::Domain))?;

        info!("Deleted domain {}", guid);
        Ok(())
    }
}
