// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use k8s_openapi::api::authorization::v1::{
    ResourceAttributes, SelfSubjectAccessReview, SelfSubjectAccessReviewSpec,
};
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    Api, ResourceExt,
};
use tracing::{debug, info, instrument};

use super::{matches_filter, new_guid, Metadata};
use crate::constants::{org_visibility, API_GROUP};
use crate::error::{is_list_denied, ApiError, ResourceType};
use crate::identity::RequestContext;
use crate::kubernetes::ClientBuilder;
use crate::types::{CFOrg, CFOrgSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct OrgRecord {
    pub guid: String,
    pub name: String,
    pub suspended: bool,
    pub metadata: Metadata,
}

impl From<CFOrg> for OrgRecord {
    fn from(org: CFOrg) -> Self {
        Self {
            guid: org.name_any(),
            metadata: Metadata::from_object_meta(&org.metadata),
            name: org.spec.display_name,
            suspended: org.spec.suspended,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrgListFilter {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateOrgMessage {
    pub name: String,
    pub suspended: bool,
    pub metadata: Metadata,
}

#[async_trait]
pub trait OrgRepository: Send + Sync {
    async fn fetch_org(&self, ctx: &RequestContext, guid: &str) -> Result<OrgRecord, ApiError>;
    async fn list_orgs(
        &self,
        ctx: &RequestContext,
        filter: OrgListFilter,
    ) -> Result<Vec<OrgRecord>, ApiError>;
    async fn create_org(
        &self,
        ctx: &RequestContext,
        message: CreateOrgMessage,
    ) -> Result<OrgRecord, ApiError>;
    async fn delete_org(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError>;
}

/// Orgs stored as `CFOrg` objects in the root namespace
pub struct K8sOrgRepository {
    client_builder: Arc<dyn ClientBuilder>,
    root_namespace: String,
}

impl K8sOrgRepository {
    pub fn new(client_builder: Arc<dyn ClientBuilder>, root_namespace: impl Into<String>) -> Self {
        Self {
            client_builder,
            root_namespace: root_namespace.into(),
        }
    }
}

#[async_trait]
impl OrgRepository for K8sOrgRepository {
    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn fetch_org(&self, ctx: &RequestContext, guid: &str) -> Result<OrgRecord, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let orgs: Api<CFOrg> = Api::namespaced(client, &self.root_namespace);

        let org = ctx
            .call(orgs.get(guid))
            .await?
            .map_err(|e| ApiError::from_read(e, ResourceType::Org))?;

        Ok(org.into())
    }

    /// Orgs are listed from the root namespace, then narrowed to the ones the cluster says the
    /// caller may look into.
    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn list_orgs(
        &self,
        ctx: &RequestContext,
        filter: OrgListFilter,
    ) -> Result<Vec<OrgRecord>, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let orgs: Api<CFOrg> = Api::namespaced(client.clone(), &self.root_namespace);

        let candidates: Vec<CFOrg> = match ctx.call(orgs.list(&ListParams::default())).await? {
            Ok(list) => list.items,
            Err(e) if is_list_denied(&e) => {
                debug!("Caller may not list orgs");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ApiError::unknown(e)),
        };

        let candidates: Vec<CFOrg> = candidates
            .into_iter()
            .filter(|org| matches_filter(&filter.names, &org.spec.display_name))
            .collect();

        let reviews: Api<SelfSubjectAccessReview> = Api::all(client);
        let visible = try_join_all(
            candidates
                .iter()
                .map(|org| can_see_into(&reviews, ctx, org.name_any())),
        )
        .await?;

        Ok(candidates
            .into_iter()
            .zip(visible)
            .filter_map(|(org, visible)| visible.then(|| org.into()))
            .collect())
    }

    #[instrument(skip(self, ctx, message), fields(principal = %ctx.identity, name = %message.name))]
    async fn create_org(
        &self,
        ctx: &RequestContext,
        message: CreateOrgMessage,
    ) -> Result<OrgRecord, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let orgs: Api<CFOrg> = Api::namespaced(client, &self.root_namespace);

        let guid = new_guid();
        let mut org = CFOrg::new(
            &guid,
            CFOrgSpec {
                display_name: message.name.clone(),
                suspended: message.suspended,
            },
        );
        org.metadata = message.metadata.into_object_meta(&guid, &self.root_namespace);

        let created = ctx
            .call(orgs.create(&PostParams::default(), &org))
            .await?
            .map_err(|e| {
                ApiError::from_create(e, ResourceType::Org, || {
                    format!("Organization '{}' already exists.", message.name)
                })
            })?;

        info!("Created org {} ({})", message.name, guid);
        Ok(created.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn delete_org(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let orgs: Api<CFOrg> = Api::namespaced(client, &self.root_namespace);

        ctx.call(orgs.delete(guid, &DeleteParams::default()))
            .await?
            .map_err(|e| ApiError::from_write(e, ResourceType::Org))?;

        info!("Deleted org {}", guid);
        Ok(())
    }
}

/// Ask the cluster whether the caller may look inside an org's namespace
async fn can_see_into(
    reviews: &Api<SelfSubjectAccessReview>,
    ctx: &RequestContext,
    org_guid: String,
) -> Result<bool, ApiError> {
    let review = SelfSubjectAccessReview {
        spec: SelfSubjectAccessReviewSpec {
            resource_attributes: Some(ResourceAttributes {
                group: Some(API_GROUP.to_string()),
                resource: Some(org_visibility::RESOURCE.to_string()),
                verb: Some(org_visibility::VERB.to_string()),
                namespace: Some(org_guid),
                ..Default::default()
            }),
            ..Default::default()
        },
        ..Default::default()
    };

    let result = ctx
        .call(reviews.create(&PostParams::default(), &review))
        .await?
        .map_err(ApiError::unknown)?;

    Ok(result.status.is_some_and(|s| s.allowed))
}
