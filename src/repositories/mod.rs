// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Identity-scoped repositories, one per resource kind.
//!
//! Each repository turns cluster objects into records and cluster failures into [`ApiError`]s.
//! Every call builds a client for the caller first, so visibility and permissions are decided
//! by the cluster's RBAC and never re-implemented here.

pub mod app;
pub mod domain;
pub mod org;
pub mod route;
pub mod space;

pub use app::{AppListFilter, AppRecord, AppRepository, CreateAppMessage, K8sAppRepository};
pub use domain::{
    CreateDomainMessage, DomainListFilter, DomainRecord, DomainRepository, K8sDomainRepository,
};
pub use org::{CreateOrgMessage, K8sOrgRepository, OrgListFilter, OrgRecord, OrgRepository};
pub use route::{
    CreateRouteMessage, DestinationRecord, K8sRouteRepository, RouteListFilter, RouteRecord,
    RouteRepository,
};
pub use space::{
    CreateSpaceMessage, K8sSpaceRepository, SpaceListFilter, SpaceRecord, SpaceRepository,
};

use std::collections::BTreeMap;
use std::fmt::Debug;

use futures::future::try_join_all;
use kube::{
    api::{DeleteParams, ListParams, ObjectMeta},
    Api, Client, Resource,
};
use serde::de::DeserializeOwned;

use crate::error::{is_list_denied, ApiError, ResourceType};
use crate::identity::RequestContext;
use crate::kubernetes::NamespaceRetriever;

/// Labels and annotations of a resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

impl Metadata {
    pub(crate) fn from_object_meta(meta: &ObjectMeta) -> Self {
        Self {
            labels: meta.labels.clone().unwrap_or_default(),
            annotations: meta.annotations.clone().unwrap_or_default(),
        }
    }

    /// Object metadata for a new object named `guid` in `namespace`
    pub(crate) fn into_object_meta(self, guid: &str, namespace: &str) -> ObjectMeta {
        ObjectMeta {
            name: Some(guid.to_string()),
            namespace: Some(namespace.to_string()),
            labels: (!self.labels.is_empty()).then_some(self.labels),
            annotations: (!self.annotations.is_empty()).then_some(self.annotations),
            ..Default::default()
        }
    }
}

/// An empty filter list matches everything
pub(crate) fn matches_filter(values: &[String], value: &str) -> bool {
    values.is_empty() || values.iter().any(|v| v == value)
}

pub(crate) fn new_guid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// List a kind across a set of namespaces as the caller.
///
/// A namespace the cluster refuses to show contributes no results.
pub(crate) async fn list_in_namespaces<K>(
    client: &Client,
    ctx: &RequestContext,
    namespaces: &[String],
) -> Result<Vec<K>, ApiError>
where
    K: Resource<DynamicType = (), Scope = kube::core::NamespaceResourceScope>
        + Clone
        + DeserializeOwned
        + Debug,
{
    let lists = try_join_all(namespaces.iter().map(|namespace| async move {
        let api: Api<K> = Api::namespaced(client.clone(), namespace);
        match ctx.call(api.list(&ListParams::default())).await? {
            Ok(list) => Ok(list.items),
            Err(e) if is_list_denied(&e) => Ok(Vec::new()),
            Err(e) => Err(ApiError::unknown(e)),
        }
    }))
    .await?;

    Ok(lists.into_iter().flatten().collect())
}

/// Read a GUID-addressed object as the caller, wherever it lives
pub(crate) async fn get_located<K>(
    retriever: &NamespaceRetriever,
    client: Client,
    ctx: &RequestContext,
    resource_type: ResourceType,
    guid: &str,
) -> Result<K, ApiError>
where
    K: Resource<DynamicType = (), Scope = kube::core::NamespaceResourceScope>
        + Clone
        + DeserializeOwned
        + Debug,
{
    let namespace = retriever
        .namespace_for::<K>(ctx, resource_type, guid)
        .await?;
    let api: Api<K> = Api::namespaced(client, &namespace);
    ctx.call(api.get(guid))
        .await?
        .map_err(|e| ApiError::from_read(e, resource_type))
}

/// Delete a GUID-addressed object as the caller, wherever it lives.
///
/// The object is read as the caller first, so a caller who cannot see it gets `NotFound`
/// whether or not it exists. `Forbidden` is left for callers who can read but not delete.
pub(crate) async fn delete_located<K>(
    retriever: &NamespaceRetriever,
    client: Client,
    ctx: &RequestContext,
    resource_type: ResourceType,
    guid: &str,
) -> Result<(), ApiError>
where
    K: Resource<DynamicType = (), Scope = kube::core::NamespaceResourceScope>
        + Clone
        + DeserializeOwned
        + Debug,
{
    let namespace = retriever
        .namespace_for::<K>(ctx, resource_type, guid)
        .await?;
    let api: Api<K> = Api::namespaced(client, &namespace);
    ctx.call(api.get(guid))
        .await?
        .map_err(|e| ApiError::from_read(e, resource_type))?;
    ctx.call(api.delete(guid, &DeleteParams::default()))
        .await?
        .map_err(|e| ApiError::from_write(e, resource_type))?;
    Ok(())
}
