// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace resolution for GUID-addressed resources

use crate::error::{ApiError, ResourceType};
use crate::identity::RequestContext;
use kube::{api::ListParams, Api, Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Finds the namespace that holds a resource with a given GUID.
///
/// Only object metadata is read, so the lookup reveals where an object lives but never its
/// contents; the subsequent read or write goes through the caller's scoped client and is
/// subject to RBAC as usual. The answer must never reach the caller directly.
#[derive(Clone)]
pub struct NamespaceRetriever {
    client: Client,
}

impl NamespaceRetriever {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Bounded by the request deadline like any other cluster call.
    #[instrument(skip(self, ctx), fields(kind = %resource_type))]
    pub async fn namespace_for<K>(
        &self,
        ctx: &RequestContext,
        resource_type: ResourceType,
        guid: &str,
    ) -> Result<String, ApiError>
    where
        K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
    {
        let api: Api<K> = Api::all(self.client.clone());
        let lp = ListParams::default().fields(&format!("metadata.name={}", guid));

        let list = ctx
            .call(api.list_metadata(&lp))
            .await?
            .map_err(|e| ApiError::from_read(e, resource_type))?;

        let mut namespaces = list.items.iter().filter_map(|m| m.namespace());
        match (namespaces.next(), namespaces.next()) {
            (Some(namespace), None) => {
                debug!("Resolved {} to namespace {}", guid, namespace);
                Ok(namespace)
            }
            (None, _) => Err(ApiError::NotFound(resource_type)),
            (Some(_), Some(_)) => Err(ApiError::unknown(format!(
                "{} {} found in more than one namespace",
                resource_type, guid
            ))),
        }
    }
}
