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
use crate::types::app::{DesiredState, Lifecycle};
use crate::types::{CFApp, CFAppSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct AppRecord {
    pub guid: String,
    pub name: String,
    pub space_guid: String,
    pub state: DesiredState,
    pub lifecycle: Lifecycle,
    pub droplet_guid: Option<String>,
    pub metadata: Metadata,
}

impl From<CFApp> for AppRecord {
    fn from(app: CFApp) -> Self {
        Self {
            guid: app.name_any(),
            space_guid: app.namespace().unwrap_or_default(),
            metadata: Metadata::from_object_meta(&app.metadata),
            name: app.spec.display_name,
            state: app.spec.desired_state,
            lifecycle: app.spec.lifecycle,
            droplet_guid: app.spec.current_droplet_ref.map(|r| r.name),
        }
    }
}

/// Apps are listed within the given spaces only; no spaces means no apps.
#[derive(Debug, Clone, Default)]
pub struct AppListFilter {
    pub space_guids: Vec<String>,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAppMessage {
    pub name: String,
    pub space_guid: String,
    pub lifecycle: Lifecycle,
    pub metadata: Metadata,
}

#[async_trait]
pub trait AppRepository: Send + Sync {
    async fn fetch_app(&self, ctx: &RequestContext, guid: &str) -> Result<AppRecord, ApiError>;
    async fn list_apps(
        &self,
        ctx: &RequestContext,
        filter: AppListFilter,
    ) -> Result<Vec<AppRecord>, ApiError>;
    async fn create_app(
        &self,
        ctx: &RequestContext,
        message: CreateAppMessage,
    ) -> Result<AppRecord, ApiError>;
    async fn delete_app(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError>;
}

/// Apps stored as `CFApp` objects in their space's namespace
pub struct K8sAppRepository {
    client_builder: Arc<dyn ClientBuilder>,
    namespaces: NamespaceRetriever,
}

impl K8sAppRepository {
    pub fn new(client_builder: Arc<dyn ClientBuilder>, namespaces: NamespaceRetriever) -> Self {
        Self {
            client_builder,
            namespaces,
        }
    }
}

#[async_trait]
impl AppRepository for K8sAppRepository {
    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn fetch_app(&self, ctx: &RequestContext, guid: &str) -> Result<AppRecord, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let app: CFApp = get_located(&self.namespaces, client, ctx, ResourceType::App, guid).await?;
        Ok(app.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn list_apps(
        &self,
        ctx: &RequestContext,
        filter: AppListFilter,
    ) -> Result<Vec<AppRecord>, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let apps: Vec<CFApp> = list_in_namespaces(&client, ctx, &filter.space_guids).await?;

        Ok(apps
            .into_iter()
            .filter(|a| matches_filter(&filter.names, &a.spec.display_name))
            .map(AppRecord::from)
            .collect())
    }

    #[instrument(skip(self, ctx, message), fields(principal = %ctx.identity, name = %message.name))]
    async fn create_app(
        &self,
        ctx: &RequestContext,
        message: CreateAppMessage,
    ) -> Result<AppRecord, ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        let apps: Api<CFApp> = Api::namespaced(client, &message.space_guid);

        let guid = new_guid();
        let mut app = CFApp::new(
            &guid,
            CFAppSpec {
                display_name: message.name.clone(),
                desired_state: DesiredState::Stopped,
                lifecycle: message.lifecycle,
                current_droplet_ref: None,
            },
        );
        app.metadata = message.metadata.into_object_meta(&guid, &message.space_guid);

        let created = ctx
            .call(apps.create(&PostParams::default(), &app))
            .await?
            .map_err(|e| {
                ApiError::from_create(e, ResourceType::App, || {
                    format!("App with the name '{}' already exists.", message.name)
                })
            })?;

        info!("Created app {} ({}) in space {}", message.name, guid, message.space_guid);
        Ok(created.into())
    }

    #[instrument(skip(self, ctx), fields(principal = %ctx.identity))]
    async fn delete_app(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        let client = self.client_builder.build(&ctx.identity)?;
        delete_located::<CFApp>(&self.namespaces, client, ctx, ResourceType::App, guid).await?;
        info!("Deleted app {}", guid);
        Ok(())
    }
}
