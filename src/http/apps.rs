// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::{
    delete_accepted, invalid_parent, split_list, visible_space_guids, AppState, ListQuery,
    MetadataRequest, RelationshipRequest,
};
use crate::constants::DEFAULT_STACK;
use crate::error::ApiError;
use crate::identity::RequestContext;
use crate::presenter::{present_app, present_list, AppResponse, ListResponse};
use crate::repositories::{AppListFilter, CreateAppMessage};
use crate::types::app::{Lifecycle, LifecycleType};

const INVALID_SPACE: &str =
    "Invalid space. Ensure that the space exists and you have access to it.";

#[derive(Deserialize, Debug)]
pub struct CreateAppRequest {
    pub name: String,
    pub relationships: AppRelationshipsRequest,
    pub lifecycle: Option<Lifecycle>,
    pub metadata: Option<MetadataRequest>,
}

#[derive(Deserialize, Debug)]
pub struct AppRelationshipsRequest {
    pub space: RelationshipRequest,
}

/// Buildpack apps without a stack get the platform default
fn with_default_stack(lifecycle: Option<Lifecycle>) -> Lifecycle {
    let mut lifecycle = lifecycle.unwrap_or_default();
    if lifecycle.type_ == LifecycleType::Buildpack && lifecycle.data.stack.is_empty() {
        lifecycle.data.stack = DEFAULT_STACK.to_string();
    }
    lifecycle
}

pub async fn get_app(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<Json<AppResponse>, ApiError> {
    let app = state.apps.fetch_app(&ctx, &guid).await?;
    Ok(Json(present_app(&app, &state.server_url)))
}

pub async fn list_apps(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<AppResponse>>, ApiError> {
    let Query(query) = query?;
    let space_guids = visible_space_guids(&state, &ctx, split_list(&query.space_guids)).await?;

    let apps = state
        .apps
        .list_apps(
            &ctx,
            AppListFilter {
                space_guids,
                names: split_list(&query.names),
            },
        )
        .await?;
    Ok(Json(present_list(
        &apps,
        &state.server_url,
        "/v3/apps",
        present_app,
    )))
}

pub async fn create_app(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateAppRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AppResponse>), ApiError> {
    let Json(request) = payload?;
    let space_guid = request.relationships.space.data.guid;
    state
        .spaces
        .fetch_space(&ctx, &space_guid)
        .await
        .map_err(|e| invalid_parent(e, INVALID_SPACE))?;

    let app = state
        .apps
        .create_app(
            &ctx,
            CreateAppMessage {
                name: request.name,
                space_guid,
                lifecycle: with_default_stack(request.lifecycle),
                metadata: request.metadata.into(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(present_app(&app, &state.server_url))))
}

pub async fn delete_app(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.apps.delete_app(&ctx, &guid).await?;
    Ok(delete_accepted(&state, "app", &guid))
}
