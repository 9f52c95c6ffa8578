// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::{
    delete_accepted, invalid_parent, split_list, visible_org_guids, AppState, ListQuery,
    MetadataRequest, RelationshipRequest,
};
use crate::error::ApiError;
use crate::identity::RequestContext;
use crate::presenter::{present_list, present_space, ListResponse, SpaceResponse};
use crate::repositories::{CreateSpaceMessage, SpaceListFilter};

const INVALID_ORG: &str =
    "Invalid organization. Ensure the organization exists and you have access to it.";

#[derive(Deserialize, Debug)]
pub struct CreateSpaceRequest {
    pub name: String,
    pub relationships: SpaceRelationshipsRequest,
    pub metadata: Option<MetadataRequest>,
}

#[derive(Deserialize, Debug)]
pub struct SpaceRelationshipsRequest {
    pub organization: RelationshipRequest,
}

pub async fn get_space(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<Json<SpaceResponse>, ApiError> {
    let space = state.spaces.fetch_space(&ctx, &guid).await?;
    Ok(Json(present_space(&space, &state.server_url)))
}

pub async fn list_spaces(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<SpaceResponse>>, ApiError> {
    let Query(query) = query?;
    let mut org_guids = split_list(&query.organization_guids);
    if org_guids.is_empty() {
        org_guids = visible_org_guids(&state, &ctx).await?;
    }

    let spaces = state
        .spaces
        .list_spaces(
            &ctx,
            SpaceListFilter {
                org_guids,
                names: split_list(&query.names),
            },
        )
        .await?;
    Ok(Json(present_list(
        &spaces,
        &state.server_url,
        "/v3/spaces",
        present_space,
    )))
}

pub async fn create_space(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateSpaceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SpaceResponse>), ApiError> {
    let Json(request) = payload?;
    let org_guid = request.relationships.organization.data.guid;
    state
        .orgs
        .fetch_org(&ctx, &org_guid)
        .await
        .map_err(|e| invalid_parent(e, INVALID_ORG))?;

    let space = state
        .spaces
        .create_space(
            &ctx,
            CreateSpaceMessage {
                name: request.name,
                org_guid,
                metadata: request.metadata.into(),
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(present_space(&space, &state.server_url)),
    ))
}

pub async fn delete_space(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.spaces.delete_space(&ctx, &guid).await?;
    Ok(delete_accepted(&state, "space", &guid))
}
