// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::{delete_accepted, split_list, AppState, ListQuery, MetadataRequest};
use crate::error::ApiError;
use crate::identity::RequestContext;
use crate::presenter::{present_list, present_org, ListResponse, OrgResponse};
use crate::repositories::{CreateOrgMessage, OrgListFilter};

#[derive(Deserialize, Debug)]
pub struct CreateOrgRequest {
    pub name: String,
    #[serde(default)]
    pub suspended: bool,
    pub metadata: Option<MetadataRequest>,
}

pub async fn get_org(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<Json<OrgResponse>, ApiError> {
    let org = state.orgs.fetch_org(&ctx, &guid).await?;
    Ok(Json(present_org(&org, &state.server_url)))
}

pub async fn list_orgs(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<OrgResponse>>, ApiError> {
    let Query(query) = query?;
    let orgs = state
        .orgs
        .list_orgs(
            &ctx,
            OrgListFilter {
                names: split_list(&query.names),
            },
        )
        .await?;
    Ok(Json(present_list(
        &orgs,
        &state.server_url,
        "/v3/organizations",
        present_org,
    )))
}

pub async fn create_org(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateOrgRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrgResponse>), ApiError> {
    let Json(request) = payload?;
    let org = state
        .orgs
        .create_org(
            &ctx,
            CreateOrgMessage {
                name: request.name,
                suspended: request.suspended,
                metadata: request.metadata.into(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(present_org(&org, &state.server_url))))
}

pub async fn delete_org(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.orgs.delete_org(&ctx, &guid).await?;
    Ok(delete_accepted(&state, "organization", &guid))
}
