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
use crate::presenter::{present_domain, present_list, DomainResponse, ListResponse};
use crate::repositories::{CreateDomainMessage, DomainListFilter};

#[derive(Deserialize, Debug)]
pub struct CreateDomainRequest {
    pub name: String,
    pub metadata: Option<MetadataRequest>,
}

pub async fn get_domain(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<Json<DomainResponse>, ApiError> {
    let domain = state.domains.fetch_domain(&ctx, &guid).await?;
    Ok(Json(present_domain(&domain, &state.server_url)))
}

pub async fn list_domains(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<DomainResponse>>, ApiError> {
    let Query(query) = query?;
    let domains = state
        .domains
        .list_domains(
            &ctx,
            DomainListFilter {
                names: split_list(&query.names),
            },
        )
        .await?;
    Ok(Json(present_list(
        &domains,
        &state.server_url,
        "/v3/domains",
        present_domain,
    )))
}

pub async fn create_domain(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateDomainRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DomainResponse>), ApiError> {
    let Json(request) = payload?;
    let domain = state
        .domains
        .create_domain(
            &ctx,
            CreateDomainMessage {
                name: request.name,
                metadata: request.metadata.into(),
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(present_domain(&domain, &state.server_url)),
    ))
}

pub async fn delete_domain(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.domains.delete_domain(&ctx, &guid).await?;
    Ok(delete_accepted(&state, "domain", &guid))
}
