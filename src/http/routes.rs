// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::collections::HashMap;

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
use crate::error::{ApiError, ResourceType};
use crate::identity::RequestContext;
use crate::presenter::{
    present_destinations, present_list, present_route, DestinationsResponse, ListResponse,
    RouteResponse,
};
use crate::repositories::{CreateRouteMessage, DomainListFilter, RouteListFilter, RouteRecord};

const INVALID_SPACE: &str =
    "Invalid space. Ensure that the space exists and you have access to it.";
const INVALID_DOMAIN: &str =
    "Invalid domain. Ensure that the domain exists and you have access to it.";

#[derive(Deserialize, Debug)]
pub struct CreateRouteRequest {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub path: String,
    pub relationships: RouteRelationshipsRequest,
    pub metadata: Option<MetadataRequest>,
}

#[derive(Deserialize, Debug)]
pub struct RouteRelationshipsRequest {
    pub space: RelationshipRequest,
    pub domain: RelationshipRequest,
}

/// A route whose domain cannot be read is a server fault, not a missing route.
pub async fn get_route(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<Json<RouteResponse>, ApiError> {
    let route = state.routes.fetch_route(&ctx, &guid).await?;
    let domain = state
        .domains
        .fetch_domain(&ctx, &route.domain_ref.guid)
        .await
        .map_err(ApiError::into_unknown)?;

    Ok(Json(present_route(
        &route.with_domain(domain),
        &state.server_url,
    )))
}

pub async fn get_destinations(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<Json<DestinationsResponse>, ApiError> {
    let route = state.routes.fetch_route(&ctx, &guid).await?;
    Ok(Json(present_destinations(&route, &state.server_url)))
}

pub async fn list_routes(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<RouteResponse>>, ApiError> {
    let Query(query) = query?;
    let space_guids = visible_space_guids(&state, &ctx, split_list(&query.space_guids)).await?;

    let routes = state
        .routes
        .list_routes(
            &ctx,
            RouteListFilter {
                space_guids,
                domain_guids: split_list(&query.domain_guids),
                hosts: split_list(&query.hosts),
                paths: split_list(&query.paths),
            },
        )
        .await?;
    let routes = attach_domains(&state, &ctx, routes).await?;

    Ok(Json(present_list(
        &routes,
        &state.server_url,
        "/v3/routes",
        present_route,
    )))
}

async fn attach_domains(
    state: &AppState,
    ctx: &RequestContext,
    routes: Vec<RouteRecord>,
) -> Result<Vec<RouteRecord>, ApiError> {
    if routes.is_empty() {
        return Ok(routes);
    }

    let domains: HashMap<String, _> = state
        .domains
        .list_domains(ctx, DomainListFilter::default())
        .await?
        .into_iter()
        .map(|d| (d.guid.clone(), d))
        .collect();

    routes
        .into_iter()
        .map(|route| -> Result<RouteRecord, ApiError> {
            let domain = domains
                .get(&route.domain_ref.guid)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(ResourceType::Domain).into_unknown())?;
            Ok(route.with_domain(domain))
        })
        .collect()
}

pub async fn create_route(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateRouteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RouteResponse>), ApiError> {
    let Json(request) = payload?;
    let space_guid = request.relationships.space.data.guid;
    let domain_guid = request.relationships.domain.data.guid;

    state
        .spaces
        .fetch_space(&ctx, &space_guid)
        .await
        .map_err(|e| invalid_parent(e, INVALID_SPACE))?;
    let domain = state
        .domains
        .fetch_domain(&ctx, &domain_guid)
        .await
        .map_err(|e| invalid_parent(e, INVALID_DOMAIN))?;

    let route = state
        .routes
        .create_route(
            &ctx,
            CreateRouteMessage {
                host: request.host,
                path: request.path,
                space_guid,
                domain_guid,
                metadata: request.metadata.into(),
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(present_route(&route.with_domain(domain), &state.server_url)),
    ))
}

pub async fn delete_route(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(guid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.routes.delete_route(&ctx, &guid).await?;
    Ok(delete_accepted(&state, "route", &guid))
}
