// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface: thin handlers wiring the request context, repositories and presenters.

pub mod apps;
pub mod domains;
pub mod errors;
pub mod orgs;
pub mod routes;
pub mod spaces;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::constants::headers::{REMOTE_GROUP, REMOTE_USER};
use crate::error::ApiError;
use crate::identity::{Identity, RequestContext};
use crate::presenter::link;
use crate::repositories::{
    AppRepository, DomainRepository, Metadata, OrgListFilter, OrgRepository, RouteRepository,
    SpaceListFilter, SpaceRepository,
};

/// Shared state for handlers
#[derive(Clone)]
pub struct AppState {
    /// Base of every hyperlink in responses
    pub server_url: Url,
    pub request_timeout: Duration,
    pub orgs: Arc<dyn OrgRepository>,
    pub spaces: Arc<dyn SpaceRepository>,
    pub domains: Arc<dyn DomainRepository>,
    pub routes: Arc<dyn RouteRepository>,
    pub apps: Arc<dyn AppRepository>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v3/organizations",
            get(orgs::list_orgs).post(orgs::create_org),
        )
        .route(
            "/v3/organizations/{guid}",
            get(orgs::get_org).delete(orgs::delete_org),
        )
        .route("/v3/spaces", get(spaces::list_spaces).post(spaces::create_space))
        .route(
            "/v3/spaces/{guid}",
            get(spaces::get_space).delete(spaces::delete_space),
        )
        .route(
            "/v3/domains",
            get(domains::list_domains).post(domains::create_domain),
        )
        .route(
            "/v3/domains/{guid}",
            get(domains::get_domain).delete(domains::delete_domain),
        )
        .route("/v3/routes", get(routes::list_routes).post(routes::create_route))
        .route(
            "/v3/routes/{guid}",
            get(routes::get_route).delete(routes::delete_route),
        )
        .route(
            "/v3/routes/{guid}/destinations",
            get(routes::get_destinations),
        )
        .route("/v3/apps", get(apps::list_apps).post(apps::create_app))
        .route("/v3/apps/{guid}", get(apps::get_app).delete(apps::delete_app))
        .with_state(state)
}

/// The caller is whoever the front proxy authenticated; no user header means no identity.
impl FromRequestParts<AppState> for RequestContext {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(REMOTE_USER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ApiError::NotAuthenticated)?;

        let groups = parts
            .headers
            .get_all(REMOTE_GROUP)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        let identity = Identity::new(user, groups);
        debug!(principal = %identity, "Authenticated request");
        Ok(RequestContext::new(identity, state.request_timeout))
    }
}

/// Query parameters shared by list endpoints; each endpoint reads the filters it supports.
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub names: Option<String>,
    pub organization_guids: Option<String>,
    pub space_guids: Option<String>,
    pub domain_guids: Option<String>,
    pub hosts: Option<String>,
    pub paths: Option<String>,
}

/// Split a comma separated filter value; an absent value is no filter.
pub(crate) fn split_list(value: &Option<String>) -> Vec<String> {
    value
        .as_deref()
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Deserialize, Debug, Default)]
pub struct MetadataRequest {
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

impl From<Option<MetadataRequest>> for Metadata {
    fn from(request: Option<MetadataRequest>) -> Self {
        let request = request.unwrap_or_default();
        Metadata {
            labels: request.labels,
            annotations: request.annotations,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RelationshipRequest {
    pub data: RelationshipDataRequest,
}

#[derive(Deserialize, Debug)]
pub struct RelationshipDataRequest {
    pub guid: String,
}

/// 202 pointing at the job that tracks an asynchronous delete
pub(crate) fn delete_accepted(state: &AppState, kind: &str, guid: &str) -> impl IntoResponse {
    let location = link(&state.server_url, &format!("/v3/jobs/{}.delete~{}", kind, guid));
    (StatusCode::ACCEPTED, [(header::LOCATION, location.href)])
}

/// A parent that cannot be found is a problem with the request, not a missing resource.
pub(crate) fn invalid_parent(err: ApiError, detail: &str) -> ApiError {
    match err {
        ApiError::NotFound(_) => ApiError::UnprocessableEntity(detail.to_string()),
        other => other,
    }
}

/// Orgs the caller can see into
pub(crate) async fn visible_org_guids(
    state: &AppState,
    ctx: &RequestContext,
) -> Result<Vec<String>, ApiError> {
    let orgs = state.orgs.list_orgs(ctx, OrgListFilter::default()).await?;
    Ok(orgs.into_iter().map(|o| o.guid).collect())
}

/// Spaces the caller can see, optionally narrowed to the given ones
pub(crate) async fn visible_space_guids(
    state: &AppState,
    ctx: &RequestContext,
    requested: Vec<String>,
) -> Result<Vec<String>, ApiError> {
    if !requested.is_empty() {
        return Ok(requested);
    }
    let org_guids = visible_org_guids(state, ctx).await?;
    let spaces = state
        .spaces
        .list_spaces(
            ctx,
            SpaceListFilter {
                org_guids,
                names: Vec::new(),
            },
        )
        .await?;
    Ok(spaces.into_iter().map(|s| s.guid).collect())
}
