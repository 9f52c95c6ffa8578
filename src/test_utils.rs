// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock cluster API, recording repository fakes and a recording image pusher.

use async_trait::async_trait;
use futures::future::join_all;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc;
use tower::{Service, ServiceExt};
use url::Url;

use crate::constants::headers::{REMOTE_GROUP, REMOTE_USER};
use crate::error::{ApiError, ClientBuildError};
use crate::http::{router, AppState};
use crate::identity::{Identity, RequestContext};
use crate::image::{Image, ImagePusher, PushError, PushOptions};
use crate::kubernetes::ClientBuilder;
use crate::repositories::*;
use crate::types::app::{DesiredState, Lifecycle};

pub const ORGS_PATH: &str = "/apis/korifi.cloudfoundry.org/v1alpha1/namespaces/cf/cforgs";
pub const DOMAINS_PATH: &str = "/apis/korifi.cloudfoundry.org/v1alpha1/namespaces/cf/cfdomains";
pub const REVIEWS_PATH: &str = "/apis/authorization.k8s.io/v1/selfsubjectaccessreviews";

/// A request as seen by the mock cluster
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync>;

/// A mock HTTP service standing in for the cluster API.
///
/// Responses are looked up by method and path: exact match first, then the longest
/// registered prefix. Unmatched requests get a 404 `Status`.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), Responder>>>,
    stalled: Arc<Mutex<Vec<(String, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            stalled: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on_fixed("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on_fixed("POST", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on_fixed("DELETE", path, status, body)
    }

    /// Respond with a function of the incoming request
    pub fn on_request(
        self,
        method: &str,
        path: &str,
        responder: impl Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
    ) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), Arc::new(responder));
        self
    }

    /// Accept requests to exactly this method and path but never answer them
    pub fn stall(self, method: &str, path: &str) -> Self {
        self.stalled
            .lock()
            .unwrap()
            .push((method.to_string(), path.to_string()));
        self
    }

    fn is_stalled(&self, method: &str, path: &str) -> bool {
        self.stalled
            .lock()
            .unwrap()
            .iter()
            .any(|(m, p)| m == method && p == path)
    }

    fn on_fixed(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        let body = body.to_string();
        self.on_request(method, path, move |_| (status, body.clone()))
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn find_responder(&self, method: &str, path: &str) -> Option<Responder> {
        let responses = self.responses.lock().unwrap();

        if let Some(responder) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(responder.clone());
        }

        responses
            .iter()
            .filter(|((m, p), _)| m == method && path.starts_with(p.as_str()))
            .max_by_key(|((_, p), _)| p.len())
            .map(|(_, responder)| responder.clone())
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let this = self.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body.collect().await?.to_bytes().to_vec();
            let recorded = RecordedRequest {
                method: parts.method.to_string(),
                path: parts.uri.path().to_string(),
                query: parts.uri.query().unwrap_or_default().to_string(),
                body,
            };
            this.requests.lock().unwrap().push(recorded.clone());

            if this.is_stalled(&recorded.method, &recorded.path) {
                futures::future::pending::<()>().await;
            }

            let (status, body) = match this.find_responder(&recorded.method, &recorded.path) {
                Some(responder) => responder(&recorded),
                None => (404, status_json(404, "NotFound", "not found")),
            };

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Path of a namespaced platform resource collection
pub fn namespaced_path(namespace: &str, plural: &str) -> String {
    format!(
        "/apis/korifi.cloudfoundry.org/v1alpha1/namespaces/{}/{}",
        namespace, plural
    )
}

/// Echo the posted object back as created
pub fn echo_created(req: &RecordedRequest) -> (u16, String) {
    (201, req.json().to_string())
}

/// Answer access reviews: allowed only for the given namespaces
pub fn access_review_responder(
    allowed_namespaces: &[&str],
) -> impl Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static {
    let allowed: Vec<String> = allowed_namespaces.iter().map(|s| s.to_string()).collect();
    move |req| {
        let mut review = req.json();
        let namespace = review["spec"]["resourceAttributes"]["namespace"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        review["status"] = json!({ "allowed": allowed.contains(&namespace) });
        (201, review.to_string())
    }
}

/// A `Status` failure body
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

pub fn list_json(kind: &str, items: Vec<Value>) -> String {
    json!({
        "apiVersion": "korifi.cloudfoundry.org/v1alpha1",
        "kind": kind,
        "metadata": {"resourceVersion": "1"},
        "items": items
    })
    .to_string()
}

/// A metadata-only list of (name, namespace) pairs
pub fn metadata_list_json(objects: &[(&str, &str)]) -> String {
    let items: Vec<Value> = objects
        .iter()
        .map(|(name, namespace)| {
            json!({
                "apiVersion": "meta.k8s.io/v1",
                "kind": "PartialObjectMetadata",
                "metadata": {"name": name, "namespace": namespace}
            })
        })
        .collect();

    json!({
        "apiVersion": "meta.k8s.io/v1",
        "kind": "PartialObjectMetadataList",
        "metadata": {},
        "items": items
    })
    .to_string()
}

fn resource_json(kind: &str, name: &str, namespace: &str, spec: Value) -> Value {
    json!({
        "apiVersion": "korifi.cloudfoundry.org/v1alpha1",
        "kind": kind,
        "metadata": {"name": name, "namespace": namespace},
        "spec": spec
    })
}

pub fn org_json(guid: &str, name: &str) -> Value {
    resource_json("CFOrg", guid, "cf", json!({"displayName": name}))
}

pub fn domain_json(guid: &str, name: &str) -> Value {
    resource_json("CFDomain", guid, "cf", json!({"name": name}))
}

pub fn space_json(guid: &str, org_guid: &str, name: &str) -> Value {
    resource_json("CFSpace", guid, org_guid, json!({"displayName": name}))
}

pub fn route_json(guid: &str, space_guid: &str, host: &str, domain_guid: &str) -> Value {
    resource_json(
        "CFRoute",
        guid,
        space_guid,
        json!({
            "host": host,
            "path": "",
            "protocol": "http",
            "domainRef": {"name": domain_guid, "namespace": "cf"}
        }),
    )
}

pub fn app_json(guid: &str, space_guid: &str, name: &str) -> Value {
    resource_json(
        "CFApp",
        guid,
        space_guid,
        json!({
            "displayName": name,
            "desiredState": "STOPPED",
            "lifecycle": {"type": "buildpack", "data": {"stack": "cflinuxfs3"}}
        }),
    )
}

/// Hands out clients talking to a [`MockService`] and records who asked for them
pub struct MockClientBuilder {
    service: MockService,
    fail: bool,
    identities: Mutex<Vec<Identity>>,
}

impl MockClientBuilder {
    pub fn new(service: MockService) -> Self {
        Self {
            service,
            fail: false,
            identities: Mutex::new(Vec::new()),
        }
    }

    /// A builder whose every build fails as if the connection could not be set up
    pub fn failing(service: MockService) -> Self {
        Self {
            fail: true,
            ..Self::new(service)
        }
    }

    pub fn identities(&self) -> Vec<Identity> {
        self.identities.lock().unwrap().clone()
    }
}

impl ClientBuilder for MockClientBuilder {
    fn build(&self, identity: &Identity) -> Result<Client, ClientBuildError> {
        self.identities.lock().unwrap().push(identity.clone());
        if self.fail {
            return Err(ClientBuildError(kube::Error::Service(
                "connection refused".into(),
            )));
        }
        Ok(self.service.clone().into_client())
    }
}

/// Create orgs in parallel: one task per org, all joined before results are inspected,
/// failures collected through a bounded channel.
pub async fn create_orgs_concurrently(
    repo: Arc<dyn OrgRepository>,
    ctx: RequestContext,
    names: &[&str],
) -> (Vec<OrgRecord>, Vec<ApiError>) {
    let (err_tx, mut err_rx) = mpsc::channel(names.len().max(1));

    let tasks: Vec<_> = names
        .iter()
        .map(|name| {
            let repo = repo.clone();
            let ctx = ctx.clone();
            let err_tx = err_tx.clone();
            let message = CreateOrgMessage {
                name: name.to_string(),
                ..Default::default()
            };
            tokio::spawn(async move {
                match repo.create_org(&ctx, message).await {
                    Ok(org) => Some(org),
                    Err(e) => {
                        let _ = err_tx.send(e).await;
                        None
                    }
                }
            })
        })
        .collect();
    drop(err_tx);

    let orgs = join_all(tasks)
        .await
        .into_iter()
        .filter_map(|joined| joined.ok().flatten())
        .collect();

    let mut errors = Vec::new();
    while let Some(e) = err_rx.recv().await {
        errors.push(e);
    }

    (orgs, errors)
}

type StubFn<A, T> = Box<dyn Fn(&A) -> Result<T, ApiError> + Send + Sync>;

/// One faked operation: records every call with its caller and returns a configured result
pub struct Stub<A, T> {
    calls: Mutex<Vec<(Identity, A)>>,
    returns: Mutex<StubFn<A, T>>,
}

impl<A: Clone, T> Stub<A, T> {
    pub fn returns(&self, f: impl Fn(&A) -> Result<T, ApiError> + Send + Sync + 'static) {
        *self.returns.lock().unwrap() = Box::new(f);
    }

    pub fn calls(&self) -> Vec<(Identity, A)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn call(&self, ctx: &RequestContext, args: A) -> Result<T, ApiError> {
        let returns = self.returns.lock().unwrap();
        let result = (*returns)(&args);
        drop(returns);
        self.calls.lock().unwrap().push((ctx.identity.clone(), args));
        result
    }
}

impl<A, T> Default for Stub<A, T> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            returns: Mutex::new(Box::new(|_: &A| Err(ApiError::unknown("stub not configured")))),
        }
    }
}

#[derive(Default)]
pub struct FakeOrgRepository {
    pub fetch_org: Stub<String, OrgRecord>,
    pub list_orgs: Stub<OrgListFilter, Vec<OrgRecord>>,
    pub create_org: Stub<CreateOrgMessage, OrgRecord>,
    pub delete_org: Stub<String, ()>,
}

#[async_trait]
impl OrgRepository for FakeOrgRepository {
    async fn fetch_org(&self, ctx: &RequestContext, guid: &str) -> Result<OrgRecord, ApiError> {
        self.fetch_org.call(ctx, guid.to_string())
    }
    async fn list_orgs(
        &self,
        ctx: &RequestContext,
        filter: OrgListFilter,
    ) -> Result<Vec<OrgRecord>, ApiError> {
        self.list_orgs.call(ctx, filter)
    }
    async fn create_org(
        &self,
        ctx: &RequestContext,
        message: CreateOrgMessage,
    ) -> Result<OrgRecord, ApiError> {
        self.create_org.call(ctx, message)
    }
    async fn delete_org(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        self.delete_org.call(ctx, guid.to_string())
    }
}

#[derive(Default)]
pub struct FakeSpaceRepository {
    pub fetch_space: Stub<String, SpaceRecord>,
    pub list_spaces: Stub<SpaceListFilter, Vec<SpaceRecord>>,
    pub create_space: Stub<CreateSpaceMessage, SpaceRecord>,
    pub delete_space: Stub<String, ()>,
}

#[async_trait]
impl SpaceRepository for FakeSpaceRepository {
    async fn fetch_space(&self, ctx: &RequestContext, guid: &str) -> Result<SpaceRecord, ApiError> {
        self.fetch_space.call(ctx, guid.to_string())
    }
    async fn list_spaces(
        &self,
        ctx: &RequestContext,
        filter: SpaceListFilter,
    ) -> Result<Vec<SpaceRecord>, ApiError> {
        self.list_spaces.call(ctx, filter)
    }
    async fn create_space(
        &self,
        ctx: &RequestContext,
        message: CreateSpaceMessage,
    ) -> Result<SpaceRecord, ApiError> {
        self.create_space.call(ctx, message)
    }
    async fn delete_space(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        self.delete_space.call(ctx, guid.to_string())
    }
}

#[derive(Default)]
pub struct FakeDomainRepository {
    pub fetch_domain: Stub<String, DomainRecord>,
    pub list_domains: Stub<DomainListFilter, Vec<DomainRecord>>,
    pub create_domain: Stub<CreateDomainMessage, DomainRecord>,
    pub delete_domain: Stub<String, ()>,
}

#[async_trait]
impl DomainRepository for FakeDomainRepository {
    async fn fetch_domain(
        &self,
        ctx: &RequestContext,
        guid: &str,
    ) -> Result<DomainRecord, ApiError> {
        self.fetch_domain.call(ctx, guid.to_string())
    }
    async fn list_domains(
        &self,
        ctx: &RequestContext,
        filter: DomainListFilter,
    ) -> Result<Vec<DomainRecord>, ApiError> {
        self.list_domains.call(ctx, filter)
    }
    async fn create_domain(
        &self,
        ctx: &RequestContext,
        message: CreateDomainMessage,
    ) -> Result<DomainRecord, ApiError> {
        self.create_domain.call(ctx, message)
    }
    async fn delete_domain(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        self.delete_domain.call(ctx, guid.to_string())
    }
}

#[derive(Default)]
pub struct FakeRouteRepository {
    pub fetch_route: Stub<String, RouteRecord>,
    pub list_routes: Stub<RouteListFilter, Vec<RouteRecord>>,
    pub create_route: Stub<CreateRouteMessage, RouteRecord>,
    pub delete_route: Stub<String, ()>,
}

#[async_trait]
impl RouteRepository for FakeRouteRepository {
    async fn fetch_route(&self, ctx: &RequestContext, guid: &str) -> Result<RouteRecord, ApiError> {
        self.fetch_route.call(ctx, guid.to_string())
    }
    async fn list_routes(
        &self,
        ctx: &RequestContext,
        filter: RouteListFilter,
    ) -> Result<Vec<RouteRecord>, ApiError> {
        self.list_routes.call(ctx, filter)
    }
    async fn create_route(
        &self,
        ctx: &RequestContext,
        message: CreateRouteMessage,
    ) -> Result<RouteRecord, ApiError> {
        self.create_route.call(ctx, message)
    }
    async fn delete_route(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        self.delete_route.call(ctx, guid.to_string())
    }
}

#[derive(Default)]
pub struct FakeAppRepository {
    pub fetch_app: Stub<String, AppRecord>,
    pub list_apps: Stub<AppListFilter, Vec<AppRecord>>,
    pub create_app: Stub<CreateAppMessage, AppRecord>,
    pub delete_app: Stub<String, ()>,
}

#[async_trait]
impl AppRepository for FakeAppRepository {
    async fn fetch_app(&self, ctx: &RequestContext, guid: &str) -> Result<AppRecord, ApiError> {
        self.fetch_app.call(ctx, guid.to_string())
    }
    async fn list_apps(
        &self,
        ctx: &RequestContext,
        filter: AppListFilter,
    ) -> Result<Vec<AppRecord>, ApiError> {
        self.list_apps.call(ctx, filter)
    }
    async fn create_app(
        &self,
        ctx: &RequestContext,
        message: CreateAppMessage,
    ) -> Result<AppRecord, ApiError> {
        self.create_app.call(ctx, message)
    }
    async fn delete_app(&self, ctx: &RequestContext, guid: &str) -> Result<(), ApiError> {
        self.delete_app.call(ctx, guid.to_string())
    }
}

pub fn org_record(guid: &str, name: &str) -> OrgRecord {
    OrgRecord {
        guid: guid.to_string(),
        name: name.to_string(),
        suspended: false,
        metadata: Metadata::default(),
    }
}

pub fn space_record(guid: &str, org_guid: &str, name: &str) -> SpaceRecord {
    SpaceRecord {
        guid: guid.to_string(),
        name: name.to_string(),
        org_guid: org_guid.to_string(),
        metadata: Metadata::default(),
    }
}

pub fn domain_record(guid: &str, name: &str) -> DomainRecord {
    DomainRecord {
        guid: guid.to_string(),
        name: name.to_string(),
        metadata: Metadata::default(),
    }
}

pub fn route_record(guid: &str, space_guid: &str, host: &str, domain_guid: &str) -> RouteRecord {
    RouteRecord {
        guid: guid.to_string(),
        space_guid: space_guid.to_string(),
        domain_ref: DomainRecord::reference(domain_guid),
        host: host.to_string(),
        path: String::new(),
        protocol: "http".to_string(),
        port: None,
        destinations: Vec::new(),
        metadata: Metadata::default(),
    }
}

pub fn app_record(guid: &str, space_guid: &str, name: &str) -> AppRecord {
    AppRecord {
        guid: guid.to_string(),
        name: name.to_string(),
        space_guid: space_guid.to_string(),
        state: DesiredState::Stopped,
        lifecycle: Lifecycle::default(),
        droplet_guid: None,
        metadata: Metadata::default(),
    }
}

/// Records every push and answers with a configured result, optionally per call index
#[derive(Default)]
pub struct FakeImagePusher {
    calls: Mutex<Vec<(String, Image, PushOptions)>>,
    returns: Mutex<Option<Result<String, PushError>>>,
    returns_on_call: Mutex<HashMap<usize, Result<String, PushError>>>,
}

impl FakeImagePusher {
    pub fn returns(&self, result: Result<String, PushError>) {
        *self.returns.lock().unwrap() = Some(result);
    }

    pub fn returns_on_call(&self, index: usize, result: Result<String, PushError>) {
        self.returns_on_call.lock().unwrap().insert(index, result);
    }

    pub fn calls(&self) -> Vec<(String, Image, PushOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImagePusher for FakeImagePusher {
    async fn push(
        &self,
        reference: &str,
        image: &Image,
        options: &PushOptions,
    ) -> Result<String, PushError> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push((reference.to_string(), image.clone(), options.clone()));

        if let Some(result) = self.returns_on_call.lock().unwrap().get(&index) {
            return result.clone();
        }
        self.returns
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(reference.to_string()))
    }
}

/// Fakes for every repository, wired into the router the way `main` wires the real ones
#[derive(Default, Clone)]
pub struct Fakes {
    pub orgs: Arc<FakeOrgRepository>,
    pub spaces: Arc<FakeSpaceRepository>,
    pub domains: Arc<FakeDomainRepository>,
    pub routes: Arc<FakeRouteRepository>,
    pub apps: Arc<FakeAppRepository>,
}

impl Fakes {
    pub fn router(&self) -> axum::Router {
        router(AppState {
            server_url: Url::parse("https://api.example.org").unwrap(),
            request_timeout: Duration::from_secs(5),
            orgs: self.orgs.clone(),
            spaces: self.spaces.clone(),
            domains: self.domains.clone(),
            routes: self.routes.clone(),
            apps: self.apps.clone(),
        })
    }
}

/// An inbound API request, authenticated as "alice" unless told otherwise
pub struct TestRequest {
    method: &'static str,
    uri: String,
    body: Option<Value>,
    user: Option<String>,
    groups: Vec<String>,
}

impl TestRequest {
    fn new(method: &'static str, uri: &str, body: Option<Value>) -> Self {
        Self {
            method,
            uri: uri.to_string(),
            body,
            user: Some("alice".to_string()),
            groups: Vec::new(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new("GET", uri, None)
    }

    pub fn post(uri: &str, body: Value) -> Self {
        Self::new("POST", uri, Some(body))
    }

    pub fn delete(uri: &str) -> Self {
        Self::new("DELETE", uri, None)
    }

    pub fn user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    pub fn group(mut self, group: &str) -> Self {
        self.groups.push(group.to_string());
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.user = None;
        self
    }

    fn into_request(self) -> Request<axum::body::Body> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if let Some(user) = self.user {
            builder = builder.header(REMOTE_USER, user);
        }
        for group in self.groups {
            builder = builder.header(REMOTE_GROUP, group);
        }
        match self.body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(axum::body::Body::empty()).unwrap(),
        }
    }
}

pub struct TestResponse {
    pub status: http::StatusCode,
    pub headers: http::HeaderMap,
    /// Body exactly as sent
    pub raw: String,
    /// Body parsed as JSON, `Null` when empty
    pub body: Value,
}

pub async fn send(router: axum::Router, request: TestRequest) -> TestResponse {
    let response = router.oneshot(request.into_request()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();
    let body = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&raw).unwrap()
    };

    TestResponse {
        status,
        headers,
        raw,
        body,
    }
}
