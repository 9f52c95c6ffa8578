// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use anyhow::{Context, Result};
use kube::Client;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cf_k8s_api::config::Config;
use cf_k8s_api::http::{router, AppState};
use cf_k8s_api::kubernetes::{ClientBuilder, ImpersonatingClientBuilder, NamespaceRetriever};
use cf_k8s_api::repositories::{
    K8sAppRepository, K8sDomainRepository, K8sOrgRepository, K8sRouteRepository,
    K8sSpaceRepository,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting CF API");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: server_url={}, root_namespace={}",
        config.server_url, config.root_namespace
    );

    let base = kube::Config::infer()
        .await
        .context("failed to infer Kubernetes configuration")?;

    // The API server's own identity only ever resolves namespaces from object metadata.
    let privileged = Client::try_from(base.clone())?;
    let namespaces = NamespaceRetriever::new(privileged);
    let client_builder: Arc<dyn ClientBuilder> = Arc::new(ImpersonatingClientBuilder::new(base));
    info!("Connected to Kubernetes cluster");

    let state = AppState {
        server_url: config.server_url.clone(),
        request_timeout: config.request_timeout,
        orgs: Arc::new(K8sOrgRepository::new(
            client_builder.clone(),
            config.root_namespace.clone(),
        )),
        spaces: Arc::new(K8sSpaceRepository::new(
            client_builder.clone(),
            namespaces.clone(),
        )),
        domains: Arc::new(K8sDomainRepository::new(
            client_builder.clone(),
            config.root_namespace.clone(),
        )),
        routes: Arc::new(K8sRouteRepository::new(
            client_builder.clone(),
            namespaces.clone(),
            config.root_namespace.clone(),
        )),
        apps: Arc::new(K8sAppRepository::new(client_builder, namespaces)),
    };

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
