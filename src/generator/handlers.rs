use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

use super::generator::AclDocumentGenerator;
use super::protocol::{ENDPOINT_GENERATE, GenerateRequest, GenerateResponse};
use crate::config::{GeneratorConfig, RetryConfig};
use crate::error::AclError;
use crate::topology::protocol::{ClusterStateResponse, ENDPOINT_CLUSTER_STATE};
use crate::topology::provider::{TopologyProvider, fetch_snapshot_with_retry};

/// Shared state of the HTTP service.
pub struct GeneratorState {
    pub provider: Arc<dyn TopologyProvider>,
    pub retry: RetryConfig,
    pub config: GeneratorConfig,
}

impl GeneratorState {
    pub fn new(
        provider: Arc<dyn TopologyProvider>,
        retry: RetryConfig,
        config: GeneratorConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            provider,
            retry,
            config,
        })
    }
}

/// Routes of the ACL generation service.
pub fn router(state: Arc<GeneratorState>) -> Router {
    Router::new()
        .route(ENDPOINT_GENERATE, post(handle_generate))
        .route(ENDPOINT_CLUSTER_STATE, get(handle_cluster_state))
        .layer(Extension(state))
}

/// Replicates the posted ACL document onto every shard.
///
/// Each request runs against a freshly fetched snapshot. A body that does not
/// decode into a [`GenerateRequest`] is answered with `400` before the
/// topology is fetched.
pub async fn handle_generate(
    Extension(state): Extension<Arc<GeneratorState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> (StatusCode, Json<GenerateResponse>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("Rejected generate request: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(GenerateResponse::failed(rejection.body_text())),
            );
        }
    };

    let generator = match AclDocumentGenerator::connect(
        state.provider.as_ref(),
        &state.retry,
        state.config.clone(),
    )
    .await
    {
        Ok(generator) => generator,
        Err(e) => {
            tracing::error!("Failed to fetch topology: {:#}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(GenerateResponse::failed(format!("{:#}", e))),
            );
        }
    };

    let generator = match req.strategy {
        Some(strategy) => generator.with_strategy(strategy),
        None => generator,
    };

    match generator.create_acl_documents(&req.document, &req.acl_id_field) {
        Ok(documents) => (
            StatusCode::OK,
            Json(GenerateResponse::generated(
                generator.topology().version(),
                documents,
            )),
        ),
        Err(e @ AclError::MissingIdField { .. }) => {
            tracing::warn!("Rejected ACL document: {}", e);
            (StatusCode::BAD_REQUEST, Json(GenerateResponse::failed(e)))
        }
        Err(e) => {
            tracing::error!("Failed to generate ACL documents: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(GenerateResponse::failed(e)),
            )
        }
    }
}

/// Serves the partition layout this node currently sees.
pub async fn handle_cluster_state(
    Extension(state): Extension<Arc<GeneratorState>>,
) -> Result<Json<ClusterStateResponse>, StatusCode> {
    match fetch_snapshot_with_retry(state.provider.as_ref(), &state.retry).await {
        Ok(snapshot) => Ok(Json(ClusterStateResponse::from(&snapshot.topology))),
        Err(e) => {
            tracing::error!("Failed to fetch topology: {:#}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
