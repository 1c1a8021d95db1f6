use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{
        header::{HeaderName, HeaderValue, CONTENT_TYPE},
        Method, StatusCode,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::auth::identity::CALLER_ID_HEADER;
use crate::auth::CallerIdentity;
use crate::error::AppError;
use crate::gql::AppSchema;
use crate::middleware::identity::identity_middleware;
use crate::state::AppState;

/// Build the Axum router with the health endpoint and the single GraphQL endpoint.
pub fn build_router(state: AppState, schema: AppSchema) -> Router {
    let allowed_origins: Vec<HeaderValue> = state
        .config()
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        // Liveness check; also proves store connectivity.
        .route("/health", get(health))
        // Single GraphQL endpoint
        .route("/graphql", post(move |req| graphql_handler(req, schema)))
        .with_state(state)
        // Caller identity from the upstream authenticator
        .layer(middleware::from_fn(identity_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, HeaderName::from_static(CALLER_ID_HEADER)]),
        )
}

/// Custom GraphQL handler that passes the caller identity (set by the
/// identity middleware) into the GraphQL context
async fn graphql_handler(req: Request, schema: AppSchema) -> Result<Response, AppError> {
    let identity = req.extensions().get::<CallerIdentity>().copied();

    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, 2 * 1024 * 1024)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read request body: {}", e)))?;

    let mut gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    if let Some(identity) = identity {
        gql_request = gql_request.data(identity);
    }

    let gql_response = schema.execute(gql_request).await;

    Ok(Json(gql_response).into_response())
}

async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await?;
    Ok("ok")
}
