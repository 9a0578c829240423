//! HTTP API Layer
//!
//! This crate provides the REST API for the fund registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers for funds and health probes
//! - **DTOs**: request data transfer objects and input coercion
//! - **Error Handling**: uniform `{error, message}` responses
//!
//! The store is injected through application state rather than held as
//! process-wide global state, so tests can run each server against its
//! own temp-file-backed store.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(store, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use infra_store::FundStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{fund, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FundStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - The fund store backing all routes
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<FundStore>, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let fund_routes = Router::new()
        .route("/", get(fund::list_funds))
        .route("/", post(fund::create_fund))
        .route("/:id", get(fund::get_fund))
        .route("/:id", delete(fund::delete_fund))
        .route("/:id/performance", put(fund::update_performance));

    Router::new()
        .merge(health_routes)
        .nest("/funds", fund_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
