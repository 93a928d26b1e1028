//! Widget API Library
//!
//! This crate provides the core functionality for the Widget API
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::db::DbPool;
use crate::services::WidgetService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: config::AppConfig,
    pub widgets: WidgetService,
}

impl AppState {
    pub fn new(db: Arc<DbPool>, config: config::AppConfig) -> Self {
        let widgets = WidgetService::new(db.clone());
        Self {
            db,
            config,
            widgets,
        }
    }
}

/// Builds the application router with all routes and middleware.
pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = if state.config.cors_allow_any_origin {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .nest("/v1/widgets", handlers::widgets::widget_routes())
        .nest("/health", handlers::health::health_routes())
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.request_timeout_secs,
        )))
        .layer(cors)
        .with_state(state)
}
