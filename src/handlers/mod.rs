pub mod health;
pub mod upload;

pub use health::*;
pub use upload::*;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::{cors_layer, logging_middleware};
use crate::services::{PdfProcessor, TransientStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: TransientStore,
    pub processor: PdfProcessor,
}

impl AppState {
    /// Validates `config` and opens the upload directory.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let store = TransientStore::new(&config.upload_dir, config.retain_uploads)?;
        Ok(Self {
            config: Arc::new(config),
            store,
            processor: PdfProcessor::new(),
        })
    }
}

pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    let origins = state.config.origin_header_values()?;
    let body_limit = state.config.max_file_size_bytes();

    let router = Router::new()
        .route("/", get(health_handler))
        .route("/upload", post(upload_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(logging_middleware))
                .layer(cors_layer(origins))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state);

    Ok(router)
}
