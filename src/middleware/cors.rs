use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Allow-list CORS policy: fixed origins, `GET`/`POST`/`OPTIONS`, and only
/// the `Content-Type` header, without credentials.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE])
        .allow_credentials(false)
}
