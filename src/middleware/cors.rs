// CORS configuration
//
// The dashboard may be served from a different origin than the API, so CORS
// is enabled globally. With no configured origins the layer is permissive.

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}
