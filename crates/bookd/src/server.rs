//! HTTP server for bookd.

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use book_common::BookConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::routes;

/// Run the HTTP server.
pub async fn run(config: BookConfig) -> Result<()> {
    let app = Router::new()
        .merge(routes::ask_routes())
        .merge(routes::health_routes())
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// CORS policy for the book page.
///
/// With a configured frontend origin, that origin is allowed with
/// credentials. Otherwise any origin is allowed, without credentials: the
/// wildcard-plus-credentials combination is rejected by tower-http (and by
/// browsers).
fn cors_layer(config: &BookConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if let Some(origin) = &config.frontend_url {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                return CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods(methods)
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_credentials(true);
            }
            Err(_) => {
                warn!("Invalid FRONTEND_URL {:?}, falling back to wildcard CORS", origin);
            }
        }
    }

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE])
}
