use axum::Router;
use std::net::SocketAddr;
use std::str::FromStr;

mod config;
mod error;
mod evaluator;
mod repositories;
mod state;

pub use config::ServerConfig;
pub use error::{RdfProtocolServerError, QUERY_PARSE_ERROR, UPDATE_PARSE_ERROR};
pub use evaluator::{EvaluationOptions, SparqlEvaluator};
pub use repositories::ProtocolParams;
pub use state::AppState;

use crate::repositories::create_repositories_routes;

/// Binds to [ServerConfig::bind] and serves the protocol endpoints until the server fails.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from_str(&config.bind)?;

    let app_state = AppState {
        evaluator: config.evaluator,
        union_default_graph: config.union_default_graph,
    };

    let app = create_router(app_state);
    let app = if config.cors {
        // TODO: restrict the allowed origins once they are part of ServerConfig
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    tracing::info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    Ok(axum::serve(listener, app).await?)
}

/// Creates the router with all protocol endpoints.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/repositories", create_repositories_routes())
        .with_state(app_state)
}
