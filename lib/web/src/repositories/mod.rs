use crate::repositories::query::handle_query;
use crate::repositories::update::handle_update;
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

mod protocol_params;
mod query;
mod update;

pub use protocol_params::ProtocolParams;

pub fn create_repositories_routes() -> Router<AppState> {
    Router::new()
        .route("/default/query", get(handle_query).post(handle_query))
        .route("/default/update", post(handle_update))
}
