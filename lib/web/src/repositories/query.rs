use crate::error::RdfProtocolServerError;
use crate::repositories::ProtocolParams;
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use rdf_protocol::params::{QUERY, UPDATE};
use rdf_protocol::{
    effective_dataset, resolve_from_query, resolve_from_request, CauseDescriptor, ParseFailure,
    Query,
};

/// Handles a query operation of the SPARQL 1.1 Protocol.
pub async fn handle_query(
    State(state): State<AppState>,
    params: ProtocolParams,
) -> Result<Response, RdfProtocolServerError> {
    if params.single_value(UPDATE)?.is_some() {
        return Err(RdfProtocolServerError::BadRequest(
            "Updates must be sent to the update endpoint.".to_owned(),
        ));
    }
    let Some(query) = params.single_value(QUERY)? else {
        return Err(RdfProtocolServerError::BadRequest(
            "No query given.".to_owned(),
        ));
    };

    let query = Query::parse(query, None).map_err(|e| {
        let failure = ParseFailure::from(e);
        tracing::warn!(
            diagnostic = failure.message_for(),
            cause = failure.cause().and_then(CauseDescriptor::message),
            "Rejected query with syntax error"
        );
        RdfProtocolServerError::QueryParse(failure)
    })?;

    let dataset = effective_dataset(resolve_from_request(&params), resolve_from_query(&query));
    tracing::debug!(?dataset, "Resolved query dataset");

    state
        .evaluator
        .evaluate_query(query, dataset, state.evaluation_options())
        .await
        .map_err(|e| {
            tracing::error!("Query evaluation failed: {e}");
            RdfProtocolServerError::Internal(e)
        })
}
