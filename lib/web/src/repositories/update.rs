use crate::error::RdfProtocolServerError;
use crate::repositories::ProtocolParams;
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use rdf_protocol::params::{QUERY, UPDATE};
use rdf_protocol::{
    resolve_from_update, resolve_from_update_request, CauseDescriptor, EffectiveDataset,
    ParseFailure, RequestDataset, Update,
};

/// Handles an update operation of the SPARQL 1.1 Protocol.
pub async fn handle_update(
    State(state): State<AppState>,
    params: ProtocolParams,
) -> Result<Response, RdfProtocolServerError> {
    if params.single_value(QUERY)?.is_some() {
        return Err(RdfProtocolServerError::BadRequest(
            "Queries must be sent to the query endpoint.".to_owned(),
        ));
    }
    let Some(update) = params.single_value(UPDATE)? else {
        return Err(RdfProtocolServerError::BadRequest(
            "No update given.".to_owned(),
        ));
    };

    let update = Update::parse(update, None).map_err(|e| {
        let failure = ParseFailure::from(e);
        tracing::warn!(
            diagnostic = failure.message_for(),
            cause = failure.cause().and_then(CauseDescriptor::message),
            "Rejected update with syntax error"
        );
        RdfProtocolServerError::UpdateParse(failure)
    })?;

    let request_dataset = resolve_from_update_request(&params);
    let has_embedded_dataset = resolve_from_update(&update)
        .iter()
        .any(|description| !description.is_empty());
    if !request_dataset.is_unspecified() && has_embedded_dataset {
        return Err(RdfProtocolServerError::BadRequest(
            "using-graph-uri and using-named-graph-uri must not be combined with USING, USING NAMED or WITH.".to_owned(),
        ));
    }

    // USING and WITH clauses stay with their operation and are applied by the evaluator.
    let dataset = match request_dataset {
        RequestDataset::Described(description) => EffectiveDataset::Request(description),
        RequestDataset::Unspecified => EffectiveDataset::ServiceDefault,
    };
    tracing::debug!(?dataset, "Resolved update dataset");

    state
        .evaluator
        .evaluate_update(update, dataset, state.evaluation_options())
        .await
        .map_err(|e| {
            tracing::error!("Update evaluation failed: {e}");
            RdfProtocolServerError::Internal(e)
        })
}
