use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rdf_protocol::ParseFailure;

/// Used when a query parse failure carries no information at all.
pub const QUERY_PARSE_ERROR: &str = "query parse error";
/// Used when an update parse failure carries no information at all.
pub const UPDATE_PARSE_ERROR: &str = "update parse error";

#[derive(thiserror::Error, Debug)]
pub enum RdfProtocolServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Could not parse query: {}", .0.message_for().unwrap_or(QUERY_PARSE_ERROR))]
    QueryParse(ParseFailure),
    #[error("Could not parse update: {}", .0.message_for().unwrap_or(UPDATE_PARSE_ERROR))]
    UpdateParse(ParseFailure),
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl IntoResponse for RdfProtocolServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RdfProtocolServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            RdfProtocolServerError::QueryParse(failure) => (
                StatusCode::BAD_REQUEST,
                failure.message_for().unwrap_or(QUERY_PARSE_ERROR).to_owned(),
            ),
            RdfProtocolServerError::UpdateParse(failure) => (
                StatusCode::BAD_REQUEST,
                failure.message_for().unwrap_or(UPDATE_PARSE_ERROR).to_owned(),
            ),
            RdfProtocolServerError::UnsupportedMediaType(msg) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg)
            }
            RdfProtocolServerError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, message).into_response()
    }
}
