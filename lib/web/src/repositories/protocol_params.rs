use crate::error::RdfProtocolServerError;
use crate::AppState;
use axum::extract::{FromRequest, Query, Request};
use axum::http::Method;
use axum::Form;
use headers::{ContentType, HeaderMapExt};
use mediatype::names::APPLICATION;
use mediatype::{MediaType, Name};
use rdf_protocol::params::{QUERY, UPDATE};
use rdf_protocol::ParameterSource;

static FORM_URLENCODED: Name<'_> = Name::new_unchecked("x-www-form-urlencoded");
static SPARQL_QUERY: Name<'_> = Name::new_unchecked("sparql-query");
static SPARQL_UPDATE: Name<'_> = Name::new_unchecked("sparql-update");

/// The parameters of a SPARQL protocol request in submission order.
///
/// Parameters are read from the query string of the URL. For `POST` requests, the body either
/// contains further URL-encoded parameters or, for `application/sparql-query` and
/// `application/sparql-update`, the operation itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtocolParams {
    pairs: Vec<(String, String)>,
}

impl ProtocolParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Returns the value of a parameter that may be given at most once.
    pub fn single_value(&self, name: &str) -> Result<Option<&str>, RdfProtocolServerError> {
        let values = self.pairs.parameter_values(name);
        match values.as_deref() {
            None => Ok(None),
            Some([value]) => Ok(Some(*value)),
            Some(_) => Err(RdfProtocolServerError::BadRequest(format!(
                "The parameter '{name}' must be given only once."
            ))),
        }
    }
}

impl ParameterSource for ProtocolParams {
    fn parameter_values(&self, name: &str) -> Option<Vec<&str>> {
        self.pairs.parameter_values(name)
    }
}

impl FromRequest<AppState> for ProtocolParams {
    type Rejection = RdfProtocolServerError;

    async fn from_request(request: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Query(mut pairs) = Query::<Vec<(String, String)>>::try_from_uri(request.uri())
            .map_err(|e| RdfProtocolServerError::BadRequest(e.to_string()))?;

        if request.method() != Method::POST {
            return Ok(Self::new(pairs));
        }

        let content_type = request
            .headers()
            .typed_get::<ContentType>()
            .ok_or_else(|| {
                RdfProtocolServerError::UnsupportedMediaType(
                    "No Content-Type given for POST request.".to_owned(),
                )
            })?
            .to_string();
        let media_type = MediaType::parse(&content_type)
            .map_err(|e| RdfProtocolServerError::UnsupportedMediaType(e.to_string()))?;

        if media_type.ty != APPLICATION {
            return Err(unsupported_media_type(&content_type));
        }

        if media_type.subty == FORM_URLENCODED {
            let Form(body_pairs) = Form::<Vec<(String, String)>>::from_request(request, state)
                .await
                .map_err(|e| RdfProtocolServerError::BadRequest(e.to_string()))?;
            pairs.extend(body_pairs);
        } else if media_type.subty == SPARQL_QUERY || media_type.subty == SPARQL_UPDATE {
            let operation = if media_type.subty == SPARQL_QUERY {
                QUERY
            } else {
                UPDATE
            };
            if pairs.iter().any(|(key, _)| key == operation) {
                return Err(RdfProtocolServerError::BadRequest(format!(
                    "The parameter '{operation}' must not be used when the operation is sent as the request body."
                )));
            }
            let body = String::from_request(request, state)
                .await
                .map_err(|e| RdfProtocolServerError::BadRequest(e.to_string()))?;
            pairs.push((operation.to_owned(), body));
        } else {
            return Err(unsupported_media_type(&content_type));
        }

        Ok(Self::new(pairs))
    }
}

fn unsupported_media_type(content_type: &str) -> RdfProtocolServerError {
    RdfProtocolServerError::UnsupportedMediaType(format!(
        "Expected application/x-www-form-urlencoded, application/sparql-query or application/sparql-update, got '{content_type}'."
    ))
}
