use spargebra::SparqlSyntaxError;
use std::error::Error;

/// Describes the error that caused a [ParseFailure].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CauseDescriptor {
    type_name: String,
    message: Option<String>,
}

impl CauseDescriptor {
    /// Creates a new [CauseDescriptor] from a short type name (e.g., `IriParseError`).
    pub fn new(type_name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// A failure to parse the text of a SPARQL operation.
///
/// Both the message and the cause are optional. Use [Self::message_for] to obtain a diagnostic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseFailure {
    message: Option<String>,
    cause: Option<CauseDescriptor>,
}

/// The only source that the parser attaches to a [SparqlSyntaxError] is an invalid base IRI.
const SPARQL_SYNTAX_ERROR_CAUSE: &str = "IriParseError";

impl ParseFailure {
    pub fn new(message: Option<String>, cause: Option<CauseDescriptor>) -> Self {
        Self { message, cause }
    }

    /// Creates a [ParseFailure] from an error raised by a parser.
    ///
    /// The message of the failure is the message of `error`. If `error` has a source, the cause
    /// describes it as `cause_type_name`. Otherwise, the failure has no cause.
    pub fn from_error<E: Error + ?Sized>(error: &E, cause_type_name: &str) -> Self {
        let cause = error
            .source()
            .map(|source| CauseDescriptor::new(cause_type_name, non_empty(source.to_string())));
        Self::new(non_empty(error.to_string()), cause)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn cause(&self) -> Option<&CauseDescriptor> {
        self.cause.as_ref()
    }

    /// Returns the diagnostic message for this failure.
    ///
    /// This is the message of the failure if it is present and not empty. Otherwise, it is the type
    /// name of the cause. [None] is returned if the failure carries no information at all; callers
    /// must supply their own generic message in this case.
    pub fn message_for(&self) -> Option<&str> {
        match (self.message(), &self.cause) {
            (Some(message), _) if !message.is_empty() => Some(message),
            (_, Some(cause)) => Some(cause.type_name()),
            (_, None) => None,
        }
    }
}

impl From<SparqlSyntaxError> for ParseFailure {
    fn from(error: SparqlSyntaxError) -> Self {
        Self::from_error(&error, SPARQL_SYNTAX_ERROR_CAUSE)
    }
}

fn non_empty(message: String) -> Option<String> {
    (!message.is_empty()).then_some(message)
}
