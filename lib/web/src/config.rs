use crate::evaluator::SparqlEvaluator;
use std::sync::Arc;

/// Holds the configuration for a SPARQL protocol server.
pub struct ServerConfig {
    /// Evaluates the operations once their dataset is resolved.
    pub evaluator: Arc<dyn SparqlEvaluator>,
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
    /// Whether, by default, queries match against all graphs.
    pub union_default_graph: bool,
}
