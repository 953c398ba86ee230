use async_trait::async_trait;
use axum::response::Response;
use rdf_protocol::{EffectiveDataset, Query, Update};

/// Options that the server passes along with every operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Whether [EffectiveDataset::ServiceDefault] means the union of all graphs instead of the
    /// default graph of the store.
    pub default_graph_as_union: bool,
}

/// Evaluates SPARQL operations against the dataset resolved from a protocol request.
///
/// Content negotiation and result serialization are the responsibility of the evaluator.
///
/// For updates, the dataset only reflects the `using-graph-uri` and `using-named-graph-uri`
/// parameters. The `USING` and `WITH` clauses of each operation must be applied by the evaluator.
#[async_trait]
pub trait SparqlEvaluator: Send + Sync {
    async fn evaluate_query(
        &self,
        query: Query,
        dataset: EffectiveDataset,
        options: EvaluationOptions,
    ) -> anyhow::Result<Response>;

    async fn evaluate_update(
        &self,
        update: Update,
        dataset: EffectiveDataset,
        options: EvaluationOptions,
    ) -> anyhow::Result<Response>;
}
