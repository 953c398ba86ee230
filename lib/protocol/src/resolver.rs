use crate::dataset::{DatasetDescription, RequestDataset};
use crate::params::{
    extract_values, filter_non_empty, ParameterSource, DEFAULT_GRAPH_URI, NAMED_GRAPH_URI,
    USING_GRAPH_URI, USING_NAMED_GRAPH_URI,
};
use spargebra::algebra::QueryDataset;
use spargebra::{GraphUpdateOperation, Query, Update};

/// A parsed SPARQL operation that may carry its own dataset clauses.
pub trait EmbeddedDataset {
    /// The graphs of the `FROM` clauses in the order of appearance.
    fn embedded_default_graph_uris(&self) -> Vec<String>;

    /// The graphs of the `FROM NAMED` clauses in the order of appearance.
    fn embedded_named_graph_uris(&self) -> Vec<String>;
}

/// Resolves the dataset selected by the `default-graph-uri` and `named-graph-uri` parameters of a
/// query request.
///
/// Empty values are ignored. If no graph remains, [RequestDataset::Unspecified] is returned.
pub fn resolve_from_request(request: &(impl ParameterSource + ?Sized)) -> RequestDataset {
    resolve_parameters(request, DEFAULT_GRAPH_URI, NAMED_GRAPH_URI)
}

/// Resolves the dataset selected by the `using-graph-uri` and `using-named-graph-uri` parameters of
/// an update request.
pub fn resolve_from_update_request(request: &(impl ParameterSource + ?Sized)) -> RequestDataset {
    resolve_parameters(request, USING_GRAPH_URI, USING_NAMED_GRAPH_URI)
}

fn resolve_parameters(
    request: &(impl ParameterSource + ?Sized),
    default_graph_parameter: &str,
    named_graph_parameter: &str,
) -> RequestDataset {
    let defaults = filter_non_empty(extract_values(request, default_graph_parameter));
    let named = filter_non_empty(extract_values(request, named_graph_parameter));

    if defaults.is_empty() && named.is_empty() {
        return RequestDataset::Unspecified;
    }
    RequestDataset::Described(DatasetDescription::new(defaults, named))
}

/// Returns the dataset described by the `FROM` and `FROM NAMED` clauses of `query`.
///
/// The result is always a concrete description, even if the query has no such clauses.
pub fn resolve_from_query(query: &(impl EmbeddedDataset + ?Sized)) -> DatasetDescription {
    DatasetDescription::new(
        query.embedded_default_graph_uris(),
        query.embedded_named_graph_uris(),
    )
}

/// Returns the dataset described by the `USING` and `USING NAMED` clauses of each operation of
/// `update`, in operation order.
///
/// A `USING` clause only applies to its own operation, so the datasets are never merged.
/// Operations without such clauses yield an empty description. `WITH` clauses are part of the
/// result, as the parser expresses them as `USING` clauses.
pub fn resolve_from_update(update: &Update) -> Vec<DatasetDescription> {
    update
        .operations
        .iter()
        .map(|operation| match operation {
            GraphUpdateOperation::DeleteInsert {
                using: Some(dataset),
                ..
            } => DatasetDescription::new(default_graph_uris(dataset), named_graph_uris(dataset)),
            _ => DatasetDescription::default(),
        })
        .collect()
}

impl EmbeddedDataset for Query {
    fn embedded_default_graph_uris(&self) -> Vec<String> {
        query_dataset(self)
            .map(default_graph_uris)
            .unwrap_or_default()
    }

    fn embedded_named_graph_uris(&self) -> Vec<String> {
        query_dataset(self)
            .map(named_graph_uris)
            .unwrap_or_default()
    }
}

fn query_dataset(query: &Query) -> Option<&QueryDataset> {
    match query {
        Query::Select { dataset, .. }
        | Query::Construct { dataset, .. }
        | Query::Describe { dataset, .. }
        | Query::Ask { dataset, .. } => dataset.as_ref(),
    }
}

fn default_graph_uris(dataset: &QueryDataset) -> Vec<String> {
    dataset
        .default
        .iter()
        .map(|graph| graph.as_str().to_owned())
        .collect()
}

fn named_graph_uris(dataset: &QueryDataset) -> Vec<String> {
    dataset
        .named
        .iter()
        .flatten()
        .map(|graph| graph.as_str().to_owned())
        .collect()
}
