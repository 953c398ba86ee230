use crate::dataset::{DatasetDescription, RequestDataset};

/// The dataset that an operation is evaluated against, together with where it was defined.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectiveDataset {
    /// The protocol request selected the dataset. Dataset clauses of the operation are ignored.
    Request(DatasetDescription),
    /// The operation selected the dataset with its own dataset clauses.
    Query(DatasetDescription),
    /// Neither the request nor the operation selected a dataset. The service decides.
    ServiceDefault,
}

impl EffectiveDataset {
    /// Returns the selected graphs, or [None] if the service default applies.
    pub fn description(&self) -> Option<&DatasetDescription> {
        match self {
            Self::Request(description) | Self::Query(description) => Some(description),
            Self::ServiceDefault => None,
        }
    }
}

/// Applies the dataset precedence of the SPARQL 1.1 Protocol.
///
/// A dataset described by the request parameters replaces the dataset clauses of the operation
/// entirely; the two are never merged.
pub fn effective_dataset(request: RequestDataset, query: DatasetDescription) -> EffectiveDataset {
    match request {
        RequestDataset::Described(description) => EffectiveDataset::Request(description),
        RequestDataset::Unspecified if query.is_empty() => EffectiveDataset::ServiceDefault,
        RequestDataset::Unspecified => EffectiveDataset::Query(query),
    }
}
