/// An explicit selection of the graphs that make up the dataset of a SPARQL operation.
///
/// The default graph of the dataset is the union of [Self::default_graph_uris]. The graphs in
/// [Self::named_graph_uris] are available to `GRAPH` patterns. Neither list is deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DatasetDescription {
    default_graph_uris: Vec<String>,
    named_graph_uris: Vec<String>,
}

impl DatasetDescription {
    /// Creates a new [DatasetDescription].
    pub fn new(default_graph_uris: Vec<String>, named_graph_uris: Vec<String>) -> Self {
        Self {
            default_graph_uris,
            named_graph_uris,
        }
    }

    pub fn default_graph_uris(&self) -> &[String] {
        &self.default_graph_uris
    }

    pub fn named_graph_uris(&self) -> &[String] {
        &self.named_graph_uris
    }

    /// Returns `true` if neither a default nor a named graph is selected.
    pub fn is_empty(&self) -> bool {
        self.default_graph_uris.is_empty() && self.named_graph_uris.is_empty()
    }
}

/// The dataset selection that a protocol request made through its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RequestDataset {
    /// The request selected at least one default or named graph.
    Described(DatasetDescription),
    /// The request did not select any graph. The caller should fall back to the clauses embedded in
    /// the operation or to the default dataset of the service.
    Unspecified,
}

impl RequestDataset {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}
