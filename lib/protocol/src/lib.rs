//! Dataset resolution for the [SPARQL 1.1 Protocol](https://www.w3.org/TR/sparql11-protocol/).
//!
//! A protocol request can describe its target dataset in two independent places: as request
//! parameters (`default-graph-uri`, `named-graph-uri`) and as clauses embedded in the operation
//! text (`FROM`, `FROM NAMED`). This crate resolves both sources into a [`DatasetDescription`] and
//! provides [`effective_dataset`] for applying the protocol's precedence rule. It also turns parser
//! failures into a diagnostic for the client (see [`ParseFailure::message_for`]).
//!
//! ```
//! use rdf_protocol::{resolve_from_query, resolve_from_request, effective_dataset, EffectiveDataset, Query};
//!
//! let params = vec![("default-graph-uri".to_owned(), "http://example.com/g".to_owned())];
//! let query = Query::parse("SELECT * FROM <http://example.com/other> WHERE { ?s ?p ?o }", None).unwrap();
//!
//! let dataset = effective_dataset(resolve_from_request(&params), resolve_from_query(&query));
//! let EffectiveDataset::Request(description) = dataset else {
//!     panic!("the request parameters must take precedence")
//! };
//! assert_eq!(description.default_graph_uris(), ["http://example.com/g"]);
//! ```

mod dataset;
mod error;
pub mod params;
mod precedence;
mod resolver;

pub use dataset::{DatasetDescription, RequestDataset};
pub use error::{CauseDescriptor, ParseFailure};
pub use params::ParameterSource;
pub use precedence::{effective_dataset, EffectiveDataset};
pub use resolver::{
    resolve_from_query, resolve_from_request, resolve_from_update, resolve_from_update_request,
    EmbeddedDataset,
};

// Re-export the parser types that the resolver understands.
pub use spargebra::{Query, SparqlSyntaxError, Update};
