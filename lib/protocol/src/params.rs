//! Access to the raw, possibly repeated, parameters of a protocol request.

use std::collections::HashMap;

/// The parameter that carries the query text of a query operation.
pub const QUERY: &str = "query";
/// The parameter that carries the update text of an update operation.
pub const UPDATE: &str = "update";
/// Default graphs of a query operation.
pub const DEFAULT_GRAPH_URI: &str = "default-graph-uri";
/// Named graphs of a query operation.
pub const NAMED_GRAPH_URI: &str = "named-graph-uri";
/// Default graphs of an update operation.
pub const USING_GRAPH_URI: &str = "using-graph-uri";
/// Named graphs of an update operation.
pub const USING_NAMED_GRAPH_URI: &str = "using-named-graph-uri";

/// A source of request parameters with HTTP query-string/form semantics.
///
/// A parameter may be absent, present once, or present multiple times. Implementations must return
/// the values in the order in which they were submitted.
pub trait ParameterSource {
    /// Returns all values submitted under `name`, or [None] if the parameter is absent.
    fn parameter_values(&self, name: &str) -> Option<Vec<&str>>;
}

impl ParameterSource for [(String, String)] {
    fn parameter_values(&self, name: &str) -> Option<Vec<&str>> {
        let values = self
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>();
        (!values.is_empty()).then_some(values)
    }
}

impl ParameterSource for Vec<(String, String)> {
    fn parameter_values(&self, name: &str) -> Option<Vec<&str>> {
        self.as_slice().parameter_values(name)
    }
}

impl<S: std::hash::BuildHasher> ParameterSource for HashMap<String, Vec<String>, S> {
    fn parameter_values(&self, name: &str) -> Option<Vec<&str>> {
        self.get(name)
            .map(|values| values.iter().map(String::as_str).collect())
    }
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn parameter_values(&self, name: &str) -> Option<Vec<&str>> {
        (**self).parameter_values(name)
    }
}

/// Returns the values submitted under `name` in submission order.
///
/// An absent parameter yields an empty list.
pub fn extract_values(request: &(impl ParameterSource + ?Sized), name: &str) -> Vec<String> {
    request
        .parameter_values(name)
        .unwrap_or_default()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

/// Removes all empty values while preserving the order of the remaining ones.
pub fn filter_non_empty(values: Vec<String>) -> Vec<String> {
    retain_matching(values, is_non_empty)
}

fn retain_matching<T: AsRef<str>>(values: Vec<T>, predicate: fn(&str) -> bool) -> Vec<T> {
    values
        .into_iter()
        .filter(|value| predicate(value.as_ref()))
        .collect()
}

fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}
