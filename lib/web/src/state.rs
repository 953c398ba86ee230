use crate::evaluator::{EvaluationOptions, SparqlEvaluator};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<dyn SparqlEvaluator>,
    pub union_default_graph: bool,
}

impl AppState {
    pub fn evaluation_options(&self) -> EvaluationOptions {
        EvaluationOptions {
            default_graph_as_union: self.union_default_graph,
        }
    }
}
