use crate::ScalarNullaryRdfOp;
use sparql_algebra_model::{DateTime, EvalResult};

/// Returns the current instant.
#[derive(Debug)]
pub struct NowRdfOp;

impl Default for NowRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl NowRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarNullaryRdfOp for NowRdfOp {
    type Result = DateTime;

    fn evaluate(&self) -> EvalResult<Self::Result> {
        Ok(DateTime::now())
    }
}
