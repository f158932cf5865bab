use crate::ScalarNullaryRdfOp;
use sparql_algebra_model::{Double, EvalResult};

/// Returns a pseudo-random double in `[0, 1)`.
///
/// This is the only non-deterministic numeric operator. It is never constant folded.
#[derive(Debug)]
pub struct RandRdfOp;

impl Default for RandRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl RandRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarNullaryRdfOp for RandRdfOp {
    type Result = Double;

    fn evaluate(&self) -> EvalResult<Self::Result> {
        Ok(rand::random::<f64>().into())
    }
}
