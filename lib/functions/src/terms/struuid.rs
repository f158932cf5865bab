use crate::ScalarNullaryRdfOp;
use sparql_algebra_model::{EvalResult, SimpleLiteral};
use uuid::Uuid;

#[derive(Debug)]
pub struct StrUuidRdfOp;

impl Default for StrUuidRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrUuidRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarNullaryRdfOp for StrUuidRdfOp {
    type Result = SimpleLiteral;

    fn evaluate(&self) -> EvalResult<Self::Result> {
        Ok(SimpleLiteral::new(Uuid::new_v4().to_string()))
    }
}
