use crate::ScalarNullaryRdfOp;
use sparql_algebra_model::{EvalResult, NamedNode};
use uuid::Uuid;

#[derive(Debug)]
pub struct UuidRdfOp;

impl Default for UuidRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarNullaryRdfOp for UuidRdfOp {
    type Result = NamedNode;

    fn evaluate(&self) -> EvalResult<Self::Result> {
        Ok(NamedNode::new_unchecked(format!(
            "urn:uuid:{}",
            Uuid::new_v4().as_hyphenated()
        )))
    }
}
