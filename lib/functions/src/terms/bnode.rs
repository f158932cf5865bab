use crate::{ScalarNullaryRdfOp, ScalarUnaryRdfOp};
use sparql_algebra_model::{BlankNode, EvalResult, SimpleLiteralRef};

/// Creates fresh blank nodes.
///
/// The unary form only validates its argument. Returning the same blank node for the same label
/// within one solution is up to the caller.
#[derive(Debug)]
pub struct BNodeRdfOp;

impl Default for BNodeRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl BNodeRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarNullaryRdfOp for BNodeRdfOp {
    type Result = BlankNode;

    fn evaluate(&self) -> EvalResult<Self::Result> {
        Ok(BlankNode::default())
    }
}

impl ScalarUnaryRdfOp for BNodeRdfOp {
    type Arg<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = BlankNode;

    fn evaluate<'data>(&self, _value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(BlankNode::default())
    }
}
