use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, Numeric};

#[derive(Debug)]
pub struct UnaryPlusRdfOp;

impl Default for UnaryPlusRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl UnaryPlusRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for UnaryPlusRdfOp {
    type Arg<'data> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(value)
    }
}
