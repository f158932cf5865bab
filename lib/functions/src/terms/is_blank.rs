use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TermRef};

#[derive(Debug)]
pub struct IsBlankRdfOp;

impl Default for IsBlankRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsBlankRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsBlankRdfOp {
    type Arg<'data> = TermRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(matches!(value, TermRef::BlankNode(_)).into())
    }
}
