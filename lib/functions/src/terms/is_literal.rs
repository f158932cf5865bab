use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TermRef};

#[derive(Debug)]
pub struct IsLiteralRdfOp;

impl Default for IsLiteralRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsLiteralRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsLiteralRdfOp {
    type Arg<'data> = TermRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(matches!(value, TermRef::Literal(_)).into())
    }
}
