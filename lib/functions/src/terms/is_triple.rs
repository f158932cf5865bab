use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TermRef};

#[derive(Debug)]
pub struct IsTripleRdfOp;

impl Default for IsTripleRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsTripleRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsTripleRdfOp {
    type Arg<'data> = TermRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(matches!(value, TermRef::Triple(_)).into())
    }
}
