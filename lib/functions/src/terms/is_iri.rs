use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TermRef};

#[derive(Debug)]
pub struct IsIriRdfOp;

impl Default for IsIriRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsIriRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsIriRdfOp {
    type Arg<'data> = TermRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(matches!(value, TermRef::NamedNode(_)).into())
    }
}
