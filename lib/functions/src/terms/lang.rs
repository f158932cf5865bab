use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, LiteralRef, SimpleLiteralRef};

#[derive(Debug)]
pub struct LangRdfOp;

impl Default for LangRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl LangRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for LangRdfOp {
    type Arg<'data> = LiteralRef<'data>;
    type Result<'data> = SimpleLiteralRef<'data>;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(SimpleLiteralRef::new(value.language().unwrap_or_default()))
    }
}
