use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, Integer, StringLiteralRef};

#[derive(Debug)]
pub struct StrLenRdfOp;

impl Default for StrLenRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrLenRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for StrLenRdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = Integer;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let length = i64::try_from(value.len())?;
        Ok(length.into())
    }
}
