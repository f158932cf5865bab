use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

#[derive(Debug)]
pub struct LCaseRdfOp;

impl Default for LCaseRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl LCaseRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for LCaseRdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(OwnedStringLiteral::new(
            value.0.to_lowercase(),
            value.1.map(ToOwned::to_owned),
        ))
    }
}
