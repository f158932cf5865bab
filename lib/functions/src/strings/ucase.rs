use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

#[derive(Debug)]
pub struct UCaseRdfOp;

impl Default for UCaseRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl UCaseRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for UCaseRdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(OwnedStringLiteral::new(
            value.0.to_uppercase(),
            value.1.map(ToOwned::to_owned),
        ))
    }
}
