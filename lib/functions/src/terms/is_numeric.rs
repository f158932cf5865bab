use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TypedValueRef};

/// Returns whether the argument is a well-formed numeric literal.
#[derive(Debug)]
pub struct IsNumericRdfOp;

impl Default for IsNumericRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsNumericRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsNumericRdfOp {
    type Arg<'data> = TypedValueRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(matches!(value, TypedValueRef::NumericLiteral(_)).into())
    }
}
