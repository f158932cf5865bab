use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{checked, EvalResult, Numeric};

#[derive(Debug)]
pub struct UnaryMinusRdfOp;

impl Default for UnaryMinusRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl UnaryMinusRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for UnaryMinusRdfOp {
    type Arg<'data> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            Numeric::Integer(value) => checked(value.checked_neg(), "-").map(Numeric::Integer),
            Numeric::Decimal(value) => checked(value.checked_neg(), "-").map(Numeric::Decimal),
            Numeric::Float(value) => Ok(Numeric::Float(-value)),
            Numeric::Double(value) => Ok(Numeric::Double(-value)),
        }
    }
}
