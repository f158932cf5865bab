use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{checked, EvalResult, Numeric};

#[derive(Debug)]
pub struct AbsRdfOp;

impl Default for AbsRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl AbsRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for AbsRdfOp {
    type Arg<'data> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            Numeric::Integer(value) => checked(value.checked_abs(), "abs").map(Numeric::Integer),
            Numeric::Decimal(value) => checked(value.checked_abs(), "abs").map(Numeric::Decimal),
            Numeric::Float(value) => Ok(Numeric::Float(value.abs())),
            Numeric::Double(value) => Ok(Numeric::Double(value.abs())),
        }
    }
}
