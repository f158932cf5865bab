use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{checked, EvalResult, Numeric};

#[derive(Debug)]
pub struct CeilRdfOp;

impl Default for CeilRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CeilRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CeilRdfOp {
    type Arg<'data> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            Numeric::Integer(value) => Ok(Numeric::Integer(value)),
            Numeric::Decimal(value) => checked(value.checked_ceil(), "ceil").map(Numeric::Decimal),
            Numeric::Float(value) => Ok(Numeric::Float(value.ceil())),
            Numeric::Double(value) => Ok(Numeric::Double(value.ceil())),
        }
    }
}
