use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{checked, EvalResult, Numeric};

#[derive(Debug)]
pub struct FloorRdfOp;

impl Default for FloorRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for FloorRdfOp {
    type Arg<'data> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            Numeric::Integer(value) => Ok(Numeric::Integer(value)),
            Numeric::Decimal(value) => {
                checked(value.checked_floor(), "floor").map(Numeric::Decimal)
            }
            Numeric::Float(value) => Ok(Numeric::Float(value.floor())),
            Numeric::Double(value) => Ok(Numeric::Double(value.floor())),
        }
    }
}
