use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{checked, EvalResult, Numeric, NumericPair};

#[derive(Debug)]
pub struct AddRdfOp;

impl Default for AddRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl AddRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for AddRdfOp {
    type ArgLhs<'lhs> = Numeric;
    type ArgRhs<'rhs> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        match NumericPair::with_casts_from(lhs, rhs) {
            NumericPair::Integer(lhs, rhs) => {
                checked(lhs.checked_add(rhs), "+").map(Numeric::Integer)
            }
            NumericPair::Decimal(lhs, rhs) => {
                checked(lhs.checked_add(rhs), "+").map(Numeric::Decimal)
            }
            NumericPair::Float(lhs, rhs) => Ok(Numeric::Float(lhs + rhs)),
            NumericPair::Double(lhs, rhs) => Ok(Numeric::Double(lhs + rhs)),
        }
    }
}
