use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{checked, EvalResult, Numeric, NumericPair};

#[derive(Debug)]
pub struct SubRdfOp;

impl Default for SubRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for SubRdfOp {
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
                checked(lhs.checked_sub(rhs), "-").map(Numeric::Integer)
            }
            NumericPair::Decimal(lhs, rhs) => {
                checked(lhs.checked_sub(rhs), "-").map(Numeric::Decimal)
            }
            NumericPair::Float(lhs, rhs) => Ok(Numeric::Float(lhs - rhs)),
            NumericPair::Double(lhs, rhs) => Ok(Numeric::Double(lhs - rhs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::Integer;

    #[test]
    fn integer_minus_integer() {
        let result = SubRdfOp::new()
            .evaluate(
                Numeric::Integer(Integer::from(2)),
                Numeric::Integer(Integer::from(5)),
            )
            .unwrap();
        assert_eq!(result.format_value(), "-3");
    }
}
