use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{checked, Decimal, EvalResult, Numeric, NumericPair, TypeError};

#[derive(Debug)]
pub struct DivRdfOp;

impl Default for DivRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl DivRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for DivRdfOp {
    type ArgLhs<'lhs> = Numeric;
    type ArgRhs<'rhs> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        match NumericPair::with_casts_from(lhs, rhs) {
            // The division of two integers yields a decimal.
            NumericPair::Integer(lhs, rhs) => divide_decimals(lhs.into(), rhs.into()),
            NumericPair::Decimal(lhs, rhs) => divide_decimals(lhs, rhs),
            NumericPair::Float(lhs, rhs) => Ok(Numeric::Float(lhs / rhs)),
            NumericPair::Double(lhs, rhs) => Ok(Numeric::Double(lhs / rhs)),
        }
    }
}

fn divide_decimals(lhs: Decimal, rhs: Decimal) -> EvalResult<Numeric> {
    if rhs == Decimal::from(0) {
        return TypeError::raise("Division by zero");
    }
    checked(lhs.checked_div(rhs), "/").map(Numeric::Decimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::{Double, Integer};

    #[test]
    fn integer_division_is_decimal() {
        let result = DivRdfOp::new()
            .evaluate(
                Numeric::Integer(Integer::from(1)),
                Numeric::Integer(Integer::from(4)),
            )
            .unwrap();
        assert!(matches!(result, Numeric::Decimal(_)));
        assert_eq!(result.format_value(), "0.25");
    }

    #[test]
    fn integer_division_by_zero_is_an_error() {
        let result = DivRdfOp::new().evaluate(
            Numeric::Integer(Integer::from(1)),
            Numeric::Integer(Integer::from(0)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn double_division_by_zero_is_infinite() {
        let result = DivRdfOp::new()
            .evaluate(
                Numeric::Double(Double::from(1.0)),
                Numeric::Integer(Integer::from(0)),
            )
            .unwrap();
        assert_eq!(result.format_value(), "INF");
    }
}
