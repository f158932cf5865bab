use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{checked, EvalResult, Numeric};

#[derive(Debug)]
pub struct RoundRdfOp;

impl Default for RoundRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for RoundRdfOp {
    type Arg<'data> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            Numeric::Integer(value) => Ok(Numeric::Integer(value)),
            Numeric::Decimal(value) => {
                checked(value.checked_round(), "round").map(Numeric::Decimal)
            }
            Numeric::Float(value) => Ok(Numeric::Float(value.round())),
            Numeric::Double(value) => Ok(Numeric::Double(value.round())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::Decimal;
    use std::str::FromStr;

    #[test]
    fn rounds_half_up() {
        let result = RoundRdfOp::new()
            .evaluate(Numeric::Decimal(Decimal::from_str("2.5").unwrap()))
            .unwrap();
        assert_eq!(result.format_value(), "3");
    }
}
