use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{DateTime, EvalResult, SimpleLiteral};

#[derive(Debug)]
pub struct TzRdfOp;

impl Default for TzRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl TzRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for TzRdfOp {
    type Arg<'data> = DateTime;
    type Result<'data> = SimpleLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let result = value
            .timezone_offset()
            .map(|offset| offset.to_string())
            .unwrap_or_default();
        Ok(SimpleLiteral::new(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tz_is_empty_without_timezone() {
        let value = DateTime::from_str("2011-01-10T14:45:13").unwrap();
        assert_eq!(TzRdfOp::new().evaluate(value).unwrap().value, "");
    }

    #[test]
    fn tz_of_utc() {
        let value = DateTime::from_str("2011-01-10T14:45:13Z").unwrap();
        assert_eq!(TzRdfOp::new().evaluate(value).unwrap().value, "Z");
    }
}
