use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{DateTime, Decimal, EvalResult, Integer};

/// Generates an operator that extracts one component of an `xsd:dateTime`.
macro_rules! create_date_time_component_op {
    ($NAME: ident, $RESULT: ty, $EXTRACT: expr) => {
        #[derive(Debug)]
        pub struct $NAME;

        impl Default for $NAME {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $NAME {
            pub fn new() -> Self {
                Self {}
            }
        }

        impl ScalarUnaryRdfOp for $NAME {
            type Arg<'data> = DateTime;
            type Result<'data> = $RESULT;

            fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
                let extract: fn(DateTime) -> $RESULT = $EXTRACT;
                Ok(extract(value))
            }
        }
    };
}

create_date_time_component_op!(YearRdfOp, Integer, |value| value.year().into());
create_date_time_component_op!(MonthRdfOp, Integer, |value| i64::from(value.month()).into());
create_date_time_component_op!(DayRdfOp, Integer, |value| i64::from(value.day()).into());
create_date_time_component_op!(HoursRdfOp, Integer, |value| i64::from(value.hour()).into());
create_date_time_component_op!(MinutesRdfOp, Integer, |value| i64::from(value.minute())
    .into());
create_date_time_component_op!(SecondsRdfOp, Decimal, |value| value.second());

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn extracts_components() {
        let value = DateTime::from_str("2011-01-10T14:45:13.815-05:00").unwrap();
        assert_eq!(YearRdfOp::new().evaluate(value).unwrap(), Integer::from(2011));
        assert_eq!(MonthRdfOp::new().evaluate(value).unwrap(), Integer::from(1));
        assert_eq!(DayRdfOp::new().evaluate(value).unwrap(), Integer::from(10));
        assert_eq!(HoursRdfOp::new().evaluate(value).unwrap(), Integer::from(14));
        assert_eq!(MinutesRdfOp::new().evaluate(value).unwrap(), Integer::from(45));
        assert_eq!(
            SecondsRdfOp::new().evaluate(value).unwrap(),
            Decimal::from_str("13.815").unwrap()
        );
    }
}
