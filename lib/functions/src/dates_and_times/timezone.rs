use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{DateTime, DayTimeDuration, EvalResult, TypeError};

#[derive(Debug)]
pub struct TimezoneRdfOp;

impl Default for TimezoneRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for TimezoneRdfOp {
    type Arg<'data> = DateTime;
    type Result<'data> = DayTimeDuration;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value.timezone() {
            Some(timezone) => Ok(timezone),
            None => TypeError::raise(format!("{value} has no timezone")),
        }
    }
}
