use super::{first_values, AggregateRdfOp};
use sparql_algebra_model::{EvalResult, Term, TypeError};

/// Returns an arbitrary value of the group. This implementation picks the first one.
#[derive(Debug, Default)]
pub struct SampleRdfOp;

impl SampleRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl AggregateRdfOp for SampleRdfOp {
    fn combine(&self, _arity: usize, rows: &[Vec<Term>]) -> EvalResult<Term> {
        match first_values(rows).next() {
            Some(value) => Ok(value.clone()),
            None => TypeError::raise("SAMPLE of an empty group"),
        }
    }
}
