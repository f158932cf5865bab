use crate::effective_boolean_value;
use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TermRef};

/// Negates the effective boolean value of its argument.
#[derive(Debug)]
pub struct NotRdfOp;

impl Default for NotRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl NotRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for NotRdfOp {
    type Arg<'data> = TermRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok((!effective_boolean_value(value)?).into())
    }
}
