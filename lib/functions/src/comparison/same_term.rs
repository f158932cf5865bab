use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TermRef};

#[derive(Debug)]
pub struct SameTermRdfOp;

impl Default for SameTermRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SameTermRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for SameTermRdfOp {
    type ArgLhs<'data> = TermRef<'data>;
    type ArgRhs<'data> = TermRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        Ok((lhs == rhs).into())
    }
}
