use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, NamedNode, TermRef, TypeError};

#[derive(Debug)]
pub struct DatatypeRdfOp;

impl Default for DatatypeRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl DatatypeRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for DatatypeRdfOp {
    type Arg<'data> = TermRef<'data>;
    type Result<'data> = NamedNode;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            TermRef::Literal(literal) => Ok(literal.datatype().into_owned()),
            _ => TypeError::raise(format!("{value} has no datatype")),
        }
    }
}
