use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, SimpleLiteralRef, TermRef, TypeError};

/// Returns the lexical form of a literal or the string of an IRI.
#[derive(Debug)]
pub struct StrRdfOp;

impl Default for StrRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for StrRdfOp {
    type Arg<'data> = TermRef<'data>;
    type Result<'data> = SimpleLiteralRef<'data>;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            TermRef::NamedNode(value) => Ok(SimpleLiteralRef::new(value.as_str())),
            TermRef::Literal(value) => Ok(SimpleLiteralRef::new(value.value())),
            TermRef::BlankNode(_) | TermRef::Triple(_) => {
                TypeError::raise(format!("STR is not defined for {value}"))
            }
        }
    }
}
