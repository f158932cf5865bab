use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{EvalResult, Literal, SimpleLiteralRef, TypeError};

#[derive(Debug)]
pub struct StrLangRdfOp;

impl Default for StrLangRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrLangRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for StrLangRdfOp {
    type ArgLhs<'data> = SimpleLiteralRef<'data>;
    type ArgRhs<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = Literal;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        Literal::new_language_tagged_literal(lhs.value, rhs.value).map_err(TypeError::wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_the_language_tag() {
        let op = StrLangRdfOp::new();
        assert!(op
            .evaluate(SimpleLiteralRef::new("chat"), SimpleLiteralRef::new("fr"))
            .is_ok());
        assert!(op
            .evaluate(SimpleLiteralRef::new("chat"), SimpleLiteralRef::new("not a tag"))
            .is_err());
    }
}
