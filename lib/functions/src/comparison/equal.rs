use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TermRef, TypeError, TypedValueRef};
use std::cmp::Ordering;

/// Implements SPARQL's `RDFterm-equal` extended with value comparison.
///
/// Literals of a known datatype are compared by value. Two literals of which at least one has an
/// unknown datatype (or an ill-formed lexical form) can only be proven equal. If they are not
/// identical, the comparison raises an error.
///
/// Relevant Resources:
/// - [SPARQL 1.1 - RDFterm-equal](https://www.w3.org/TR/sparql11-query/#func-RDFterm-equal)
pub fn rdf_term_equal(lhs: TermRef<'_>, rhs: TermRef<'_>) -> EvalResult<bool> {
    if lhs == rhs {
        return Ok(true);
    }

    let lhs_value = TypedValueRef::from_term(lhs);
    let rhs_value = TypedValueRef::from_term(rhs);
    if !lhs_value.is_literal() || !rhs_value.is_literal() {
        return Ok(false);
    }

    match (lhs_value, rhs_value) {
        (TypedValueRef::OtherLiteral(_), _) | (_, TypedValueRef::OtherLiteral(_)) => {
            TypeError::raise(format!("Cannot decide whether {lhs} and {rhs} are equal"))
        }
        _ => Ok(lhs_value.partial_cmp(&rhs_value) == Some(Ordering::Equal)),
    }
}

#[derive(Debug)]
pub struct EqualRdfOp;

impl Default for EqualRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl EqualRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for EqualRdfOp {
    type ArgLhs<'data> = TermRef<'data>;
    type ArgRhs<'data> = TermRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        rdf_term_equal(lhs, rhs).map(Into::into)
    }
}

#[derive(Debug)]
pub struct NotEqualRdfOp;

impl Default for NotEqualRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl NotEqualRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for NotEqualRdfOp {
    type ArgLhs<'data> = TermRef<'data>;
    type ArgRhs<'data> = TermRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        rdf_term_equal(lhs, rhs).map(|equal| (!equal).into())
    }
}
