use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{EvalResult, Integer, Term, TermRef, TypedValueRef};
use std::cmp::Ordering;

/// A total order over optional terms.
///
/// Unbound values come first, followed by blank nodes, IRIs, quoted triples and literals. Literals
/// are ordered by value if they are comparable and by their lexical form, datatype and language
/// otherwise.
///
/// Relevant Resources:
/// - [SPARQL 1.1 - ORDER BY](https://www.w3.org/TR/sparql11-query/#modOrderBy)
pub fn compare_terms(lhs: Option<&Term>, rhs: Option<&Term>) -> Ordering {
    match (lhs, rhs) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(lhs), Some(rhs)) => compare_term_refs(lhs.as_ref(), rhs.as_ref()),
    }
}

fn compare_term_refs(lhs: TermRef<'_>, rhs: TermRef<'_>) -> Ordering {
    let lhs_value = TypedValueRef::from_term(lhs);
    if let Some(ordering) = lhs_value.partial_cmp(&TypedValueRef::from_term(rhs)) {
        return ordering;
    }
    match (lhs, rhs) {
        (TermRef::Literal(lhs), TermRef::Literal(rhs)) => lhs
            .value()
            .cmp(rhs.value())
            .then_with(|| lhs.datatype().as_str().cmp(rhs.datatype().as_str()))
            .then_with(|| lhs.language().cmp(&rhs.language())),
        _ => lhs.to_string().cmp(&rhs.to_string()),
    }
}

/// The `<=>` operator. Returns `-1`, `0` or `1` according to [compare_terms].
#[derive(Debug)]
pub struct CompareRdfOp;

impl Default for CompareRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for CompareRdfOp {
    type ArgLhs<'data> = TermRef<'data>;
    type ArgRhs<'data> = TermRef<'data>;
    type Result<'data> = Integer;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        Ok(match compare_term_refs(lhs, rhs) {
            Ordering::Less => Integer::from(-1),
            Ordering::Equal => Integer::from(0),
            Ordering::Greater => Integer::from(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::{BlankNode, Literal, NamedNode};

    #[test]
    fn kinds_are_ordered() {
        let blank = Term::from(BlankNode::new_unchecked("b"));
        let iri = Term::from(NamedNode::new_unchecked("http://example.com/"));
        let literal = Term::from(Literal::from(1));

        assert_eq!(compare_terms(None, Some(&blank)), Ordering::Less);
        assert_eq!(compare_terms(Some(&blank), Some(&iri)), Ordering::Less);
        assert_eq!(compare_terms(Some(&iri), Some(&literal)), Ordering::Less);
    }

    #[test]
    fn incomparable_literals_fall_back_to_lexical_form() {
        let number = Term::from(Literal::from(10));
        let text = Term::from(Literal::from("1"));
        assert_eq!(compare_terms(Some(&text), Some(&number)), Ordering::Less);
        assert_eq!(compare_terms(Some(&number), Some(&text)), Ordering::Greater);
    }
}
