use super::{first_values, AggregateRdfOp};
use crate::compare_terms;
use sparql_algebra_model::{EvalResult, Term, TypeError};
use std::cmp::Ordering;

fn select(rows: &[Vec<Term>], name: &str, wanted: Ordering) -> EvalResult<Term> {
    let mut selected: Option<&Term> = None;
    for value in first_values(rows) {
        if !value.is_literal() {
            return TypeError::raise(format!("{name} expects literals, found {value}"));
        }
        let replace = selected
            .map_or(true, |current| compare_terms(Some(value), Some(current)) == wanted);
        if replace {
            selected = Some(value);
        }
    }
    match selected {
        Some(value) => Ok(value.clone()),
        None => TypeError::raise(format!("{name} of an empty group")),
    }
}

/// The smallest value according to the total order of terms.
#[derive(Debug, Default)]
pub struct MinRdfOp;

impl MinRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl AggregateRdfOp for MinRdfOp {
    fn combine(&self, _arity: usize, rows: &[Vec<Term>]) -> EvalResult<Term> {
        select(rows, "MIN", Ordering::Less)
    }
}

/// The largest value according to the total order of terms.
#[derive(Debug, Default)]
pub struct MaxRdfOp;

impl MaxRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl AggregateRdfOp for MaxRdfOp {
    fn combine(&self, _arity: usize, rows: &[Vec<Term>]) -> EvalResult<Term> {
        select(rows, "MAX", Ordering::Greater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::{Literal, NamedNode};

    fn rows() -> Vec<Vec<Term>> {
        vec![
            vec![Term::from(Literal::from(3))],
            vec![Term::from(Literal::from(1.5))],
            vec![],
            vec![Term::from(Literal::from(10))],
        ]
    }

    #[test]
    fn min_and_max_compare_by_value() {
        assert_eq!(
            MinRdfOp::new().combine(1, &rows()).unwrap(),
            Term::from(Literal::from(1.5))
        );
        assert_eq!(
            MaxRdfOp::new().combine(1, &rows()).unwrap(),
            Term::from(Literal::from(10))
        );
    }

    #[test]
    fn empty_and_non_literal_input() {
        assert!(MinRdfOp::new().combine(1, &[]).is_err());
        let rows = vec![vec![Term::from(NamedNode::new_unchecked("http://e.com/"))]];
        assert!(MaxRdfOp::new().combine(1, &rows).is_err());
    }
}
