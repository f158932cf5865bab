use super::{first_values, AggregateRdfOp};
use crate::{AddRdfOp, ScalarBinaryRdfOp};
use sparql_algebra_model::{EvalResult, Integer, IntoTerm, Numeric, RdfValueRef, Term};

#[derive(Debug, Default)]
pub struct SumRdfOp;

impl SumRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

/// Sums the first operand of each tuple. Returns the number of summed values alongside the sum.
pub(super) fn numeric_sum(rows: &[Vec<Term>]) -> EvalResult<(Numeric, usize)> {
    let add = AddRdfOp::new();
    let mut sum = Numeric::Integer(Integer::from(0));
    let mut count = 0;
    for value in first_values(rows) {
        let value = Numeric::from_term(value.as_ref())?;
        sum = add.evaluate(sum, value)?;
        count += 1;
    }
    Ok((sum, count))
}

impl AggregateRdfOp for SumRdfOp {
    fn combine(&self, _arity: usize, rows: &[Vec<Term>]) -> EvalResult<Term> {
        let (sum, _) = numeric_sum(rows)?;
        Ok(sum.into_term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::Literal;

    #[test]
    fn sum_promotes_types() {
        let rows = vec![
            vec![Term::from(Literal::from(1))],
            vec![Term::from(Literal::from(2.5))],
        ];
        let result = SumRdfOp::new().combine(1, &rows).unwrap();
        assert_eq!(result, Term::from(Literal::from(3.5)));
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(
            SumRdfOp::new().combine(1, &[]).unwrap(),
            Term::from(Literal::from(0))
        );
    }

    #[test]
    fn sum_rejects_non_numeric_values() {
        let rows = vec![vec![Term::from(Literal::from("a"))]];
        assert!(SumRdfOp::new().combine(1, &rows).is_err());
    }
}
