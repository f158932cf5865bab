use super::sum::numeric_sum;
use super::AggregateRdfOp;
use crate::{DivRdfOp, ScalarBinaryRdfOp};
use sparql_algebra_model::{EvalResult, Integer, IntoTerm, Literal, Numeric, Term};

#[derive(Debug, Default)]
pub struct AvgRdfOp;

impl AvgRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl AggregateRdfOp for AvgRdfOp {
    fn combine(&self, _arity: usize, rows: &[Vec<Term>]) -> EvalResult<Term> {
        let (sum, count) = numeric_sum(rows)?;
        if count == 0 {
            return Ok(Literal::from(Integer::from(0)).into());
        }
        let count = Numeric::Integer(Integer::from(i64::try_from(count)?));
        Ok(DivRdfOp::new().evaluate(sum, count)?.into_term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::vocab::xsd;

    #[test]
    fn average_of_integers_is_decimal() {
        let rows = vec![
            vec![Term::from(Literal::from(1))],
            vec![Term::from(Literal::from(2))],
        ];
        let result = AvgRdfOp::new().combine(1, &rows).unwrap();
        assert_eq!(
            result,
            Term::from(Literal::new_typed_literal("1.5", xsd::DECIMAL))
        );
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(
            AvgRdfOp::new().combine(1, &[]).unwrap(),
            Term::from(Literal::from(0))
        );
    }
}
