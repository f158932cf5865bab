use super::AggregateRdfOp;
use sparql_algebra_model::{EvalResult, Integer, Literal, Term};

/// Counts the tuples in which every operand has a value.
#[derive(Debug, Default)]
pub struct CountRdfOp;

impl CountRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl AggregateRdfOp for CountRdfOp {
    fn combine(&self, arity: usize, rows: &[Vec<Term>]) -> EvalResult<Term> {
        let count = rows.iter().filter(|row| row.len() == arity).count();
        let count = i64::try_from(count)?;
        Ok(Literal::from(Integer::from(count)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_skips_incomplete_tuples() {
        let rows = vec![
            vec![Term::from(Literal::from(1))],
            vec![],
            vec![Term::from(Literal::from(2))],
        ];
        assert_eq!(
            CountRdfOp::new().combine(1, &rows).unwrap(),
            Term::from(Literal::from(2))
        );
    }

    #[test]
    fn count_without_operands_counts_rows() {
        let rows = vec![vec![], vec![]];
        assert_eq!(
            CountRdfOp::new().combine(0, &rows).unwrap(),
            Term::from(Literal::from(2))
        );
    }
}
