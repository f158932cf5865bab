use super::{first_values, AggregateRdfOp, DEFAULT_SEPARATOR};
use sparql_algebra_model::{EvalResult, Literal, Term, TypeError};

/// Concatenates the lexical forms of the values, separated by `separator`.
#[derive(Debug)]
pub struct GroupConcatRdfOp {
    separator: String,
}

impl Default for GroupConcatRdfOp {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl GroupConcatRdfOp {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl AggregateRdfOp for GroupConcatRdfOp {
    fn combine(&self, _arity: usize, rows: &[Vec<Term>]) -> EvalResult<Term> {
        let mut value = String::new();
        for (i, term) in first_values(rows).enumerate() {
            let Term::Literal(literal) = term else {
                return TypeError::raise(format!("GROUP_CONCAT expects literals, found {term}"));
            };
            if i > 0 {
                value += &self.separator;
            }
            value += literal.value();
        }
        Ok(Literal::new_simple_literal(value).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_with_separator() {
        let rows = vec![
            vec![Term::from(Literal::from("a"))],
            vec![Term::from(Literal::new_language_tagged_literal_unchecked("b", "en"))],
            vec![Term::from(Literal::from(1))],
        ];
        assert_eq!(
            GroupConcatRdfOp::new(", ").combine(1, &rows).unwrap(),
            Term::from(Literal::from("a, b, 1"))
        );
        assert_eq!(
            GroupConcatRdfOp::default().combine(1, &rows).unwrap(),
            Term::from(Literal::from("a b 1"))
        );
    }

    #[test]
    fn empty_group_is_empty_string() {
        assert_eq!(
            GroupConcatRdfOp::default().combine(1, &[]).unwrap(),
            Term::from(Literal::from(""))
        );
    }
}
