use crate::{AlgebraError, AlgebraResult, EvaluationOptions, Operand, Operator, OperatorKind};
use itertools::Itertools;
use sparql_algebra_functions::aggregates::{
    AggregateRdfOp, AvgRdfOp, CountRdfOp, GroupConcatRdfOp, MaxRdfOp, MinRdfOp, SampleRdfOp,
    SumRdfOp, DEFAULT_SEPARATOR,
};
use sparql_algebra_model::{Bindings, Term, TypeError, Variable};
use std::collections::HashMap;

/// The marker that makes an aggregate ignore duplicate operand tuples.
const DISTINCT_MARKER: &str = "distinct";

impl Operator {
    /// Evaluates this aggregate over `solutions`.
    ///
    /// The operands are evaluated against each solution. Operand values that fail to evaluate are
    /// dropped from the tuple of their solution instead of failing the aggregate. With the
    /// `distinct` marker, duplicate tuples are removed before combining them.
    pub fn aggregate<B: Bindings>(
        &self,
        solutions: &[B],
        options: &EvaluationOptions,
    ) -> AlgebraResult<Term> {
        let kind = self.kind();
        let mut operands = self.operands();
        let distinct = operands
            .first()
            .is_some_and(|operand| operand.is_symbol(DISTINCT_MARKER));
        if distinct {
            operands = &operands[1..];
        }
        let (separators, operands): (Vec<&Operand>, Vec<&Operand>) = operands
            .iter()
            .partition(|operand| is_separator(operand));

        let combiner: Box<dyn AggregateRdfOp> = match kind {
            OperatorKind::Count => Box::new(CountRdfOp::new()),
            OperatorKind::Sum => Box::new(SumRdfOp::new()),
            OperatorKind::Avg => Box::new(AvgRdfOp::new()),
            OperatorKind::Min => Box::new(MinRdfOp::new()),
            OperatorKind::Max => Box::new(MaxRdfOp::new()),
            OperatorKind::Sample => Box::new(SampleRdfOp::new()),
            OperatorKind::GroupConcat => {
                let separator = match separators.first() {
                    Some(separator) => separator_value(separator)?,
                    None => DEFAULT_SEPARATOR.to_owned(),
                };
                Box::new(GroupConcatRdfOp::new(separator))
            }
            _ => {
                return Err(AlgebraError::NotImplemented(format!(
                    "Aggregating with `{kind}`"
                )))
            }
        };

        let rows = solutions
            .iter()
            .map(|solution| evaluate_row(&operands, solution, options));
        let rows: Vec<Vec<Term>> = if distinct {
            rows.unique().collect()
        } else {
            rows.collect()
        };
        tracing::debug!(aggregate = %kind, rows = rows.len(), distinct, "Combining rows");
        Ok(combiner.combine(operands.len(), &rows)?)
    }
}

fn evaluate_row(
    operands: &[&Operand],
    solution: &dyn Bindings,
    options: &EvaluationOptions,
) -> Vec<Term> {
    operands
        .iter()
        .filter_map(|operand| match operand.evaluate(solution, options) {
            Ok(term) => Some(term),
            Err(error) => {
                tracing::debug!(%error, "Dropping aggregate operand");
                None
            }
        })
        .collect()
}

fn is_separator(operand: &Operand) -> bool {
    operand
        .as_operator()
        .is_some_and(|operator| operator.kind() == OperatorKind::Separator)
}

fn separator_value(separator: &Operand) -> AlgebraResult<String> {
    let value = separator
        .as_operator()
        .and_then(|operator| operator.operands().first())
        .map(|operand| {
            operand.evaluate(
                &HashMap::<Variable, Term>::new(),
                &EvaluationOptions::default(),
            )
        })
        .transpose()?;
    match value {
        Some(Term::Literal(literal)) => Ok(literal.value().to_owned()),
        _ => Err(TypeError::new("The separator must be a literal").into()),
    }
}

#[cfg(test)]
mod tests {
    use crate::{compile, AlgebraResult, CompileOptions, EvaluationOptions};
    use sparql_algebra_model::vocab::xsd;
    use sparql_algebra_model::{Literal, Solution, Term, Variable};

    fn solutions(values: &[Option<i32>]) -> Vec<Solution> {
        values
            .iter()
            .map(|value| {
                Solution::from_pairs([(
                    Variable::new_unchecked("x"),
                    value.map(|value| Term::from(Literal::from(value))),
                )])
            })
            .collect()
    }

    fn aggregate(text: &str, solutions: &[Solution]) -> AlgebraResult<Term> {
        compile(text, &CompileOptions::default())
            .unwrap()
            .into_operator()
            .unwrap()
            .aggregate(solutions, &EvaluationOptions::default())
    }

    fn integer(value: &str) -> Term {
        Literal::new_typed_literal(value, xsd::INTEGER).into()
    }

    #[test]
    fn failing_operands_are_dropped() {
        let solutions = solutions(&[Some(1), None, Some(2)]);
        assert_eq!(aggregate("(count ?x)", &solutions).unwrap(), integer("2"));
        assert_eq!(aggregate("(count)", &solutions).unwrap(), integer("3"));
        assert_eq!(aggregate("(sum ?x)", &solutions).unwrap(), integer("3"));
    }

    #[test]
    fn distinct_removes_duplicate_tuples() {
        let solutions = solutions(&[Some(1), Some(1), Some(2), Some(1)]);
        assert_eq!(aggregate("(count ?x)", &solutions).unwrap(), integer("4"));
        assert_eq!(
            aggregate("(count distinct ?x)", &solutions).unwrap(),
            integer("2")
        );
        assert_eq!(
            aggregate("(sum distinct ?x)", &solutions).unwrap(),
            integer("3")
        );
    }

    #[test]
    fn group_concat_separator() {
        let solutions = solutions(&[Some(1), Some(2)]);
        assert_eq!(
            aggregate("(group_concat ?x)", &solutions).unwrap(),
            Literal::from("1 2").into()
        );
        assert_eq!(
            aggregate("(group_concat (separator \", \") ?x)", &solutions).unwrap(),
            Literal::from("1, 2").into()
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(aggregate("(sum ?x)", &[]).unwrap(), integer("0"));
        assert!(aggregate("(max ?x)", &[]).unwrap_err().is_type_error());
    }

    #[test]
    fn scalar_operators_are_not_aggregates() {
        assert!(aggregate("(str ?x)", &[]).is_err());
    }
}
