use crate::{AlgebraError, AlgebraResult, EvaluationOptions, Operand, Operator};
use sparql_algebra_functions::effective_boolean_value;
use sparql_algebra_model::Solution;
use std::fmt::{Debug, Formatter};

/// The condition of [FilterableSequence::filter].
pub enum SolutionFilter {
    /// Keeps the solutions for which the expression has the effective boolean value `true`.
    Expression(Operand),
    /// Keeps the solutions accepted by the predicate.
    Predicate(Box<dyn Fn(&Solution) -> bool + Send + Sync>),
}

impl SolutionFilter {
    pub fn predicate(predicate: impl Fn(&Solution) -> bool + Send + Sync + 'static) -> Self {
        SolutionFilter::Predicate(Box::new(predicate))
    }
}

impl From<Operator> for SolutionFilter {
    fn from(operator: Operator) -> Self {
        SolutionFilter::Expression(operator.into())
    }
}

impl From<Operand> for SolutionFilter {
    fn from(operand: Operand) -> Self {
        SolutionFilter::Expression(operand)
    }
}

impl Debug for SolutionFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionFilter::Expression(expression) => {
                f.debug_tuple("Expression").field(expression).finish()
            }
            SolutionFilter::Predicate(_) => f.write_str("Predicate"),
        }
    }
}

/// A sequence of solutions that can be filtered.
pub trait FilterableSequence: Sized {
    /// Filters the sequence with the default [EvaluationOptions].
    fn filter(self, filter: impl Into<SolutionFilter>) -> AlgebraResult<Self> {
        self.filter_with_options(filter, &EvaluationOptions::default())
    }

    /// Removes the solutions rejected by `filter`.
    ///
    /// Solutions for which the expression raises a type error are removed. Other errors are
    /// returned.
    fn filter_with_options(
        self,
        filter: impl Into<SolutionFilter>,
        options: &EvaluationOptions,
    ) -> AlgebraResult<Self>;
}

impl FilterableSequence for Vec<Solution> {
    fn filter_with_options(
        self,
        filter: impl Into<SolutionFilter>,
        options: &EvaluationOptions,
    ) -> AlgebraResult<Self> {
        let expression = match filter.into() {
            SolutionFilter::Predicate(predicate) => {
                return Ok(self.into_iter().filter(|solution| predicate(solution)).collect())
            }
            SolutionFilter::Expression(expression) => expression,
        };

        let mut result = Vec::with_capacity(self.len());
        for solution in self {
            let accepted = expression
                .evaluate(&solution, options)
                .and_then(|term| Ok(effective_boolean_value(term.as_ref())?));
            match accepted {
                Ok(true) => result.push(solution),
                Ok(false) => {}
                Err(AlgebraError::Type(error)) => {
                    tracing::debug!(%error, %solution, "Filter raised a type error");
                }
                Err(error) => return Err(error),
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile, CompileOptions};
    use sparql_algebra_model::{Literal, Term, Variable};

    fn solutions() -> Vec<Solution> {
        [Some(1), Some(0), None]
            .into_iter()
            .map(|value| {
                Solution::from_pairs([(
                    Variable::new_unchecked("x"),
                    value.map(|value: i32| Term::from(Literal::from(value))),
                )])
            })
            .collect()
    }

    #[test]
    fn expressions_use_the_effective_boolean_value() {
        let expression = compile("?x", &CompileOptions::default()).unwrap();
        let filtered = solutions().filter(expression).unwrap();
        assert_eq!(filtered, solutions()[..1]);
    }

    #[test]
    fn predicates() {
        let filtered = solutions()
            .filter(SolutionFilter::predicate(|solution| solution.is_empty()))
            .unwrap();
        assert_eq!(filtered, solutions()[2..]);
    }

    #[test]
    fn non_type_errors_are_returned() {
        let expression = compile("(exists (bgp))", &CompileOptions::default()).unwrap();
        assert!(solutions().filter(expression).is_err());
    }
}
