//! The boundary to graph stores.
//!
//! Stores implement [Queryable] by matching single triple patterns. The executable operators
//! ([Operator::execute]) build on top of it. Sequences of solutions can be filtered with
//! expressions through [FilterableSequence].

mod filter;
mod pattern;

pub use filter::{FilterableSequence, SolutionFilter};
pub use pattern::triple_pattern;

use crate::{AlgebraError, AlgebraResult, EvaluationOptions, Operand, Operator, OperatorKind};
use sparql_algebra_model::{Bindings, Solution, TriplePattern, TypeError};

/// A store that can be queried with graph patterns.
pub trait Queryable: Send + Sync {
    /// Whether the store can currently be read.
    fn is_readable(&self) -> bool {
        true
    }

    /// Returns one solution per match of `pattern`, binding the variables of the pattern.
    fn query_pattern(&self, pattern: &TriplePattern) -> AlgebraResult<Vec<Solution>>;

    /// Queries the store with a triple pattern or an executable operator.
    ///
    /// Fails with [AlgebraError::NotReadable] without touching the store if it cannot be read.
    fn query(
        &self,
        operator: &Operator,
        options: &EvaluationOptions,
    ) -> AlgebraResult<Vec<Solution>> {
        if !self.is_readable() {
            return Err(AlgebraError::NotReadable);
        }
        match operator.kind() {
            OperatorKind::PatternTriple => self.query_pattern(&triple_pattern(operator)?),
            _ if operator.is_executable() => operator.execute(self, options),
            kind => Err(AlgebraError::NotImplemented(format!("Querying with `{kind}`"))),
        }
    }
}

impl Operator {
    /// Executes this graph pattern against `store`.
    ///
    /// Supports triple patterns, `bgp`, `join`, `union`, `filter` and the `base` and `prefix`
    /// wrappers.
    pub fn execute<Q: Queryable + ?Sized>(
        &self,
        store: &Q,
        options: &EvaluationOptions,
    ) -> AlgebraResult<Vec<Solution>> {
        let kind = self.kind();
        tracing::debug!(operator = %kind, "Executing operator");
        match (kind, self.operands()) {
            (OperatorKind::PatternTriple, _) => store.query(self, options),
            (OperatorKind::Bgp, patterns) => {
                let mut solutions = vec![Solution::new()];
                for pattern in patterns {
                    let pattern = child(pattern)?;
                    solutions = extend(store, pattern, solutions, options)?;
                }
                Ok(solutions)
            }
            (OperatorKind::Join, [lhs, rhs]) => {
                let lhs = store.query(child(lhs)?, options)?;
                let rhs = store.query(child(rhs)?, options)?;
                Ok(lhs
                    .iter()
                    .flat_map(|lhs| rhs.iter().filter_map(|rhs| lhs.merge(rhs)))
                    .collect())
            }
            (OperatorKind::Union, [lhs, rhs]) => {
                let mut solutions = store.query(child(lhs)?, options)?;
                solutions.extend(store.query(child(rhs)?, options)?);
                Ok(solutions)
            }
            (OperatorKind::Filter, [expression, body]) => {
                let mut solutions = store.query(child(body)?, options)?;
                let expressions = match expression.as_operator() {
                    Some(list) if list.kind() == OperatorKind::ExprList => list.operands(),
                    _ => std::slice::from_ref(expression),
                };
                for expression in expressions {
                    solutions = solutions.filter_with_options(expression.clone(), options)?;
                }
                Ok(solutions)
            }
            (OperatorKind::Base | OperatorKind::Prefix, [_, body]) => {
                store.query(child(body)?, options)
            }
            _ => Err(AlgebraError::NotImplemented(format!("Executing `{kind}`"))),
        }
    }
}

fn child(operand: &Operand) -> AlgebraResult<&Operator> {
    operand
        .as_operator()
        .ok_or_else(|| TypeError::new(format!("Expected a graph pattern, found {operand}")).into())
}

/// Extends each solution with the matches of `pattern` after substituting its bindings.
fn extend<Q: Queryable + ?Sized>(
    store: &Q,
    pattern: &Operator,
    solutions: Vec<Solution>,
    options: &EvaluationOptions,
) -> AlgebraResult<Vec<Solution>> {
    let mut result = Vec::new();
    for solution in solutions {
        let bound = pattern.clone().replace_vars(&mut |variable| {
            solution
                .get(variable.as_ref())
                .cloned()
                .map(Operand::Term)
        });
        for matched in store.query(&bound, options)? {
            result.extend(solution.merge(&matched));
        }
    }
    Ok(result)
}
