//! Evaluation of operator trees against a single binding.

mod builtins;
mod memo;

pub(crate) use memo::MemoCache;

use crate::{AlgebraError, AlgebraResult, EvaluationOptions, Operand, Operator, OperatorKind};
use rustc_hash::FxHashMap;
use sparql_algebra_functions::{
    dispatch_unary, effective_boolean_value, rdf_term_equal, sparql_and, sparql_or, BNodeRdfOp,
};
use sparql_algebra_model::{Bindings, EvalResult, Literal, Term, TypeError, Variable};

impl Operator {
    /// Evaluates this operator against `bindings`.
    ///
    /// Fails with a [TypeError] if a variable is unbound or an operator rejects its operands.
    /// Operators that only support execution or aggregation are reported as
    /// [AlgebraError::NotImplemented].
    pub fn evaluate(
        &self,
        bindings: &dyn Bindings,
        options: &EvaluationOptions,
    ) -> AlgebraResult<Term> {
        Evaluation::new(bindings, options).operator(self, 0)
    }

    /// Evaluates this operator and coerces the result to its effective boolean value.
    pub fn evaluate_ebv(
        &self,
        bindings: &dyn Bindings,
        options: &EvaluationOptions,
    ) -> AlgebraResult<bool> {
        let term = self.evaluate(bindings, options)?;
        Ok(effective_boolean_value(term.as_ref())?)
    }
}

impl Operand {
    /// Evaluates this operand against `bindings`. Terms evaluate to themselves and variables to
    /// their value.
    pub fn evaluate(
        &self,
        bindings: &dyn Bindings,
        options: &EvaluationOptions,
    ) -> AlgebraResult<Term> {
        Evaluation::new(bindings, options).operand(self, 0)
    }
}

/// The state of a single evaluation call.
struct Evaluation<'call> {
    bindings: &'call dyn Bindings,
    options: &'call EvaluationOptions,
    /// The blank nodes created by `bnode` for each label.
    blank_nodes: FxHashMap<String, Term>,
}

impl<'call> Evaluation<'call> {
    fn new(bindings: &'call dyn Bindings, options: &'call EvaluationOptions) -> Self {
        Self {
            bindings,
            options,
            blank_nodes: FxHashMap::default(),
        }
    }

    fn operand(&mut self, operand: &Operand, depth: usize) -> AlgebraResult<Term> {
        match operand {
            Operand::Operator(operator) => self.operator(operator, depth),
            Operand::Term(term) => Ok(term.clone()),
            Operand::Variable(variable) => Ok(self.variable(variable)?),
            Operand::Symbol(symbol) => {
                Err(TypeError::new(format!("The symbol `{symbol}` has no value")).into())
            }
            Operand::List(_) => Err(TypeError::new("A list has no value").into()),
        }
    }

    fn variable(&self, variable: &Variable) -> EvalResult<Term> {
        if !self.bindings.is_bound(variable.as_ref()) {
            return TypeError::raise(format!("Unbound variable {variable}"));
        }
        self.bindings
            .get(variable.as_ref())
            .cloned()
            .ok_or_else(|| TypeError::new(format!("Unbound variable {variable}")))
    }

    fn ebv(&mut self, operand: &Operand, depth: usize) -> AlgebraResult<bool> {
        let term = self.operand(operand, depth)?;
        Ok(effective_boolean_value(term.as_ref())?)
    }

    fn operator(&mut self, operator: &Operator, depth: usize) -> AlgebraResult<Term> {
        let kind = operator.kind();
        tracing::trace!(depth, operator = %kind, "Evaluating operator");
        if !kind.is_evaluatable() {
            return Err(AlgebraError::NotImplemented(format!("Evaluating `{kind}`")));
        }

        let operands = operator.operands();
        let depth = depth + 1;
        match (kind, operands) {
            (OperatorKind::Bound, [operand]) => {
                let Operand::Variable(variable) = operand else {
                    return Err(TypeError::new("bound expects a variable").into());
                };
                Ok(Literal::from(self.bindings.is_bound(variable.as_ref())).into())
            }
            (OperatorKind::If, [condition, then, otherwise]) => {
                let branch = if self.ebv(condition, depth)? {
                    then
                } else {
                    otherwise
                };
                self.operand(branch, depth)
            }
            (OperatorKind::Coalesce, _) => {
                for operand in operands {
                    if let Ok(term) = recoverable(self.operand(operand, depth))? {
                        return Ok(term);
                    }
                }
                Err(TypeError::new("No operand of coalesce could be evaluated").into())
            }
            (OperatorKind::And, [lhs, rhs]) => {
                let lhs = recoverable(self.ebv(lhs, depth))?;
                let rhs = recoverable(self.ebv(rhs, depth))?;
                Ok(Literal::from(sparql_and(lhs, rhs)?).into())
            }
            (OperatorKind::Or, [lhs, rhs]) => {
                let lhs = recoverable(self.ebv(lhs, depth))?;
                let rhs = recoverable(self.ebv(rhs, depth))?;
                Ok(Literal::from(sparql_or(lhs, rhs)?).into())
            }
            (OperatorKind::In | OperatorKind::NotIn, [needle, candidates @ ..]) => {
                let found = self.contains(needle, candidates, depth)?;
                Ok(Literal::from(found == (kind == OperatorKind::In)).into())
            }
            (OperatorKind::Exists | OperatorKind::NotExists, [pattern]) => {
                let exists = self.exists(pattern)?;
                Ok(Literal::from(exists == (kind == OperatorKind::Exists)).into())
            }
            (OperatorKind::BNode, [label]) => {
                let label = self.operand(label, depth)?;
                let fresh = dispatch_unary(&BNodeRdfOp::new(), std::slice::from_ref(&label))?;
                match label {
                    Term::Literal(literal) => Ok(self
                        .blank_nodes
                        .entry(literal.value().to_owned())
                        .or_insert(fresh)
                        .clone()),
                    _ => Ok(fresh),
                }
            }
            (OperatorKind::Asc | OperatorKind::Desc, [operand])
            | (OperatorKind::Base | OperatorKind::Prefix, [_, operand]) => {
                self.operand(operand, depth)
            }
            _ => self.apply(operator, depth),
        }
    }

    /// Evaluates the operands and applies the combining function of the operator.
    fn apply(&mut self, operator: &Operator, depth: usize) -> AlgebraResult<Term> {
        let args = operator
            .operands()
            .iter()
            .map(|operand| self.operand(operand, depth))
            .collect::<AlgebraResult<Vec<_>>>()?;

        let kind = operator.kind();
        let memoize = self.options.memoize();
        let memoize = memoize.is_enabled() && kind.is_deterministic();
        if memoize {
            if let Some(result) = operator.cache().get(&args) {
                return Ok(result);
            }
        }

        let result = builtins::apply(kind, &args)?;
        if memoize {
            operator
                .cache()
                .insert(args, result.clone(), self.options.memoize().capacity());
        }
        Ok(result)
    }

    /// Implements `in`. Errors only surface if no candidate matches.
    fn contains(
        &mut self,
        needle: &Operand,
        candidates: &[Operand],
        depth: usize,
    ) -> AlgebraResult<bool> {
        let needle = self.operand(needle, depth)?;
        let mut error = None;
        for candidate in candidates {
            let equal = recoverable(self.operand(candidate, depth))?
                .and_then(|candidate| rdf_term_equal(needle.as_ref(), candidate.as_ref()));
            match equal {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(e) => error = Some(e),
            }
        }
        match error {
            Some(error) => Err(error.into()),
            None => Ok(false),
        }
    }

    fn exists(&self, pattern: &Operand) -> AlgebraResult<bool> {
        let Some(queryable) = self.options.queryable() else {
            return Err(AlgebraError::NotImplemented(
                "Evaluating `exists` without a store".to_owned(),
            ));
        };
        let Some(pattern) = pattern.as_operator() else {
            return Err(TypeError::new("exists expects a graph pattern").into());
        };
        let pattern = pattern.clone().replace_vars(&mut |variable| {
            self.bindings
                .get(variable.as_ref())
                .cloned()
                .map(Operand::Term)
        });
        let solutions = queryable.query(&pattern, self.options)?;
        Ok(!solutions.is_empty())
    }
}

/// Separates type errors, which some operators recover from, from all other errors.
fn recoverable<T>(result: AlgebraResult<T>) -> AlgebraResult<EvalResult<T>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(AlgebraError::Type(error)) => Ok(Err(error)),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile, CompileOptions, Memoize};
    use sparql_algebra_model::vocab::xsd;
    use sparql_algebra_model::Solution;
    use std::collections::HashMap;
    use std::num::NonZeroUsize;

    fn evaluate(text: &str, bindings: &dyn Bindings) -> AlgebraResult<Term> {
        compile(text, &CompileOptions::default())
            .unwrap()
            .evaluate(bindings, &EvaluationOptions::default())
    }

    fn evaluate_empty(text: &str) -> AlgebraResult<Term> {
        evaluate(text, &HashMap::<Variable, Term>::new())
    }

    fn boolean(value: bool) -> Term {
        Literal::from(value).into()
    }

    #[test]
    fn arithmetic_promotes_types() {
        assert_eq!(
            evaluate_empty("(+ \"2\"^^xsd:integer \"3.5\"^^xsd:decimal)").unwrap(),
            Literal::new_typed_literal("5.5", xsd::DECIMAL).into()
        );
    }

    #[test]
    fn declared_but_unbound_variables() {
        let mut solution = Solution::new();
        solution.declare(Variable::new_unchecked("x"));
        assert_eq!(evaluate("(bound ?x)", &solution).unwrap(), boolean(false));
        assert!(evaluate("(str ?x)", &solution).unwrap_err().is_type_error());
    }

    #[test]
    fn if_only_evaluates_the_selected_branch() {
        assert_eq!(evaluate_empty("(if true 1 (str ?x))").unwrap(), Literal::from(1).into());
        assert!(evaluate_empty("(if (str ?x) 1 2)").is_err());
    }

    #[test]
    fn coalesce_skips_errors() {
        assert_eq!(
            evaluate_empty("(coalesce ?x (/ 1 0) \"a\")").unwrap(),
            Literal::from("a").into()
        );
        assert!(evaluate_empty("(coalesce ?x)").is_err());
    }

    #[test]
    fn logical_connectives_mask_errors() {
        assert_eq!(evaluate_empty("(|| ?x true)").unwrap(), boolean(true));
        assert_eq!(evaluate_empty("(&& false ?x)").unwrap(), boolean(false));
        assert!(evaluate_empty("(&& true ?x)").is_err());
    }

    #[test]
    fn in_and_not_in() {
        assert_eq!(evaluate_empty("(in 2 1 2 3)").unwrap(), boolean(true));
        assert_eq!(evaluate_empty("(notin 4 1 2 3)").unwrap(), boolean(true));
        assert_eq!(evaluate_empty("(in 1 ?x 1)").unwrap(), boolean(true));
        assert!(evaluate_empty("(in 2 ?x 1)").is_err());
        assert_eq!(evaluate_empty("(in 1)").unwrap(), boolean(false));
    }

    #[test]
    fn bnode_labels_are_stable_within_a_call() {
        let result = evaluate_empty("(sameTerm (bnode \"a\") (bnode \"a\"))").unwrap();
        assert_eq!(result, boolean(true));
        let result = evaluate_empty("(sameTerm (bnode \"a\") (bnode \"b\"))").unwrap();
        assert_eq!(result, boolean(false));
    }

    #[test]
    fn exists_needs_a_store() {
        let error = evaluate_empty("(exists (bgp))").unwrap_err();
        assert!(matches!(error, AlgebraError::NotImplemented(_)));
    }

    #[test]
    fn aggregates_cannot_be_evaluated_on_a_single_binding() {
        let error = evaluate_empty("(count)").unwrap_err();
        assert!(matches!(error, AlgebraError::NotImplemented(_)));
    }

    #[test]
    fn memoization_respects_the_capacity() {
        let operator = compile("(str ?x)", &CompileOptions::default())
            .unwrap()
            .into_operator()
            .unwrap();
        let options = EvaluationOptions::default()
            .with_memoize(Memoize::Bounded(NonZeroUsize::new(2).unwrap()));
        for i in 0..5 {
            let bindings = HashMap::from([(Variable::new_unchecked("x"), Term::from(Literal::from(i)))]);
            operator.evaluate(&bindings, &options).unwrap();
        }
        assert_eq!(operator.cache().len(), 2);

        let unmemoized = EvaluationOptions::default();
        let bindings = HashMap::from([(Variable::new_unchecked("x"), Term::from(Literal::from(9)))]);
        operator.evaluate(&bindings, &unmemoized).unwrap();
        assert_eq!(operator.cache().len(), 2);
    }
}
