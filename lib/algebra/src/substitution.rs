use crate::{Operand, Operator};
use sparql_algebra_model::Variable;

impl Operator {
    /// Replaces the variables of this tree with the operands returned by `f`.
    ///
    /// Variables for which `f` returns [None] are kept. Aggregates are returned unchanged as their
    /// operands are evaluated per solution rather than against a single binding.
    #[must_use]
    pub fn replace_vars(self, f: &mut impl FnMut(&Variable) -> Option<Operand>) -> Self {
        if self.is_aggregate() {
            return self;
        }
        self.map_operands(|operand| operand.replace_vars(f))
    }

    /// Replaces every aggregate below this operator with the placeholder variable returned by
    /// `f`.
    ///
    /// The caller binds the placeholders to the results of the aggregates, which allows
    /// evaluating the rest of the expression like any other.
    #[must_use]
    pub fn replace_aggregates(self, f: &mut impl FnMut(&Operator) -> Variable) -> Self {
        self.map_operands(|operand| operand.replace_aggregates(f))
    }
}

impl Operand {
    #[must_use]
    pub fn replace_vars(self, f: &mut impl FnMut(&Variable) -> Option<Operand>) -> Self {
        match self {
            Operand::Variable(variable) => f(&variable).unwrap_or(Operand::Variable(variable)),
            Operand::Operator(operator) => operator.replace_vars(f).into(),
            Operand::List(operands) => Operand::List(
                operands
                    .into_iter()
                    .map(|operand| operand.replace_vars(f))
                    .collect(),
            ),
            Operand::Term(_) | Operand::Symbol(_) => self,
        }
    }

    #[must_use]
    pub fn replace_aggregates(self, f: &mut impl FnMut(&Operator) -> Variable) -> Self {
        match self {
            Operand::Operator(operator) if operator.is_aggregate() => {
                Operand::Variable(f(&operator))
            }
            Operand::Operator(operator) => operator.replace_aggregates(f).into(),
            Operand::List(operands) => Operand::List(
                operands
                    .into_iter()
                    .map(|operand| operand.replace_aggregates(f))
                    .collect(),
            ),
            Operand::Term(_) | Operand::Variable(_) | Operand::Symbol(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{compile, CompileOptions, Operand, Operator};
    use sparql_algebra_model::{Literal, Term, Variable};

    fn operator(text: &str) -> Operator {
        compile(text, &CompileOptions::default())
            .unwrap()
            .into_operator()
            .unwrap()
    }

    #[test]
    fn replaces_variables_recursively() {
        let replaced = operator("(+ ?x (* ?y ?x))").replace_vars(&mut |variable| {
            (variable.as_str() == "x").then(|| Operand::Term(Literal::from(2).into()))
        });
        assert_eq!(replaced.to_string(), "(+ 2 (* ?y 2))");
    }

    #[test]
    fn aggregates_keep_their_variables() {
        let mut calls = 0;
        let replaced = operator("(sum ?x)").replace_vars(&mut |_| {
            calls += 1;
            Some(Operand::Term(Term::from(Literal::from(1))))
        });
        assert_eq!(replaced.to_string(), "(sum ?x)");
        assert_eq!(calls, 0);
    }

    #[test]
    fn replaces_aggregates_with_placeholders() {
        let mut aggregates = Vec::new();
        let replaced = operator("(/ (sum ?x) (count distinct ?x))").replace_aggregates(
            &mut |aggregate| {
                aggregates.push(aggregate.to_string());
                Variable::new_unchecked(format!("agg{}", aggregates.len()))
            },
        );
        assert_eq!(replaced.to_string(), "(/ ?agg1 ?agg2)");
        assert_eq!(aggregates, ["(sum ?x)", "(count distinct ?x)"]);
    }
}
