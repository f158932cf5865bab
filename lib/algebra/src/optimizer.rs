use crate::{EvaluationOptions, Operand, Operator, OperatorKind};
use sparql_algebra_model::{Term, Variable};
use std::collections::HashMap;

impl Operator {
    /// Folds the constant sub-trees of this operator into terms.
    ///
    /// A constant operator is evaluated against an empty binding and replaced by its result. If
    /// the evaluation fails, the operator is kept so that the error is raised when the tree is
    /// evaluated later. Operators whose result differs between evaluations (e.g., `rand`) are
    /// never folded.
    pub fn optimize(self) -> Operand {
        if self.is_foldable() {
            let empty = HashMap::<Variable, Term>::new();
            match self.evaluate(&empty, &EvaluationOptions::default()) {
                Ok(term) => return Operand::Term(term),
                Err(error) => {
                    tracing::debug!(operator = %self.kind(), %error, "Keeping constant operator");
                }
            }
        }
        self.map_operands(Operand::optimize).into()
    }

    fn is_foldable(&self) -> bool {
        // Sort keys must stay recognizable for `order`.
        self.is_evaluatable()
            && !matches!(self.kind(), OperatorKind::Asc | OperatorKind::Desc)
            && self.is_constant()
            && self.is_deterministic()
    }

    /// Whether the operator and all operators below it are deterministic.
    fn is_deterministic(&self) -> bool {
        fn operand_is_deterministic(operand: &Operand) -> bool {
            match operand {
                Operand::Operator(operator) => operator.is_deterministic(),
                Operand::List(operands) => operands.iter().all(operand_is_deterministic),
                Operand::Term(_) | Operand::Variable(_) | Operand::Symbol(_) => true,
            }
        }
        self.kind().is_deterministic() && self.operands().iter().all(operand_is_deterministic)
    }
}

impl Operand {
    /// Folds the constant operators of this operand. See [Operator::optimize].
    pub fn optimize(self) -> Operand {
        match self {
            Operand::Operator(operator) => operator.optimize(),
            Operand::List(operands) => {
                Operand::List(operands.into_iter().map(Operand::optimize).collect())
            }
            Operand::Term(_) | Operand::Variable(_) | Operand::Symbol(_) => self,
        }
    }
}
