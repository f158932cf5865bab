use crate::evaluate::MemoCache;
use crate::{AlgebraError, AlgebraResult, OperatorKind};
use sparql_algebra_model::{Literal, NamedNode, Term, Variable};

/// A node of the operator tree.
///
/// Operators are immutable once constructed. The rewriting passes ([Operator::optimize],
/// [Operator::replace_vars], [Operator::replace_aggregates]) consume the tree and return a new
/// one. Each operator owns its memoization cache, which is shared by all evaluations of the
/// operator and is not carried over by clones or rewrites.
#[derive(Clone, Debug)]
pub struct Operator {
    kind: OperatorKind,
    operands: Vec<Operand>,
    cache: MemoCache,
}

/// An operand of an [Operator].
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Operator(Box<Operator>),
    Term(Term),
    Variable(Variable),
    /// A bare symbol (e.g., the `distinct` marker of aggregates).
    Symbol(String),
    /// A list without a leading operator (e.g., the variables of `project`).
    List(Vec<Operand>),
}

impl Operator {
    /// Creates a new operator after checking the number of operands.
    ///
    /// Function calls must start with the IRI of the called function.
    pub fn new(kind: OperatorKind, operands: Vec<Operand>) -> AlgebraResult<Self> {
        if !kind.arity().accepts(operands.len()) {
            return Err(AlgebraError::Argument(format!(
                "`{kind}` expects {} operands, got {}",
                kind.arity(),
                operands.len()
            )));
        }
        if kind == OperatorKind::FunctionCall
            && !matches!(operands.first(), Some(Operand::Term(Term::NamedNode(_))))
        {
            return Err(AlgebraError::Argument(format!(
                "`{kind}` expects the IRI of the function as its first operand"
            )));
        }
        Ok(Self {
            kind,
            operands,
            cache: MemoCache::default(),
        })
    }

    /// Creates a call of the extension function `iri`.
    pub fn function_call(iri: NamedNode, args: Vec<Operand>) -> Self {
        let mut operands = Vec::with_capacity(args.len() + 1);
        operands.push(Operand::Term(iri.into()));
        operands.extend(args);
        Self {
            kind: OperatorKind::FunctionCall,
            operands,
            cache: MemoCache::default(),
        }
    }

    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn into_operands(self) -> Vec<Operand> {
        self.operands
    }

    pub(crate) fn cache(&self) -> &MemoCache {
        &self.cache
    }

    /// Rebuilds this operator with rewritten operands. Rewrites never change the number of
    /// operands, so the arity is not checked again.
    pub(crate) fn map_operands(self, f: impl FnMut(Operand) -> Operand) -> Self {
        Self {
            kind: self.kind,
            operands: self.operands.into_iter().map(f).collect(),
            cache: MemoCache::default(),
        }
    }

    /// Whether any operand is a variable, directly or in a sub-tree.
    pub fn is_variable(&self) -> bool {
        self.operands.iter().any(Operand::is_variable)
    }

    /// Whether the operator does not reference any variable.
    pub fn is_constant(&self) -> bool {
        !self.is_variable()
    }

    pub fn is_evaluatable(&self) -> bool {
        self.kind.is_evaluatable()
    }

    pub fn is_executable(&self) -> bool {
        self.kind.is_executable()
    }

    pub fn is_aggregate(&self) -> bool {
        self.kind.is_aggregate()
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.operands == other.operands
    }
}

impl Operand {
    pub fn is_variable(&self) -> bool {
        match self {
            Operand::Variable(_) => true,
            Operand::Operator(operator) => operator.is_variable(),
            Operand::List(operands) => operands.iter().any(Operand::is_variable),
            Operand::Term(_) | Operand::Symbol(_) => false,
        }
    }

    pub fn as_operator(&self) -> Option<&Operator> {
        match self {
            Operand::Operator(operator) => Some(operator),
            _ => None,
        }
    }

    pub fn into_operator(self) -> Option<Operator> {
        match self {
            Operand::Operator(operator) => Some(*operator),
            _ => None,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Operand::Term(term) => Some(term),
            _ => None,
        }
    }

    /// Whether this operand is the given symbol, ignoring the case.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self, Operand::Symbol(s) if s.eq_ignore_ascii_case(symbol))
    }
}

impl From<Operator> for Operand {
    fn from(operator: Operator) -> Self {
        Operand::Operator(Box::new(operator))
    }
}

impl From<Term> for Operand {
    fn from(term: Term) -> Self {
        Operand::Term(term)
    }
}

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Operand::Term(literal.into())
    }
}

impl From<NamedNode> for Operand {
    fn from(node: NamedNode) -> Self {
        Operand::Term(node.into())
    }
}

impl From<Variable> for Operand {
    fn from(variable: Variable) -> Self {
        Operand::Variable(variable)
    }
}
