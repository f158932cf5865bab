//! Compiler, evaluator and optimizer for the SPARQL algebra.
//!
//! Algebra expressions are written in SSE, the S-expression notation of the SPARQL algebra, and
//! compiled into a tree of [Operator]s:
//!
//! ```
//! use sparql_algebra::{compile, CompileOptions, EvaluationOptions};
//! use sparql_algebra_model::{Solution, Term, Literal, vocab::xsd};
//!
//! let expression = compile("(+ 1 2.5)", &CompileOptions::default()).unwrap();
//! let result = expression.evaluate(&Solution::new(), &EvaluationOptions::default()).unwrap();
//! assert_eq!(result, Term::from(Literal::new_typed_literal("3.5", xsd::DECIMAL)));
//! ```
//!
//! Expressions are [evaluated](Operator::evaluate) against a single binding, aggregates are
//! [evaluated](Operator::aggregate) against a sequence of bindings, and graph patterns are
//! [executed](Operator::execute) against a [Queryable] store.

mod aggregate;
mod compiler;
mod evaluate;
pub mod execution;
mod kind;
mod operator;
mod optimizer;
mod options;
pub mod sse;
mod substitution;

pub use compiler::compile;
pub use execution::{FilterableSequence, Queryable, SolutionFilter};
pub use kind::{Arity, Category, OperatorKind, QUOTED_TRIPLE_SYMBOL};
pub use operator::{Operand, Operator};
pub use options::{CompileLogger, CompileOptions, EvaluationOptions, Memoize, TracingLogger};
pub use sparql_algebra_model::{AlgebraError, AlgebraResult, SyntaxError, TypeError};
