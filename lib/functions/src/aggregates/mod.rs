//! The combining functions of the aggregates.
//!
//! The evaluator collects one tuple of operand values per solution and hands the whole sequence to
//! an [AggregateRdfOp]. Operand values that failed to evaluate are already missing from their
//! tuple, so tuples may be shorter than the arity of the aggregate.

mod avg;
mod count;
mod group_concat;
mod min_max;
mod sample;
mod sum;

pub use avg::AvgRdfOp;
pub use count::CountRdfOp;
pub use group_concat::GroupConcatRdfOp;
pub use min_max::{MaxRdfOp, MinRdfOp};
pub use sample::SampleRdfOp;
pub use sum::SumRdfOp;

use sparql_algebra_model::{EvalResult, Term};

/// The separator of `GROUP_CONCAT` if none is given.
pub const DEFAULT_SEPARATOR: &str = " ";

pub trait AggregateRdfOp {
    /// Combines the collected operand tuples.
    ///
    /// `arity` is the number of operands of the aggregate (without the `distinct` marker).
    fn combine(&self, arity: usize, rows: &[Vec<Term>]) -> EvalResult<Term>;
}

/// The values of the first operand that evaluated without error.
fn first_values(rows: &[Vec<Term>]) -> impl Iterator<Item = &Term> {
    rows.iter().filter_map(|row| row.first())
}
