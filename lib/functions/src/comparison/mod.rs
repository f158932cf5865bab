mod equal;
mod generic;
mod ordering;
mod same_term;

pub use equal::{rdf_term_equal, EqualRdfOp, NotEqualRdfOp};
pub use generic::{GreaterOrEqualRdfOp, GreaterThanRdfOp, LessOrEqualRdfOp, LessThanRdfOp};
pub use ordering::{compare_terms, CompareRdfOp};
pub use same_term::SameTermRdfOp;
