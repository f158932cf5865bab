//! The term model of the SPARQL algebra engine.
//!
//! Terms are [oxrdf] terms. This crate adds typed views on them ([TypedValueRef], [Numeric],
//! [StringLiteralRef], ...), the [Bindings] abstraction and the error types shared by all crates.

mod error;
mod numeric;
mod solution;
mod string_literal;
mod typed_value;
mod value;
pub mod vocab;
mod xsd;

pub use error::*;
pub use numeric::*;
pub use solution::*;
pub use string_literal::*;
pub use typed_value::*;
pub use value::*;
pub use xsd::*;

// Re-export some oxrdf types.
pub use oxiri::Iri;
pub use oxrdf::{
    BlankNode, BlankNodeRef, Graph, IriParseError, Literal, LiteralRef, NamedNode, NamedNodeRef,
    NamedOrBlankNode, Subject, Term, TermRef, Triple, TripleRef, Variable, VariableRef,
};
pub use oxsdatatypes::{
    Boolean, Date, DateTime, DayTimeDuration, Decimal, Double, Duration, Float, Integer, Time,
    YearMonthDuration,
};
pub use spargebra::term::{NamedNodePattern, TermPattern, TriplePattern};
