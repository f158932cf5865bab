//! The combining functions of the SPARQL algebra engine.
//!
//! Each operator is a zero-sized struct (e.g., [AddRdfOp]) implementing one of the arity traits
//! below. The arity traits declare the kind of their arguments via [RdfValueRef], which decodes
//! the evaluated operand terms before the operator sees them. The `dispatch_*` functions glue
//! both together for callers that only hold [Term]s.
//!
//! Besides the scalar operators, this crate contains the [cast] engine, the
//! [effective boolean value](effective_boolean_value) coercion, the [aggregates] and the process
//! wide registry of [extension functions](extensions).

pub mod aggregates;
mod comparison;
pub mod conversion;
mod dates_and_times;
mod dispatch;
pub mod effective_boolean_value;
pub mod extensions;
mod hash;
mod logical;
mod numeric;
mod strings;
mod terms;

pub use comparison::*;
pub use conversion::{cast, CastRdfOp};
pub use dates_and_times::*;
pub use dispatch::*;
pub use effective_boolean_value::effective_boolean_value;
pub use hash::*;
pub use logical::*;
pub use numeric::*;
pub use strings::*;
pub use terms::*;

use sparql_algebra_model::{EvalResult, IntoTerm, RdfValueRef};

pub trait ScalarNullaryRdfOp {
    type Result: IntoTerm;

    fn evaluate(&self) -> EvalResult<Self::Result>;
}

pub trait ScalarUnaryRdfOp {
    type Arg<'data>: RdfValueRef<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarBinaryRdfOp {
    type ArgLhs<'data>: RdfValueRef<'data>;
    type ArgRhs<'data>: RdfValueRef<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarTernaryRdfOp {
    type Arg0<'data>: RdfValueRef<'data>;
    type Arg1<'data>: RdfValueRef<'data>;
    type Arg2<'data>: RdfValueRef<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(
        &self,
        arg0: Self::Arg0<'data>,
        arg1: Self::Arg1<'data>,
        arg2: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarQuaternaryRdfOp {
    type Arg0<'data>: RdfValueRef<'data>;
    type Arg1<'data>: RdfValueRef<'data>;
    type Arg2<'data>: RdfValueRef<'data>;
    type Arg3<'data>: RdfValueRef<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(
        &self,
        arg0: Self::Arg0<'data>,
        arg1: Self::Arg1<'data>,
        arg2: Self::Arg2<'data>,
        arg3: Self::Arg3<'data>,
    ) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarNAryRdfOp {
    type Args<'data>: RdfValueRef<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(&self, args: &[Self::Args<'data>]) -> EvalResult<Self::Result<'data>>;
}
