use oxiri::IriParseError;
use oxrdf::{BlankNodeIdParseError, VariableNameParseError};
use oxsdatatypes::{
    DateTimeOverflowError, OppositeSignInDurationComponentsError, ParseDateTimeError,
    ParseDecimalError, ParseDurationError, TooLargeForDecimalError, TooLargeForIntegerError,
};
use std::fmt::Display;
use std::num::{ParseFloatError, ParseIntError, TryFromIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The result of evaluating a single expression.
pub type EvalResult<T> = Result<T, TypeError>;

/// An evaluation-time failure.
///
/// Raised for unbound variables, arguments of the wrong type, domain errors (e.g., division by
/// zero) and failed casts. A [TypeError] only aborts the evaluation of the expression that raised
/// it. Some operators (e.g., `coalesce` or the aggregates) explicitly recover from it.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct TypeError {
    message: String,
}

impl TypeError {
    /// Creates a new [TypeError] with the given `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates a result with a [TypeError].
    pub fn raise<T>(message: impl Into<String>) -> EvalResult<T> {
        Err(Self::new(message))
    }

    /// Wraps an arbitrary lower-level error while preserving its message.
    pub fn wrap(error: impl Display) -> Self {
        Self::new(error.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

macro_rules! implement_from {
    ($t:ty) => {
        impl From<$t> for TypeError {
            fn from(error: $t) -> Self {
                TypeError::wrap(error)
            }
        }
    };
}

implement_from!(TooLargeForDecimalError);
implement_from!(TooLargeForIntegerError);
implement_from!(ParseBoolError);
implement_from!(ParseIntError);
implement_from!(ParseFloatError);
implement_from!(ParseDecimalError);
implement_from!(ParseDateTimeError);
implement_from!(ParseDurationError);
implement_from!(BlankNodeIdParseError);
implement_from!(VariableNameParseError);
implement_from!(IriParseError);
implement_from!(TryFromIntError);
implement_from!(DateTimeOverflowError);
implement_from!(OppositeSignInDurationComponentsError);

/// Malformed algebra notation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message} (at byte {position})")]
pub struct SyntaxError {
    message: String,
    position: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The byte offset in the input at which the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Top-level error of the algebra engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgebraError {
    /// The algebra notation could not be parsed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// An expression could not be evaluated.
    #[error(transparent)]
    Type(#[from] TypeError),
    /// Wrong operand count or invalid registration arguments.
    #[error("{0}")]
    Argument(String),
    /// The store boundary refused to be read.
    #[error("The store is not readable")]
    NotReadable,
    /// The operator or extension point has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(String),
}

impl AlgebraError {
    /// Returns whether this error would be reported as a [TypeError] to a caller.
    pub fn is_type_error(&self) -> bool {
        matches!(self, AlgebraError::Type(_))
    }
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;
