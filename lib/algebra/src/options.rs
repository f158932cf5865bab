use crate::execution::Queryable;
use crate::AlgebraError;
use oxiri::Iri;
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Receives operator construction failures during compilation.
pub trait CompileLogger: Send + Sync {
    fn log_error(&self, error: &AlgebraError);
}

/// A [CompileLogger] that forwards failures to [tracing].
#[derive(Debug, Default)]
pub struct TracingLogger;

impl CompileLogger for TracingLogger {
    fn log_error(&self, error: &AlgebraError) {
        tracing::error!(%error, "Could not construct operator");
    }
}

/// Options for [compile](crate::compile).
#[derive(Clone, Default)]
pub struct CompileOptions {
    base_iri: Option<Iri<String>>,
    prefixes: FxHashMap<String, String>,
    logger: Option<Arc<dyn CompileLogger>>,
}

impl CompileOptions {
    /// Resolves relative IRIs against `base_iri`.
    pub fn with_base_iri(mut self, base_iri: Iri<String>) -> Self {
        self.base_iri = Some(base_iri);
        self
    }

    /// Declares `prefix` for prefixed names in addition to the predeclared ones.
    pub fn with_prefix(mut self, prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), iri.into());
        self
    }

    /// Enables the diagnostic mode. Operators that cannot be constructed are logged and dropped
    /// instead of aborting the compilation.
    pub fn with_logger(mut self, logger: Arc<dyn CompileLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn base_iri(&self) -> Option<&Iri<String>> {
        self.base_iri.as_ref()
    }

    pub fn prefixes(&self) -> &FxHashMap<String, String> {
        &self.prefixes
    }

    pub fn logger(&self) -> Option<&dyn CompileLogger> {
        self.logger.as_deref()
    }
}

impl Debug for CompileOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompileOptions")
            .field("base_iri", &self.base_iri)
            .field("prefixes", &self.prefixes)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

/// Whether and how evaluation results are cached per operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Memoize {
    #[default]
    Off,
    Unbounded,
    /// Keeps at most the given number of entries per operator. The oldest entry is evicted first.
    Bounded(NonZeroUsize),
}

impl Memoize {
    pub fn is_enabled(self) -> bool {
        self != Memoize::Off
    }

    pub fn capacity(self) -> Option<NonZeroUsize> {
        match self {
            Memoize::Bounded(capacity) => Some(capacity),
            Memoize::Off | Memoize::Unbounded => None,
        }
    }
}

/// Options for evaluating and executing operators.
#[derive(Clone, Default)]
pub struct EvaluationOptions {
    memoize: Memoize,
    queryable: Option<Arc<dyn Queryable>>,
}

impl EvaluationOptions {
    pub fn with_memoize(mut self, memoize: Memoize) -> Self {
        self.memoize = memoize;
        self
    }

    /// The store used by `exists` and `notexists`.
    pub fn with_queryable(mut self, queryable: Arc<dyn Queryable>) -> Self {
        self.queryable = Some(queryable);
        self
    }

    pub fn memoize(&self) -> Memoize {
        self.memoize
    }

    pub fn queryable(&self) -> Option<&dyn Queryable> {
        self.queryable.as_deref()
    }
}

impl Debug for EvaluationOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationOptions")
            .field("memoize", &self.memoize)
            .field("queryable", &self.queryable.is_some())
            .finish()
    }
}
