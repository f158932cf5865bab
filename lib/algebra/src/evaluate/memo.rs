use lru::LruCache;
use sparql_algebra_model::Term;
use std::fmt::{Debug, Formatter};
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

/// The evaluation results of a single operator, keyed by its evaluated operands.
///
/// Entries are only read with [LruCache::peek], so the least recently used entry is always the
/// oldest one. Cloning an operator does not clone its cache.
pub(crate) struct MemoCache {
    results: Mutex<LruCache<Vec<Term>, Term>>,
}

impl MemoCache {
    pub(crate) fn get(&self, operands: &[Term]) -> Option<Term> {
        let results = self.results.lock().unwrap_or_else(PoisonError::into_inner);
        results.peek(operands).cloned()
    }

    /// Caches `result`. A `capacity` of [None] keeps every entry.
    pub(crate) fn insert(
        &self,
        operands: Vec<Term>,
        result: Term,
        capacity: Option<NonZeroUsize>,
    ) {
        let mut results = self.results.lock().unwrap_or_else(PoisonError::into_inner);
        let capacity = capacity.unwrap_or(NonZeroUsize::MAX);
        if results.cap() != capacity {
            results.resize(capacity);
        }
        if !results.contains(operands.as_slice()) {
            results.put(operands, result);
        }
    }

    pub(crate) fn len(&self) -> usize {
        let results = self.results.lock().unwrap_or_else(PoisonError::into_inner);
        results.len()
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self {
            results: Mutex::new(LruCache::unbounded()),
        }
    }
}

impl Clone for MemoCache {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl Debug for MemoCache {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.len())
            .finish()
    }
}
