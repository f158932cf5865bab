use oxiri::Iri;
use rustc_hash::FxHashMap;
use sparql_algebra_model::vocab::{RDFS_NAMESPACE, RDF_NAMESPACE, XSD_NAMESPACE};
use std::sync::{LazyLock, PoisonError, RwLock};

/// The base IRI and the prefixes that are used to resolve IRIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SseContext {
    base_iri: Option<Iri<String>>,
    prefixes: FxHashMap<String, String>,
}

impl Default for SseContext {
    fn default() -> Self {
        let mut prefixes = FxHashMap::default();
        prefixes.insert("xsd".to_owned(), XSD_NAMESPACE.to_owned());
        prefixes.insert("rdf".to_owned(), RDF_NAMESPACE.to_owned());
        prefixes.insert("rdfs".to_owned(), RDFS_NAMESPACE.to_owned());
        Self {
            base_iri: None,
            prefixes,
        }
    }
}

impl SseContext {
    pub fn base_iri(&self) -> Option<&Iri<String>> {
        self.base_iri.as_ref()
    }

    pub fn set_base_iri(&mut self, base_iri: Option<Iri<String>>) {
        self.base_iri = base_iri;
    }

    pub fn prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    pub fn declare_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }
}

static ACTIVE_CONTEXT: LazyLock<RwLock<SseContext>> =
    LazyLock::new(|| RwLock::new(SseContext::default()));

/// Returns the context written by the most recent compilation.
pub fn active_context() -> SseContext {
    ACTIVE_CONTEXT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Returns the base IRI of the most recent compilation. Used by `iri` and `uri`.
pub fn active_base_iri() -> Option<Iri<String>> {
    ACTIVE_CONTEXT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .base_iri
        .clone()
}

/// Replaces the active context. Each compilation overwrites the previous one.
pub(crate) fn set_active_context(context: SseContext) {
    *ACTIVE_CONTEXT
        .write()
        .unwrap_or_else(PoisonError::into_inner) = context;
}
