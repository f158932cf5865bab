//! Vocabularies used throughout the engine.

pub use oxrdf::vocab::{rdf, xsd};

/// The reserved namespace whose IRIs act as datatype constructor functions.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// The `rdf:` namespace.
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// The `rdfs:` namespace.
pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
