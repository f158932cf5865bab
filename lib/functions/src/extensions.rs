//! The process-wide registry of extension functions.
//!
//! Extension functions are identified by an IRI and called with the evaluated values of their
//! arguments. The registry starts empty and only grows. Functions must be pure because compiled
//! expressions may memoize or constant-fold their results.
//!
//! IRIs in the XSD namespace are always available and call the [cast](crate::cast) engine.

use crate::{dispatch_unary, CastRdfOp};
use rustc_hash::FxHashMap;
use sparql_algebra_model::vocab::XSD_NAMESPACE;
use sparql_algebra_model::{EvalResult, NamedNode, NamedNodeRef, Term, TypeError};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// The body of an extension function.
pub type ExtensionFunction = Arc<dyn Fn(&[Term]) -> EvalResult<Term> + Send + Sync>;

static EXTENSIONS: LazyLock<RwLock<FxHashMap<NamedNode, ExtensionFunction>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Registers `body` under `iri`, replacing a previous registration of the same IRI.
///
/// Fails if `iri` is not a valid absolute IRI.
pub fn register(
    iri: &str,
    body: impl Fn(&[Term]) -> EvalResult<Term> + Send + Sync + 'static,
) -> EvalResult<()> {
    let iri = NamedNode::new(iri)?;
    tracing::debug!(iri = iri.as_str(), "Registering extension function");
    EXTENSIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(iri, Arc::new(body));
    Ok(())
}

/// Returns the registered body of `iri`.
pub fn lookup(iri: NamedNodeRef<'_>) -> Option<ExtensionFunction> {
    EXTENSIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&iri.into_owned())
        .cloned()
}

/// Returns whether `iri` can be called as a function, either because it is registered or
/// because it names an XSD datatype.
pub fn is_extension(iri: NamedNodeRef<'_>) -> bool {
    is_xsd_constructor(iri) || lookup(iri).is_some()
}

fn is_xsd_constructor(iri: NamedNodeRef<'_>) -> bool {
    iri.as_str().starts_with(XSD_NAMESPACE)
}

/// Calls the function named `iri`.
pub fn call(iri: NamedNodeRef<'_>, args: &[Term]) -> EvalResult<Term> {
    if let Some(body) = lookup(iri) {
        return body(args);
    }
    if is_xsd_constructor(iri) {
        return dispatch_unary(&CastRdfOp::new(iri.into_owned()), args);
    }
    TypeError::raise(format!("Unknown extension function {iri}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::vocab::xsd;
    use sparql_algebra_model::Literal;

    #[test]
    fn registered_functions_are_called() {
        register("http://example.com/fn#answer", |_| {
            Ok(Literal::from(42).into())
        })
        .unwrap();

        let iri = NamedNode::new_unchecked("http://example.com/fn#answer");
        assert!(is_extension(iri.as_ref()));
        assert_eq!(
            call(iri.as_ref(), &[]).unwrap(),
            Term::from(Literal::from(42))
        );
    }

    #[test]
    fn invalid_iri_is_rejected() {
        assert!(register("not an iri", |_| Ok(Literal::from(1).into())).is_err());
    }

    #[test]
    fn xsd_constructors_cast() {
        assert!(is_extension(xsd::INTEGER));
        let result = call(xsd::INTEGER, &[Literal::from("12").into()]).unwrap();
        assert_eq!(result, Term::from(Literal::from(12)));
        assert!(call(xsd::INTEGER, &[]).is_err());
    }

    #[test]
    fn unknown_functions_fail() {
        let iri = NamedNode::new_unchecked("http://example.com/fn#unknown");
        assert!(!is_extension(iri.as_ref()));
        assert!(call(iri.as_ref(), &[]).is_err());
    }
}
