//! The active context is process-wide. This file holds a single test so that no other
//! compilation runs concurrently.

use sparql_algebra::sse::{active_base_iri, active_context};
use sparql_algebra::{compile, CompileOptions, EvaluationOptions, Memoize};
use sparql_algebra_model::{Iri, NamedNode, Solution, Term};

#[test]
fn each_compilation_replaces_the_active_context() {
    let options = CompileOptions::default()
        .with_base_iri(Iri::parse("http://example.com/default/".to_owned()).unwrap());
    let expression = compile(
        "(base <http://example.com/> (prefix ((ex: <http://example.com/ns#>)) (iri \"a\")))",
        &options,
    )
    .unwrap();
    assert_eq!(
        active_base_iri().map(Iri::into_inner),
        Some("http://example.com/".to_owned())
    );
    assert_eq!(
        active_context().prefix("ex"),
        Some("http://example.com/ns#")
    );
    let expression = expression.optimize();
    assert_eq!(
        expression.to_string(),
        "(base <http://example.com/> (prefix ((ex: <http://example.com/ns#>)) (iri \"a\")))"
    );
    let memoized = EvaluationOptions::default().with_memoize(Memoize::Unbounded);
    assert_eq!(
        expression.evaluate(&Solution::new(), &memoized).unwrap(),
        Term::from(NamedNode::new_unchecked("http://example.com/a"))
    );

    compile("(iri \"a\")", &options).unwrap();
    assert_eq!(
        active_base_iri().map(Iri::into_inner),
        Some("http://example.com/default/".to_owned())
    );
    assert_eq!(active_context().prefix("ex"), None);
    assert_eq!(active_context().prefix("xsd"), Some("http://www.w3.org/2001/XMLSchema#"));

    // Relative IRIs follow the base that is active when evaluating.
    assert_eq!(
        expression.evaluate(&Solution::new(), &memoized).unwrap(),
        Term::from(NamedNode::new_unchecked("http://example.com/default/a"))
    );
}
