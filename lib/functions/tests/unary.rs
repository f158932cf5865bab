use insta::assert_snapshot;
use sparql_algebra_functions::{
    dispatch_unary, IsLiteralRdfOp, LangRdfOp, ScalarUnaryRdfOp, StrRdfOp,
};
use sparql_algebra_model::{BlankNode, Literal, NamedNode, Term};

#[test]
fn test_unary_functions_str() {
    assert_snapshot!(invoke(&StrRdfOp::new()), @r#"
    [
      "http://example.com/a",
      error,
      "abc",
      "chat",
      "1",
      "true",
    ]
    "#);
}

#[test]
fn test_unary_functions_lang() {
    assert_snapshot!(invoke(&LangRdfOp::new()), @r#"
    [
      error,
      error,
      "",
      "fr",
      "",
      "",
    ]
    "#);
}

#[test]
fn test_unary_functions_is_literal() {
    assert_snapshot!(invoke(&IsLiteralRdfOp::new()), @r#"
    [
      "false"^^<http://www.w3.org/2001/XMLSchema#boolean>,
      "false"^^<http://www.w3.org/2001/XMLSchema#boolean>,
      "true"^^<http://www.w3.org/2001/XMLSchema#boolean>,
      "true"^^<http://www.w3.org/2001/XMLSchema#boolean>,
      "true"^^<http://www.w3.org/2001/XMLSchema#boolean>,
      "true"^^<http://www.w3.org/2001/XMLSchema#boolean>,
    ]
    "#);
}

fn invoke(op: &impl ScalarUnaryRdfOp) -> String {
    let mut result = String::from("[\n");
    for term in create_test_vector() {
        match dispatch_unary(op, &[term]) {
            Ok(term) => result.push_str(&format!("  {term},\n")),
            Err(_) => result.push_str("  error,\n"),
        }
    }
    result.push(']');
    result
}

fn create_test_vector() -> Vec<Term> {
    vec![
        NamedNode::new_unchecked("http://example.com/a").into(),
        BlankNode::new_unchecked("b1").into(),
        Literal::new_simple_literal("abc").into(),
        Literal::new_language_tagged_literal_unchecked("chat", "fr").into(),
        Literal::from(1).into(),
        Literal::from(true).into(),
    ]
}
