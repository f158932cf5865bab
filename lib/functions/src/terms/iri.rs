use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, Iri, NamedNode, TypeError, TypedValueRef};

/// Creates an IRI from a string, resolving it against the base IRI if one is given.
#[derive(Debug)]
pub struct IriRdfOp {
    base_iri: Option<Iri<String>>,
}

impl IriRdfOp {
    pub fn new(base_iri: Option<Iri<String>>) -> Self {
        Self { base_iri }
    }
}

impl ScalarUnaryRdfOp for IriRdfOp {
    type Arg<'data> = TypedValueRef<'data>;
    type Result<'data> = NamedNode;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            TypedValueRef::NamedNode(named_node) => Ok(named_node.into_owned()),
            TypedValueRef::SimpleLiteral(simple_literal) => {
                let resolving_result = if let Some(base_iri) = &self.base_iri {
                    base_iri.resolve(simple_literal.value)?
                } else {
                    Iri::parse(simple_literal.value.to_owned())?
                };
                Ok(NamedNode::from(resolving_result))
            }
            _ => TypeError::raise("IRI expects an IRI or a simple literal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::SimpleLiteralRef;

    #[test]
    fn resolves_relative_iris() {
        let base = Iri::parse("http://example.com/a/".to_owned()).unwrap();
        let result = IriRdfOp::new(Some(base))
            .evaluate(TypedValueRef::SimpleLiteral(SimpleLiteralRef::new("b")))
            .unwrap();
        assert_eq!(result.as_str(), "http://example.com/a/b");
    }

    #[test]
    fn relative_iri_without_base_is_an_error() {
        let result = IriRdfOp::new(None)
            .evaluate(TypedValueRef::SimpleLiteral(SimpleLiteralRef::new("b")));
        assert!(result.is_err());
    }
}
