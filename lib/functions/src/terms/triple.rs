use crate::{ScalarTernaryRdfOp, ScalarUnaryRdfOp};
use sparql_algebra_model::{
    EvalResult, NamedNode, NamedNodeRef, Subject, Term, TermRef, Triple, TypeError,
};

/// Creates a quoted triple from its subject, predicate and object.
#[derive(Debug)]
pub struct TripleRdfOp;

impl Default for TripleRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl TripleRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarTernaryRdfOp for TripleRdfOp {
    type Arg0<'data> = TermRef<'data>;
    type Arg1<'data> = NamedNodeRef<'data>;
    type Arg2<'data> = TermRef<'data>;
    type Result<'data> = Triple;

    fn evaluate<'data>(
        &self,
        subject: Self::Arg0<'data>,
        predicate: Self::Arg1<'data>,
        object: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let subject = match subject {
            TermRef::NamedNode(node) => Subject::NamedNode(node.into_owned()),
            TermRef::BlankNode(node) => Subject::BlankNode(node.into_owned()),
            TermRef::Triple(triple) => Subject::Triple(Box::new(triple.clone())),
            TermRef::Literal(_) => {
                return TypeError::raise(format!("{subject} cannot be the subject of a triple"))
            }
        };
        Ok(Triple::new(
            subject,
            NamedNode::from(predicate),
            object.into_owned(),
        ))
    }
}

macro_rules! create_triple_accessor_op {
    ($NAME: ident, $ACCESS: expr) => {
        #[derive(Debug)]
        pub struct $NAME;

        impl Default for $NAME {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $NAME {
            pub fn new() -> Self {
                Self {}
            }
        }

        impl ScalarUnaryRdfOp for $NAME {
            type Arg<'data> = &'data Triple;
            type Result<'data> = Term;

            fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
                let access: fn(&Triple) -> Term = $ACCESS;
                Ok(access(value))
            }
        }
    };
}

create_triple_accessor_op!(SubjectRdfOp, |triple| triple.subject.clone().into());
create_triple_accessor_op!(PredicateRdfOp, |triple| triple.predicate.clone().into());
create_triple_accessor_op!(ObjectRdfOp, |triple| triple.object.clone());
