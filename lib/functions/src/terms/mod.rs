mod bnode;
mod datatype;
mod iri;
mod is_blank;
mod is_iri;
mod is_literal;
mod is_numeric;
mod is_triple;
mod lang;
mod str;
mod strdt;
mod strlang;
mod struuid;
mod triple;
mod uuid;

pub use bnode::BNodeRdfOp;
pub use datatype::DatatypeRdfOp;
pub use iri::IriRdfOp;
pub use is_blank::IsBlankRdfOp;
pub use is_iri::IsIriRdfOp;
pub use is_literal::IsLiteralRdfOp;
pub use is_numeric::IsNumericRdfOp;
pub use is_triple::IsTripleRdfOp;
pub use lang::LangRdfOp;
pub use str::StrRdfOp;
pub use strdt::StrDtRdfOp;
pub use strlang::StrLangRdfOp;
pub use struuid::StrUuidRdfOp;
pub use triple::{ObjectRdfOp, PredicateRdfOp, SubjectRdfOp, TripleRdfOp};
pub use uuid::UuidRdfOp;
