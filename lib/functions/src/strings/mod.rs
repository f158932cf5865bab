mod concat;
mod contains;
mod encode_for_uri;
mod lang_matches;
mod lcase;
mod regex;
mod replace;
mod strafter;
mod strbefore;
mod strends;
mod strlen;
mod strstarts;
mod substr;
mod ucase;

pub use concat::ConcatRdfOp;
pub use contains::ContainsRdfOp;
pub use encode_for_uri::EncodeForUriRdfOp;
pub use lang_matches::LangMatchesRdfOp;
pub use lcase::LCaseRdfOp;
pub use regex::RegexRdfOp;
pub use replace::ReplaceRdfOp;
pub use strafter::StrAfterRdfOp;
pub use strbefore::StrBeforeRdfOp;
pub use strends::StrEndsRdfOp;
pub use strlen::StrLenRdfOp;
pub use strstarts::StrStartsRdfOp;
pub use substr::SubStrRdfOp;
pub use ucase::UCaseRdfOp;
