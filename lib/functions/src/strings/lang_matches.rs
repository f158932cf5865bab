use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, SimpleLiteralRef};

/// Basic language range matching as defined in RFC 4647.
#[derive(Debug)]
pub struct LangMatchesRdfOp;

impl Default for LangMatchesRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl LangMatchesRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for LangMatchesRdfOp {
    type ArgLhs<'data> = SimpleLiteralRef<'data>;
    type ArgRhs<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let matches = if rhs.value == "*" {
            !lhs.value.is_empty()
        } else {
            !ZipLongest::new(rhs.value.split('-'), lhs.value.split('-')).any(|parts| match parts {
                (Some(range_subtag), Some(language_subtag)) => {
                    !range_subtag.eq_ignore_ascii_case(language_subtag)
                }
                (Some(_), None) => true,
                (None, _) => false,
            })
        };
        Ok(matches.into())
    }
}

struct ZipLongest<T1, T2, I1: Iterator<Item = T1>, I2: Iterator<Item = T2>> {
    a: I1,
    b: I2,
}

impl<T1, T2, I1: Iterator<Item = T1>, I2: Iterator<Item = T2>> ZipLongest<T1, T2, I1, I2> {
    fn new(a: I1, b: I2) -> Self {
        Self { a, b }
    }
}

impl<T1, T2, I1: Iterator<Item = T1>, I2: Iterator<Item = T2>> Iterator
    for ZipLongest<T1, T2, I1, I2>
{
    type Item = (Option<T1>, Option<T2>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.a.next(), self.b.next()) {
            (None, None) => None,
            r => Some(r),
        }
    }
}
