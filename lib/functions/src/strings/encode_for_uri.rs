use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{EvalResult, SimpleLiteral, StringLiteralRef};
use std::fmt::Write;

/// Percent-encodes every byte outside the unreserved characters of RFC 3986.
#[derive(Debug)]
pub struct EncodeForUriRdfOp;

impl Default for EncodeForUriRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodeForUriRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for EncodeForUriRdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = SimpleLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let mut result = String::with_capacity(value.0.len());
        for c in value.0.bytes() {
            match c {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    result.push(char::from(c));
                }
                _ => {
                    let _ = write!(result, "%{c:02X}");
                }
            }
        }
        Ok(SimpleLiteral::new(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        let result = EncodeForUriRdfOp::new()
            .evaluate(StringLiteralRef("Los Angeles/\u{e9}", None))
            .unwrap();
        assert_eq!(result.value, "Los%20Angeles%2F%C3%A9");
    }
}
