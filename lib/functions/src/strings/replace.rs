use crate::strings::regex::compile_pattern;
use crate::{ScalarQuaternaryRdfOp, ScalarTernaryRdfOp};
use regex::Regex;
use sparql_algebra_model::{EvalResult, OwnedStringLiteral, SimpleLiteralRef, StringLiteralRef};

#[derive(Debug)]
pub struct ReplaceRdfOp;

impl Default for ReplaceRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplaceRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarTernaryRdfOp for ReplaceRdfOp {
    type Arg0<'data> = StringLiteralRef<'data>;
    type Arg1<'data> = SimpleLiteralRef<'data>;
    type Arg2<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(
        &self,
        text: Self::Arg0<'data>,
        pattern: Self::Arg1<'data>,
        replacement: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let regex = compile_pattern(pattern.value, None)?;
        Ok(replace_all(&regex, text, replacement))
    }
}

impl ScalarQuaternaryRdfOp for ReplaceRdfOp {
    type Arg0<'data> = StringLiteralRef<'data>;
    type Arg1<'data> = SimpleLiteralRef<'data>;
    type Arg2<'data> = SimpleLiteralRef<'data>;
    type Arg3<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(
        &self,
        text: Self::Arg0<'data>,
        pattern: Self::Arg1<'data>,
        replacement: Self::Arg2<'data>,
        flags: Self::Arg3<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let regex = compile_pattern(pattern.value, Some(flags.value))?;
        Ok(replace_all(&regex, text, replacement))
    }
}

fn replace_all(
    regex: &Regex,
    text: StringLiteralRef<'_>,
    replacement: SimpleLiteralRef<'_>,
) -> OwnedStringLiteral {
    let result = regex.replace_all(text.0, replacement.value).into_owned();
    OwnedStringLiteral::new(result, text.1.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_with_groups() {
        let result = ScalarTernaryRdfOp::evaluate(
            &ReplaceRdfOp::new(),
            StringLiteralRef("abcd", Some("en")),
            SimpleLiteralRef::new("(b)(c)"),
            SimpleLiteralRef::new("$2$1"),
        )
        .unwrap();
        assert_eq!(
            result,
            OwnedStringLiteral("acbd".to_owned(), Some("en".to_owned()))
        );
    }
}
