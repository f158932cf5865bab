use crate::{ScalarBinaryRdfOp, ScalarTernaryRdfOp};
use regex::{Regex, RegexBuilder};
use sparql_algebra_model::{Boolean, EvalResult, SimpleLiteralRef, StringLiteralRef, TypeError};
use std::borrow::Cow;

#[derive(Debug)]
pub struct RegexRdfOp;

impl Default for RegexRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for RegexRdfOp {
    type ArgLhs<'data> = StringLiteralRef<'data>;
    type ArgRhs<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        text: Self::ArgLhs<'data>,
        pattern: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let regex = compile_pattern(pattern.value, None)?;
        Ok(regex.is_match(text.0).into())
    }
}

impl ScalarTernaryRdfOp for RegexRdfOp {
    type Arg0<'data> = StringLiteralRef<'data>;
    type Arg1<'data> = SimpleLiteralRef<'data>;
    type Arg2<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        text: Self::Arg0<'data>,
        pattern: Self::Arg1<'data>,
        flags: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let regex = compile_pattern(pattern.value, Some(flags.value))?;
        Ok(regex.is_match(text.0).into())
    }
}

pub(super) fn compile_pattern(pattern: &str, flags: Option<&str>) -> EvalResult<Regex> {
    const REGEX_SIZE_LIMIT: usize = 1_000_000;

    let mut pattern = Cow::Borrowed(pattern);
    let flags = flags.unwrap_or_default();
    if flags.contains('q') {
        pattern = regex::escape(&pattern).into();
    }
    let mut regex_builder = RegexBuilder::new(&pattern);
    regex_builder.size_limit(REGEX_SIZE_LIMIT);
    for flag in flags.chars() {
        match flag {
            's' => {
                regex_builder.dot_matches_new_line(true);
            }
            'm' => {
                regex_builder.multi_line(true);
            }
            'i' => {
                regex_builder.case_insensitive(true);
            }
            'x' => {
                regex_builder.ignore_whitespace(true);
            }
            'q' => (), // Already supported
            _ => return TypeError::raise(format!("Invalid regex flag {flag}")),
        }
    }
    regex_builder.build().map_err(TypeError::wrap)
}
