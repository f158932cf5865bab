use crate::{ScalarBinaryRdfOp, ScalarTernaryRdfOp};
use sparql_algebra_model::{EvalResult, Integer, Numeric, StringLiteralRef};

/// Extracts a substring. Positions are 1-based and count characters, not bytes.
#[derive(Debug)]
pub struct SubStrRdfOp;

impl Default for SubStrRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SubStrRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for SubStrRdfOp {
    type ArgLhs<'data> = StringLiteralRef<'data>;
    type ArgRhs<'data> = Numeric;
    type Result<'data> = StringLiteralRef<'data>;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        evaluate_substr(lhs, rhs, None)
    }
}

impl ScalarTernaryRdfOp for SubStrRdfOp {
    type Arg0<'data> = StringLiteralRef<'data>;
    type Arg1<'data> = Numeric;
    type Arg2<'data> = Numeric;
    type Result<'data> = StringLiteralRef<'data>;

    fn evaluate<'data>(
        &self,
        arg0: Self::Arg0<'data>,
        arg1: Self::Arg1<'data>,
        arg2: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        evaluate_substr(arg0, arg1, Some(arg2))
    }
}

fn evaluate_substr(
    source: StringLiteralRef<'_>,
    starting_loc: Numeric,
    length: Option<Numeric>,
) -> EvalResult<StringLiteralRef<'_>> {
    // Positions are rounded as in XPath's fn:substring.
    let start = round_position(starting_loc)?;
    let end = match length {
        Some(length) => Some(start.saturating_add(round_position(length)?)),
        None => None,
    };

    let first = usize::try_from(start.max(1) - 1)?;
    let count = match end {
        Some(end) if end <= start.max(1) => 0,
        Some(end) => usize::try_from(end - start.max(1))?,
        None => usize::MAX,
    };

    // We want to slice on char indices, not byte indices
    let mut start_iter = source.0.char_indices().skip(first).peekable();
    let result = if let Some((start_position, _)) = start_iter.peek().copied() {
        let mut end_iter = start_iter.skip(count).peekable();
        if let Some((end_position, _)) = end_iter.peek() {
            &source.0[start_position..*end_position]
        } else {
            &source.0[start_position..]
        }
    } else {
        ""
    };

    Ok(StringLiteralRef(result, source.1))
}

fn round_position(value: Numeric) -> EvalResult<i64> {
    Ok(Integer::try_from(value.to_double().round())?.into())
}
