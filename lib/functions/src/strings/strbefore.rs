use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{CompatibleStringArgs, EvalResult, StringLiteralRef};

#[derive(Debug)]
pub struct StrBeforeRdfOp;

impl Default for StrBeforeRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrBeforeRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for StrBeforeRdfOp {
    type ArgLhs<'data> = StringLiteralRef<'data>;
    type ArgRhs<'data> = StringLiteralRef<'data>;
    type Result<'data> = StringLiteralRef<'data>;

    fn evaluate<'data>(
        &self,
        arg_lhs: Self::ArgLhs<'data>,
        arg_rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let args = CompatibleStringArgs::try_from(arg_lhs, arg_rhs)?;

        // A failed match yields an empty simple literal.
        if let Some(position) = args.lhs.find(args.rhs) {
            Ok(StringLiteralRef(&args.lhs[..position], args.language))
        } else {
            Ok(StringLiteralRef("", None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_language_on_match() {
        let result = StrBeforeRdfOp::new()
            .evaluate(StringLiteralRef("abc", Some("en")), StringLiteralRef("b", None))
            .unwrap();
        assert_eq!(result, StringLiteralRef("a", Some("en")));
    }

    #[test]
    fn drops_language_on_mismatch() {
        let result = StrBeforeRdfOp::new()
            .evaluate(StringLiteralRef("abc", Some("en")), StringLiteralRef("z", None))
            .unwrap();
        assert_eq!(result, StringLiteralRef("", None));
    }
}
