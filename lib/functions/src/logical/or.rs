use sparql_algebra_model::EvalResult;

/// The logical-or of SPARQL's three-valued logic.
///
/// An error on one side is masked if the other side is `true`.
pub fn sparql_or(lhs: EvalResult<bool>, rhs: EvalResult<bool>) -> EvalResult<bool> {
    match (lhs, rhs) {
        (Ok(true), _) | (_, Ok(true)) => Ok(true),
        (Ok(false), Ok(false)) => Ok(false),
        (Err(error), _) | (_, Err(error)) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::TypeError;

    #[test]
    fn truth_table() {
        let error = || Err(TypeError::new("error"));
        assert_eq!(sparql_or(Ok(false), Ok(false)), Ok(false));
        assert_eq!(sparql_or(Ok(true), error()), Ok(true));
        assert_eq!(sparql_or(error(), Ok(true)), Ok(true));
        assert!(sparql_or(Ok(false), error()).is_err());
    }
}
