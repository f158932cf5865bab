use sparql_algebra_model::EvalResult;

/// The logical-and of SPARQL's three-valued logic.
///
/// An error on one side is masked if the other side is `false`.
///
/// Relevant Resources:
/// - [SPARQL 1.1 - Filter Evaluation](https://www.w3.org/TR/sparql11-query/#evaluation)
pub fn sparql_and(lhs: EvalResult<bool>, rhs: EvalResult<bool>) -> EvalResult<bool> {
    match (lhs, rhs) {
        (Ok(false), _) | (_, Ok(false)) => Ok(false),
        (Ok(true), Ok(true)) => Ok(true),
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
        assert_eq!(sparql_and(Ok(true), Ok(true)), Ok(true));
        assert_eq!(sparql_and(Ok(true), Ok(false)), Ok(false));
        assert_eq!(sparql_and(error(), Ok(false)), Ok(false));
        assert_eq!(sparql_and(Ok(false), error()), Ok(false));
        assert!(sparql_and(Ok(true), error()).is_err());
        assert!(sparql_and(error(), error()).is_err());
    }
}
