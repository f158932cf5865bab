use crate::{
    ScalarBinaryRdfOp, ScalarNAryRdfOp, ScalarNullaryRdfOp, ScalarQuaternaryRdfOp,
    ScalarTernaryRdfOp, ScalarUnaryRdfOp,
};
use sparql_algebra_model::{EvalResult, IntoTerm, RdfValueRef, Term, TypeError};

fn arity_mismatch<T>(expected: usize, args: &[Term]) -> EvalResult<T> {
    TypeError::raise(format!(
        "Expected {expected} arguments, got {}",
        args.len()
    ))
}

pub fn dispatch_nullary<TOp: ScalarNullaryRdfOp>(op: &TOp, args: &[Term]) -> EvalResult<Term> {
    if !args.is_empty() {
        return arity_mismatch(0, args);
    }
    op.evaluate().map(IntoTerm::into_term)
}

pub fn dispatch_unary<TOp: ScalarUnaryRdfOp>(op: &TOp, args: &[Term]) -> EvalResult<Term> {
    let [arg] = args else {
        return arity_mismatch(1, args);
    };
    let arg = <TOp::Arg<'_> as RdfValueRef<'_>>::from_term(arg.as_ref())?;
    op.evaluate(arg).map(IntoTerm::into_term)
}

pub fn dispatch_binary<TOp: ScalarBinaryRdfOp>(op: &TOp, args: &[Term]) -> EvalResult<Term> {
    let [lhs, rhs] = args else {
        return arity_mismatch(2, args);
    };
    let lhs = <TOp::ArgLhs<'_> as RdfValueRef<'_>>::from_term(lhs.as_ref())?;
    let rhs = <TOp::ArgRhs<'_> as RdfValueRef<'_>>::from_term(rhs.as_ref())?;
    op.evaluate(lhs, rhs).map(IntoTerm::into_term)
}

pub fn dispatch_ternary<TOp: ScalarTernaryRdfOp>(op: &TOp, args: &[Term]) -> EvalResult<Term> {
    let [arg0, arg1, arg2] = args else {
        return arity_mismatch(3, args);
    };
    let arg0 = <TOp::Arg0<'_> as RdfValueRef<'_>>::from_term(arg0.as_ref())?;
    let arg1 = <TOp::Arg1<'_> as RdfValueRef<'_>>::from_term(arg1.as_ref())?;
    let arg2 = <TOp::Arg2<'_> as RdfValueRef<'_>>::from_term(arg2.as_ref())?;
    op.evaluate(arg0, arg1, arg2).map(IntoTerm::into_term)
}

pub fn dispatch_quaternary<TOp: ScalarQuaternaryRdfOp>(
    op: &TOp,
    args: &[Term],
) -> EvalResult<Term> {
    let [arg0, arg1, arg2, arg3] = args else {
        return arity_mismatch(4, args);
    };
    let arg0 = <TOp::Arg0<'_> as RdfValueRef<'_>>::from_term(arg0.as_ref())?;
    let arg1 = <TOp::Arg1<'_> as RdfValueRef<'_>>::from_term(arg1.as_ref())?;
    let arg2 = <TOp::Arg2<'_> as RdfValueRef<'_>>::from_term(arg2.as_ref())?;
    let arg3 = <TOp::Arg3<'_> as RdfValueRef<'_>>::from_term(arg3.as_ref())?;
    op.evaluate(arg0, arg1, arg2, arg3).map(IntoTerm::into_term)
}

pub fn dispatch_n_ary<TOp: ScalarNAryRdfOp>(op: &TOp, args: &[Term]) -> EvalResult<Term> {
    let args = args
        .iter()
        .map(|arg| <TOp::Args<'_> as RdfValueRef<'_>>::from_term(arg.as_ref()))
        .collect::<EvalResult<Vec<_>>>()?;
    op.evaluate(&args).map(IntoTerm::into_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddRdfOp, StrLenRdfOp};
    use sparql_algebra_model::Literal;

    #[test]
    fn unary_rejects_wrong_arity() {
        let error = dispatch_unary(&StrLenRdfOp::new(), &[]).unwrap_err();
        assert_eq!(error.message(), "Expected 1 arguments, got 0");
    }

    #[test]
    fn binary_decodes_arguments() {
        let result = dispatch_binary(
            &AddRdfOp::new(),
            &[Literal::from(1).into(), Literal::from(2).into()],
        )
        .unwrap();
        assert_eq!(result, Term::from(Literal::from(3)));
    }

    #[test]
    fn binary_rejects_wrong_argument_kind() {
        let result = dispatch_binary(
            &AddRdfOp::new(),
            &[Literal::from(1).into(), Literal::from("a").into()],
        );
        assert!(result.is_err());
    }
}
