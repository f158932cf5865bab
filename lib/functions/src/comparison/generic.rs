use crate::ScalarBinaryRdfOp;
use sparql_algebra_model::{Boolean, EvalResult, TypeError, TypedValueRef};
use std::cmp::Ordering;

fn compare_values(lhs: TypedValueRef<'_>, rhs: TypedValueRef<'_>) -> EvalResult<Ordering> {
    if !lhs.is_literal() || !rhs.is_literal() {
        return TypeError::raise("Only literals can be ordered");
    }
    lhs.partial_cmp(&rhs).ok_or_else(|| {
        TypeError::new(format!(
            "Cannot compare {} with {}",
            lhs.into_term(),
            rhs.into_term()
        ))
    })
}

macro_rules! create_binary_cmp_op {
    ($STRUCT: ident, $CMP: expr) => {
        #[derive(Debug)]
        pub struct $STRUCT;

        impl Default for $STRUCT {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $STRUCT {
            pub fn new() -> Self {
                Self {}
            }
        }

        impl ScalarBinaryRdfOp for $STRUCT {
            type ArgLhs<'data> = TypedValueRef<'data>;
            type ArgRhs<'data> = TypedValueRef<'data>;
            type Result<'data> = Boolean;

            fn evaluate<'data>(
                &self,
                lhs: Self::ArgLhs<'data>,
                rhs: Self::ArgRhs<'data>,
            ) -> EvalResult<Self::Result<'data>> {
                let ordering = compare_values(lhs, rhs)?;
                Ok(($CMP)(ordering).into())
            }
        }
    };
}

create_binary_cmp_op!(LessThanRdfOp, Ordering::is_lt);
create_binary_cmp_op!(LessOrEqualRdfOp, Ordering::is_le);
create_binary_cmp_op!(GreaterThanRdfOp, Ordering::is_gt);
create_binary_cmp_op!(GreaterOrEqualRdfOp, Ordering::is_ge);

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::{Integer, Numeric, SimpleLiteralRef};

    #[test]
    fn compares_numerics() {
        let one = TypedValueRef::NumericLiteral(Numeric::Integer(Integer::from(1)));
        let two = TypedValueRef::NumericLiteral(Numeric::Integer(Integer::from(2)));
        assert!(bool::from(LessThanRdfOp::new().evaluate(one, two).unwrap()));
        assert!(!bool::from(GreaterOrEqualRdfOp::new().evaluate(one, two).unwrap()));
    }

    #[test]
    fn incomparable_values_are_errors() {
        let one = TypedValueRef::NumericLiteral(Numeric::Integer(Integer::from(1)));
        let text = TypedValueRef::SimpleLiteral(SimpleLiteralRef::new("a"));
        assert!(LessThanRdfOp::new().evaluate(one, text).is_err());
    }
}
