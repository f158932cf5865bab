//! Effective boolean value coercion.
//!
//! Relevant Resources:
//! - [SPARQL 1.1 - Effective Boolean Value](https://www.w3.org/TR/sparql11-query/#ebv)

use sparql_algebra_model::vocab::xsd;
use sparql_algebra_model::{is_numeric_datatype, EvalResult, TermRef, TypeError, TypedValueRef};

/// Coerces `term` into a boolean.
///
/// - Booleans map to their value. An ill-formed boolean is `false`.
/// - Numerics are `false` iff they are zero or NaN. An ill-formed numeric is `false`.
/// - Simple literals and `xsd:string`s are `false` iff they are empty.
/// - Every other term raises a [TypeError].
pub fn effective_boolean_value(term: TermRef<'_>) -> EvalResult<bool> {
    match TypedValueRef::from_term(term) {
        TypedValueRef::BooleanLiteral(value) => Ok(value.into()),
        TypedValueRef::NumericLiteral(value) => Ok(!value.is_zero_or_nan()),
        TypedValueRef::SimpleLiteral(value) => Ok(!value.is_empty()),
        TypedValueRef::OtherLiteral(literal)
            if literal.datatype() == xsd::BOOLEAN || is_numeric_datatype(literal.datatype()) =>
        {
            Ok(false)
        }
        _ => TypeError::raise(format!("{term} has no effective boolean value")),
    }
}
