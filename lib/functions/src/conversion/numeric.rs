use super::lexical_form;
use sparql_algebra_model::{
    check_integer_range, Boolean, Decimal, Double, EvalResult, Float, Integer, Literal,
    NamedNodeRef, Numeric, TypedValueRef, XsdType,
};
use std::str::FromStr;

fn boolean_as_integer(value: Boolean) -> Integer {
    Integer::from(i64::from(bool::from(value)))
}

pub(super) fn cast_to_floating_point(
    target: XsdType,
    source: TypedValueRef<'_>,
) -> EvalResult<Literal> {
    let value = match source {
        TypedValueRef::BooleanLiteral(value) => Numeric::Integer(boolean_as_integer(value)),
        TypedValueRef::NumericLiteral(value) => value,
        _ => {
            let lexical = lexical_form(source, target)?;
            match target {
                XsdType::Float => Numeric::Float(Float::from_str(lexical)?),
                _ => Numeric::Double(Double::from_str(lexical)?),
            }
        }
    };
    Ok(match (target, value) {
        (XsdType::Float, Numeric::Float(value)) => Literal::from(value),
        (XsdType::Float, value) => Literal::from(Float::from(value.to_double())),
        (_, value) => Literal::from(value.to_double()),
    })
}

pub(super) fn cast_to_boolean(source: TypedValueRef<'_>) -> EvalResult<Literal> {
    let value = match source {
        TypedValueRef::BooleanLiteral(value) => value,
        TypedValueRef::NumericLiteral(value) => {
            (value != Numeric::Integer(Integer::from(0))).into()
        }
        _ => Boolean::from_str(lexical_form(source, XsdType::Boolean)?)?,
    };
    Ok(Literal::from(value))
}

pub(super) fn cast_to_decimal(source: TypedValueRef<'_>) -> EvalResult<Literal> {
    let value = match source {
        TypedValueRef::BooleanLiteral(value) => Decimal::from(boolean_as_integer(value)),
        TypedValueRef::NumericLiteral(value) => value.to_decimal()?,
        _ => Decimal::from_str(lexical_form(source, XsdType::Decimal)?)?,
    };
    Ok(Literal::from(value))
}

/// Casts to `xsd:integer` or one of its derived types. The result keeps the requested datatype.
pub(super) fn cast_to_integer(
    datatype: NamedNodeRef<'_>,
    source: TypedValueRef<'_>,
) -> EvalResult<Literal> {
    let value = match source {
        TypedValueRef::BooleanLiteral(value) => boolean_as_integer(value),
        TypedValueRef::NumericLiteral(value) => value.to_integer()?,
        _ => Integer::from_str(lexical_form(source, XsdType::Integer)?)?,
    };
    let value = check_integer_range(datatype, value)?;
    Ok(Literal::new_typed_literal(value.to_string(), datatype))
}
