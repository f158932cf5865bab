use sparql_algebra_model::{Literal, Numeric, TypedValueRef};
use std::fmt::{Display, UpperExp};

pub(super) fn cast_to_string(source: TypedValueRef<'_>) -> Literal {
    let value = match source {
        TypedValueRef::NumericLiteral(Numeric::Float(value)) => {
            let value = f32::from(value);
            format_floating_point(value, f64::from(value))
        }
        TypedValueRef::NumericLiteral(Numeric::Double(value)) => {
            let value = f64::from(value);
            format_floating_point(value, value)
        }
        TypedValueRef::NumericLiteral(value) => value.format_value(),
        TypedValueRef::NamedNode(value) => value.as_str().to_owned(),
        TypedValueRef::SimpleLiteral(value) => value.value.to_owned(),
        TypedValueRef::LanguageStringLiteral(value) => value.value.to_owned(),
        TypedValueRef::OtherLiteral(value) => value.value().to_owned(),
        TypedValueRef::BooleanLiteral(value) => value.to_string(),
        TypedValueRef::DateTimeLiteral(value) => value.to_string(),
        TypedValueRef::TimeLiteral(value) => value.to_string(),
        TypedValueRef::DateLiteral(value) => value.to_string(),
        TypedValueRef::DurationLiteral(value) => value.to_string(),
        TypedValueRef::YearMonthDurationLiteral(value) => value.to_string(),
        TypedValueRef::DayTimeDurationLiteral(value) => value.to_string(),
        TypedValueRef::BlankNode(value) => value.to_string(),
        TypedValueRef::Triple(value) => value.to_string(),
    };
    Literal::new_simple_literal(value)
}

/// Formats a `xsd:float` or `xsd:double` in its canonical string form.
///
/// Values whose magnitude lies in `[1e-6, 1e6)` use decimal notation, zero keeps its sign and
/// everything else uses a mantissa with exactly one digit before the point (e.g., `1.0E-7`).
pub fn format_floating_point<T: Display + UpperExp>(value: T, magnitude: f64) -> String {
    if magnitude.is_nan() {
        return "NaN".to_owned();
    }
    if magnitude.is_infinite() {
        return if magnitude > 0.0 { "INF" } else { "-INF" }.to_owned();
    }
    if magnitude == 0.0 {
        return if magnitude.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }
    if (1e-6..1e6).contains(&magnitude.abs()) {
        return value.to_string();
    }

    let scientific = format!("{value:E}");
    match scientific.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{mantissa}.0E{exponent}")
        }
        _ => scientific,
    }
}
