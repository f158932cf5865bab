use super::lexical_form;
use sparql_algebra_model::{
    checked, Date, DateTime, DayTimeDuration, Decimal, Duration, EvalResult, Literal, NamedNodeRef,
    Time, TypedValueRef, XsdType, YearMonthDuration,
};
use std::str::FromStr;

/// Date and time values are converted between each other where XPath allows it. The remaining
/// pairs keep their lexical form under the target datatype. Strings are re-parsed, everything else
/// is rejected.
pub(super) fn cast_to_date_or_time(
    datatype: NamedNodeRef<'_>,
    target: XsdType,
    source: TypedValueRef<'_>,
) -> EvalResult<Literal> {
    Ok(match (target, source) {
        (XsdType::DateTime, TypedValueRef::DateTimeLiteral(value)) => Literal::from(value),
        (XsdType::DateTime, TypedValueRef::DateLiteral(value)) => {
            Literal::from(DateTime::try_from(value)?)
        }
        (XsdType::Date, TypedValueRef::DateLiteral(value)) => Literal::from(value),
        (XsdType::Date, TypedValueRef::DateTimeLiteral(value)) => {
            Literal::from(Date::try_from(value)?)
        }
        (XsdType::Time, TypedValueRef::TimeLiteral(value)) => Literal::from(value),
        (XsdType::Time, TypedValueRef::DateTimeLiteral(value)) => Literal::from(Time::from(value)),
        (_, TypedValueRef::DateLiteral(value)) => {
            Literal::new_typed_literal(value.to_string(), datatype)
        }
        (_, TypedValueRef::TimeLiteral(value)) => {
            Literal::new_typed_literal(value.to_string(), datatype)
        }
        _ => {
            let lexical = lexical_form(source, target)?;
            match target {
                XsdType::Date => Literal::from(Date::from_str(lexical)?),
                XsdType::Time => Literal::from(Time::from_str(lexical)?),
                _ => Literal::from(DateTime::from_str(lexical)?),
            }
        }
    })
}

/// Durations are projected onto the target duration type in canonical form. Strings are re-parsed,
/// everything else is rejected.
pub(super) fn cast_to_duration(target: XsdType, source: TypedValueRef<'_>) -> EvalResult<Literal> {
    let duration = match source {
        TypedValueRef::DurationLiteral(value) => value,
        TypedValueRef::YearMonthDurationLiteral(value) => Duration::from(value),
        TypedValueRef::DayTimeDurationLiteral(value) => Duration::from(value),
        _ => {
            let lexical = lexical_form(source, target)?;
            return Ok(match target {
                XsdType::YearMonthDuration => Literal::from(YearMonthDuration::from_str(lexical)?),
                XsdType::DayTimeDuration => Literal::from(DayTimeDuration::from_str(lexical)?),
                _ => Literal::from(Duration::from_str(lexical)?),
            });
        }
    };

    Ok(match target {
        XsdType::YearMonthDuration => {
            let months = checked(
                duration
                    .years()
                    .checked_mul(12)
                    .and_then(|months| months.checked_add(duration.months())),
                "duration cast",
            )?;
            Literal::from(YearMonthDuration::new(months))
        }
        XsdType::DayTimeDuration => {
            let whole_seconds = checked(
                duration
                    .days()
                    .checked_mul(86_400)
                    .and_then(|s| s.checked_add(duration.hours().checked_mul(3_600)?))
                    .and_then(|s| s.checked_add(duration.minutes().checked_mul(60)?)),
                "duration cast",
            )?;
            let seconds = checked(
                Decimal::from(whole_seconds).checked_add(duration.seconds()),
                "duration cast",
            )?;
            Literal::from(DayTimeDuration::new(seconds))
        }
        _ => Literal::from(duration),
    })
}
