//! The XSD constructor functions.
//!
//! [cast] converts a term into a literal of one of the supported XSD datatypes. Each target family
//! decides which source values it accepts: some are converted by value, some are rejected and all
//! remaining ones are re-parsed from their lexical form.
//!
//! Relevant Resources:
//! - [XPath - Casting](https://www.w3.org/TR/xpath-functions/#casting)
//! - [SPARQL 1.1 - XPath Constructor Functions](https://www.w3.org/TR/sparql11-query/#FunctionMapping)

mod numeric;
mod string;
mod temporal;

pub use string::format_floating_point;

use crate::ScalarUnaryRdfOp;
use sparql_algebra_model::{
    EvalResult, Literal, NamedNode, NamedNodeRef, TermRef, TypeError, TypedValueRef, XsdType,
};

/// Casts `value` to the XSD datatype `datatype`.
///
/// Derived integer types (e.g., `xsd:int`) are supported and checked against their range.
pub fn cast(datatype: NamedNodeRef<'_>, value: TermRef<'_>) -> EvalResult<Literal> {
    let Some(target) = XsdType::from_datatype(datatype) else {
        return TypeError::raise(format!("Unrecognized cast target {datatype}"));
    };
    let source = TypedValueRef::from_term(value);
    match target {
        XsdType::DateTime | XsdType::Date | XsdType::Time => {
            temporal::cast_to_date_or_time(datatype, target, source)
        }
        XsdType::Duration | XsdType::YearMonthDuration | XsdType::DayTimeDuration => {
            temporal::cast_to_duration(target, source)
        }
        XsdType::Float | XsdType::Double => numeric::cast_to_floating_point(target, source),
        XsdType::Boolean => numeric::cast_to_boolean(source),
        XsdType::Decimal => numeric::cast_to_decimal(source),
        XsdType::Integer => numeric::cast_to_integer(datatype, source),
        XsdType::String => Ok(string::cast_to_string(source)),
    }
}

/// Returns the lexical form of a literal source, or a [TypeError] if `source` is not a literal.
fn lexical_form<'data>(source: TypedValueRef<'data>, target: XsdType) -> EvalResult<&'data str> {
    match source {
        TypedValueRef::SimpleLiteral(value) => Ok(value.value),
        TypedValueRef::LanguageStringLiteral(value) => Ok(value.value),
        TypedValueRef::OtherLiteral(value) => Ok(value.value()),
        _ => reject(source, target),
    }
}

fn reject<T>(source: TypedValueRef<'_>, target: XsdType) -> EvalResult<T> {
    TypeError::raise(format!(
        "Cannot cast {} to {target:?}",
        source.into_term()
    ))
}

/// The constructor function of a single XSD datatype (e.g., `xsd:integer(?x)`).
#[derive(Debug)]
pub struct CastRdfOp {
    datatype: NamedNode,
}

impl CastRdfOp {
    pub fn new(datatype: NamedNode) -> Self {
        Self { datatype }
    }

    pub fn datatype(&self) -> NamedNodeRef<'_> {
        self.datatype.as_ref()
    }
}

impl ScalarUnaryRdfOp for CastRdfOp {
    type Arg<'data> = TermRef<'data>;
    type Result<'data> = Literal;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        cast(self.datatype.as_ref(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::vocab::xsd;
    use sparql_algebra_model::{BlankNode, Term};

    fn typed(value: &str, datatype: NamedNodeRef<'_>) -> Term {
        Literal::new_typed_literal(value, datatype).into()
    }

    #[test]
    fn double_to_string_uses_scientific_notation_outside_of_band() {
        let cases = [
            ("1.0E-7", "1.0E-7"),
            ("0.0", "0"),
            ("-0.0", "-0"),
            ("1e6", "1.0E6"),
            ("123.5", "123.5"),
            ("0.000001", "0.000001"),
            ("2.0", "2"),
        ];
        for (input, expected) in cases {
            let result = cast(xsd::STRING, typed(input, xsd::DOUBLE).as_ref()).unwrap();
            assert_eq!(result, Literal::new_simple_literal(expected), "{input}");
        }
    }

    #[test]
    fn decimal_to_string_drops_zero_fraction() {
        let result = cast(xsd::STRING, typed("3.0", xsd::DECIMAL).as_ref()).unwrap();
        assert_eq!(result.value(), "3");
        let result = cast(xsd::STRING, typed("3.25", xsd::DECIMAL).as_ref()).unwrap();
        assert_eq!(result.value(), "3.25");
    }

    #[test]
    fn boolean_sources() {
        let value = typed("true", xsd::BOOLEAN);
        assert_eq!(cast(xsd::INTEGER, value.as_ref()).unwrap(), Literal::from(1));
        assert_eq!(cast(xsd::DOUBLE, value.as_ref()).unwrap().value(), "1");
        assert_eq!(
            cast(xsd::BOOLEAN, typed("0", xsd::INTEGER).as_ref()).unwrap(),
            Literal::from(false)
        );
        assert_eq!(
            cast(xsd::BOOLEAN, Term::from(Literal::from("1")).as_ref()).unwrap(),
            Literal::from(true)
        );
    }

    #[test]
    fn numeric_sources_are_recast_by_value() {
        let value = typed("2.75", xsd::DECIMAL);
        assert_eq!(cast(xsd::INTEGER, value.as_ref()).unwrap(), Literal::from(2));
        let value = typed("7", xsd::INTEGER);
        assert_eq!(cast(xsd::DECIMAL, value.as_ref()).unwrap().value(), "7");
    }

    #[test]
    fn rejected_sources() {
        let iri = Term::from(NamedNode::new_unchecked("http://example.com/"));
        let blank = Term::from(BlankNode::default());
        let integer = typed("1", xsd::INTEGER);
        let double = typed("1.5", xsd::DOUBLE);
        let boolean = typed("true", xsd::BOOLEAN);
        let date = typed("2020-01-01", xsd::DATE);
        let time = typed("10:00:00", xsd::TIME);
        let date_time = typed("2020-01-01T10:00:00", xsd::DATE_TIME);
        let duration = typed("P1Y", xsd::DURATION);
        let day_time_duration = typed("PT1H", xsd::DAY_TIME_DURATION);

        let date_or_time_targets = [xsd::DATE, xsd::TIME, xsd::DATE_TIME];
        let duration_targets = [xsd::DURATION, xsd::YEAR_MONTH_DURATION, xsd::DAY_TIME_DURATION];
        let value_targets = [xsd::FLOAT, xsd::DOUBLE, xsd::BOOLEAN, xsd::DECIMAL, xsd::INTEGER];
        let value_sources = [&iri, &blank, &integer, &double, &boolean];
        let temporal_sources = [
            &iri,
            &blank,
            &date,
            &time,
            &date_time,
            &duration,
            &day_time_duration,
        ];

        let cases: [(&[NamedNodeRef<'_>], &[&Term]); 3] = [
            (&date_or_time_targets, &value_sources),
            (&duration_targets, &value_sources),
            (&value_targets, &temporal_sources),
        ];
        for (targets, sources) in cases {
            for target in targets {
                for source in sources {
                    assert!(
                        cast(*target, source.as_ref()).is_err(),
                        "{source} must not be cast to {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn date_and_time_sources_cast_to_every_date_and_time_type() {
        let date_time = typed("2020-05-17T10:00:00Z", xsd::DATE_TIME);
        let date = typed("2020-05-17", xsd::DATE);
        let time = typed("10:00:00", xsd::TIME);

        let cases = [
            (&date_time, xsd::DATE_TIME, "2020-05-17T10:00:00Z"),
            (&date_time, xsd::DATE, "2020-05-17Z"),
            (&date_time, xsd::TIME, "10:00:00Z"),
            (&date, xsd::DATE_TIME, "2020-05-17T00:00:00"),
            (&date, xsd::DATE, "2020-05-17"),
            (&date, xsd::TIME, "2020-05-17"),
            (&time, xsd::DATE_TIME, "10:00:00"),
            (&time, xsd::DATE, "10:00:00"),
            (&time, xsd::TIME, "10:00:00"),
        ];
        for (source, target, expected) in cases {
            assert_eq!(
                cast(target, source.as_ref()).unwrap(),
                Literal::new_typed_literal(expected, target),
                "{source} to {target}"
            );
        }
    }

    #[test]
    fn invalid_lexical_forms_are_type_errors() {
        let value = Term::from(Literal::from("abc"));
        let error = cast(xsd::INTEGER, value.as_ref()).unwrap_err();
        assert!(!error.message().is_empty());
        assert!(cast(xsd::DATE, value.as_ref()).is_err());
    }

    #[test]
    fn unrecognized_target() {
        let value = Term::from(Literal::from("abc"));
        let error = cast(xsd::G_YEAR, value.as_ref()).unwrap_err();
        assert!(error.message().starts_with("Unrecognized cast target"));
    }

    #[test]
    fn derived_integer_range_is_checked() {
        assert_eq!(
            cast(xsd::BYTE, Term::from(Literal::from("12")).as_ref()).unwrap(),
            Literal::new_typed_literal("12", xsd::BYTE)
        );
        assert!(cast(xsd::BYTE, Term::from(Literal::from("300")).as_ref()).is_err());
    }

    #[test]
    fn date_time_conversions() {
        let value = typed("2020-05-17T10:00:00Z", xsd::DATE_TIME);
        assert_eq!(cast(xsd::DATE, value.as_ref()).unwrap().value(), "2020-05-17Z");
        assert_eq!(cast(xsd::TIME, value.as_ref()).unwrap().value(), "10:00:00Z");
        let value = Term::from(Literal::from("2020-05-17"));
        assert_eq!(
            cast(xsd::DATE, value.as_ref()).unwrap(),
            Literal::new_typed_literal("2020-05-17", xsd::DATE)
        );
    }

    #[test]
    fn durations_are_canonicalized() {
        let value = typed("P1Y13M", xsd::DURATION);
        assert_eq!(cast(xsd::DURATION, value.as_ref()).unwrap().value(), "P2Y1M");
        let value = typed("P1Y2M3DT4H", xsd::DURATION);
        assert_eq!(
            cast(xsd::YEAR_MONTH_DURATION, value.as_ref()).unwrap().value(),
            "P1Y2M"
        );
        assert_eq!(
            cast(xsd::DAY_TIME_DURATION, value.as_ref()).unwrap().value(),
            "P3DT4H"
        );
    }

    #[test]
    fn casts_are_idempotent() {
        let sources = [
            typed("1.0E-7", xsd::DOUBLE),
            typed("-0.0", xsd::FLOAT),
            typed("12.50", xsd::DECIMAL),
            typed("0042", xsd::INTEGER),
            typed("1", xsd::BOOLEAN),
            typed("P1Y13M", xsd::DURATION),
            typed("2020-05-17T10:00:00Z", xsd::DATE_TIME),
            Term::from(Literal::from("17")),
        ];
        let targets = [
            xsd::STRING,
            xsd::DOUBLE,
            xsd::FLOAT,
            xsd::DECIMAL,
            xsd::INTEGER,
            xsd::BOOLEAN,
            xsd::DURATION,
            xsd::DATE_TIME,
            xsd::DATE,
        ];
        for target in targets {
            for source in &sources {
                let Ok(once) = cast(target, source.as_ref()) else {
                    continue;
                };
                let twice = cast(target, Term::from(once.clone()).as_ref()).unwrap();
                assert_eq!(once, twice, "{target} of {source}");
            }
        }
    }
}
