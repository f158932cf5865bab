use crate::vocab::xsd;
use crate::{EvalResult, Integer, NamedNodeRef, TypeError};

/// The primitive value space a datatype IRI maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XsdType {
    String,
    Boolean,
    Integer,
    Decimal,
    Float,
    Double,
    DateTime,
    Date,
    Time,
    Duration,
    YearMonthDuration,
    DayTimeDuration,
}

impl XsdType {
    /// Classifies a datatype IRI. Derived integer types map to [XsdType::Integer].
    pub fn from_datatype(datatype: NamedNodeRef<'_>) -> Option<Self> {
        Some(match datatype {
            xsd::STRING => Self::String,
            xsd::BOOLEAN => Self::Boolean,
            xsd::DECIMAL => Self::Decimal,
            xsd::FLOAT => Self::Float,
            xsd::DOUBLE => Self::Double,
            xsd::DATE_TIME | xsd::DATE_TIME_STAMP => Self::DateTime,
            xsd::DATE => Self::Date,
            xsd::TIME => Self::Time,
            xsd::DURATION => Self::Duration,
            xsd::YEAR_MONTH_DURATION => Self::YearMonthDuration,
            xsd::DAY_TIME_DURATION => Self::DayTimeDuration,
            _ if is_integer_datatype(datatype) => Self::Integer,
            _ => return None,
        })
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Decimal | Self::Float | Self::Double
        )
    }

    pub fn is_date_or_time(self) -> bool {
        matches!(self, Self::DateTime | Self::Date | Self::Time)
    }

    pub fn is_duration(self) -> bool {
        matches!(
            self,
            Self::Duration | Self::YearMonthDuration | Self::DayTimeDuration
        )
    }
}

/// Returns whether `datatype` is `xsd:integer` or one of the types derived from it.
pub fn is_integer_datatype(datatype: NamedNodeRef<'_>) -> bool {
    matches!(
        datatype,
        xsd::INTEGER
            | xsd::NON_POSITIVE_INTEGER
            | xsd::NEGATIVE_INTEGER
            | xsd::LONG
            | xsd::INT
            | xsd::SHORT
            | xsd::BYTE
            | xsd::NON_NEGATIVE_INTEGER
            | xsd::UNSIGNED_LONG
            | xsd::UNSIGNED_INT
            | xsd::UNSIGNED_SHORT
            | xsd::UNSIGNED_BYTE
            | xsd::POSITIVE_INTEGER
    )
}

/// Returns whether `datatype` is one of the numeric datatypes.
pub fn is_numeric_datatype(datatype: NamedNodeRef<'_>) -> bool {
    XsdType::from_datatype(datatype).is_some_and(XsdType::is_numeric)
}

/// Checks that `value` lies in the value space of the derived integer type `datatype`.
pub fn check_integer_range(datatype: NamedNodeRef<'_>, value: Integer) -> EvalResult<Integer> {
    let raw = i64::from(value);
    let (min, max) = match datatype {
        xsd::NON_POSITIVE_INTEGER => (i64::MIN, 0),
        xsd::NEGATIVE_INTEGER => (i64::MIN, -1),
        xsd::INT => (i64::from(i32::MIN), i64::from(i32::MAX)),
        xsd::SHORT => (i64::from(i16::MIN), i64::from(i16::MAX)),
        xsd::BYTE => (i64::from(i8::MIN), i64::from(i8::MAX)),
        xsd::NON_NEGATIVE_INTEGER | xsd::UNSIGNED_LONG => (0, i64::MAX),
        xsd::UNSIGNED_INT => (0, i64::from(u32::MAX)),
        xsd::UNSIGNED_SHORT => (0, i64::from(u16::MAX)),
        xsd::UNSIGNED_BYTE => (0, i64::from(u8::MAX)),
        xsd::POSITIVE_INTEGER => (1, i64::MAX),
        _ => (i64::MIN, i64::MAX),
    };
    if (min..=max).contains(&raw) {
        Ok(value)
    } else {
        TypeError::raise(format!("{raw} is out of range for {datatype}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_integers_are_integers() {
        assert_eq!(
            XsdType::from_datatype(xsd::UNSIGNED_BYTE),
            Some(XsdType::Integer)
        );
        assert!(is_numeric_datatype(xsd::LONG));
        assert!(!is_numeric_datatype(xsd::STRING));
    }

    #[test]
    fn integer_range() {
        assert!(check_integer_range(xsd::BYTE, Integer::from(127)).is_ok());
        assert!(check_integer_range(xsd::BYTE, Integer::from(128)).is_err());
        assert!(check_integer_range(xsd::POSITIVE_INTEGER, Integer::from(0)).is_err());
    }
}
