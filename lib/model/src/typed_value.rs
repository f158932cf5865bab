use crate::vocab::xsd;
use crate::{
    Boolean, Date, DateTime, DayTimeDuration, Decimal, Double, Duration, Float, Integer,
    LanguageStringRef, Numeric, SimpleLiteralRef, Term, TermRef, Time, XsdType, YearMonthDuration,
};
use oxrdf::{BlankNodeRef, Literal, LiteralRef, NamedNodeRef, Triple};
use std::cmp::Ordering;
use std::str::FromStr;

/// A term decoded into the value space of its datatype.
///
/// Literals with a known datatype but an ill-formed lexical form are kept as
/// [TypedValueRef::OtherLiteral].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TypedValueRef<'value> {
    NamedNode(NamedNodeRef<'value>),
    BlankNode(BlankNodeRef<'value>),
    Triple(&'value Triple),
    BooleanLiteral(Boolean),
    NumericLiteral(Numeric),
    SimpleLiteral(SimpleLiteralRef<'value>),
    LanguageStringLiteral(LanguageStringRef<'value>),
    DateTimeLiteral(DateTime),
    TimeLiteral(Time),
    DateLiteral(Date),
    DurationLiteral(Duration),
    YearMonthDurationLiteral(YearMonthDuration),
    DayTimeDurationLiteral(DayTimeDuration),
    OtherLiteral(LiteralRef<'value>),
}

impl<'value> TypedValueRef<'value> {
    /// Decodes a term.
    pub fn from_term(term: TermRef<'value>) -> Self {
        match term {
            TermRef::NamedNode(node) => Self::NamedNode(node),
            TermRef::BlankNode(node) => Self::BlankNode(node),
            TermRef::Triple(triple) => Self::Triple(triple),
            TermRef::Literal(literal) => Self::from_literal(literal),
        }
    }

    /// Decodes a literal.
    pub fn from_literal(literal: LiteralRef<'value>) -> Self {
        if let Some(language) = literal.language() {
            return Self::LanguageStringLiteral(LanguageStringRef {
                value: literal.value(),
                language,
            });
        }

        let value = literal.value();
        let Some(xsd_type) = XsdType::from_datatype(literal.datatype()) else {
            return Self::OtherLiteral(literal);
        };
        let decoded = match xsd_type {
            XsdType::String => Some(Self::SimpleLiteral(SimpleLiteralRef::new(value))),
            XsdType::Boolean => Boolean::from_str(value).ok().map(Self::BooleanLiteral),
            XsdType::Integer => Integer::from_str(value)
                .ok()
                .filter(|v| crate::check_integer_range(literal.datatype(), *v).is_ok())
                .map(|v| Self::NumericLiteral(Numeric::Integer(v))),
            XsdType::Decimal => Decimal::from_str(value)
                .ok()
                .map(|v| Self::NumericLiteral(Numeric::Decimal(v))),
            XsdType::Float => Float::from_str(value)
                .ok()
                .map(|v| Self::NumericLiteral(Numeric::Float(v))),
            XsdType::Double => Double::from_str(value)
                .ok()
                .map(|v| Self::NumericLiteral(Numeric::Double(v))),
            XsdType::DateTime => DateTime::from_str(value).ok().map(Self::DateTimeLiteral),
            XsdType::Date => Date::from_str(value).ok().map(Self::DateLiteral),
            XsdType::Time => Time::from_str(value).ok().map(Self::TimeLiteral),
            XsdType::Duration => Duration::from_str(value).ok().map(Self::DurationLiteral),
            XsdType::YearMonthDuration => YearMonthDuration::from_str(value)
                .ok()
                .map(Self::YearMonthDurationLiteral),
            XsdType::DayTimeDuration => DayTimeDuration::from_str(value)
                .ok()
                .map(Self::DayTimeDurationLiteral),
        };
        decoded.unwrap_or(Self::OtherLiteral(literal))
    }

    pub fn is_literal(&self) -> bool {
        !matches!(
            self,
            Self::NamedNode(_) | Self::BlankNode(_) | Self::Triple(_)
        )
    }

    /// Returns an owned term in canonical form.
    pub fn into_term(self) -> Term {
        match self {
            TypedValueRef::NamedNode(value) => Term::NamedNode(value.into_owned()),
            TypedValueRef::BlankNode(value) => Term::BlankNode(value.into_owned()),
            TypedValueRef::Triple(value) => Term::Triple(Box::new(value.clone())),
            TypedValueRef::BooleanLiteral(value) => Term::Literal(Literal::from(value)),
            TypedValueRef::NumericLiteral(value) => match value {
                Numeric::Integer(value) => Term::Literal(Literal::from(value)),
                Numeric::Decimal(value) => Term::Literal(Literal::from(value)),
                Numeric::Float(value) => Term::Literal(Literal::from(value)),
                Numeric::Double(value) => Term::Literal(Literal::from(value)),
            },
            TypedValueRef::SimpleLiteral(value) => Term::Literal(Literal::from(value.value)),
            TypedValueRef::LanguageStringLiteral(value) => Term::Literal(
                Literal::new_language_tagged_literal_unchecked(value.value, value.language),
            ),
            TypedValueRef::DateTimeLiteral(value) => Term::Literal(Literal::from(value)),
            TypedValueRef::TimeLiteral(value) => Term::Literal(Literal::from(value)),
            TypedValueRef::DateLiteral(value) => Term::Literal(Literal::from(value)),
            TypedValueRef::DurationLiteral(value) => Term::Literal(Literal::from(value)),
            TypedValueRef::YearMonthDurationLiteral(value) => {
                Term::Literal(Literal::from(value))
            }
            TypedValueRef::DayTimeDurationLiteral(value) => Term::Literal(Literal::from(value)),
            TypedValueRef::OtherLiteral(value) => Term::Literal(value.into_owned()),
        }
    }
}

impl PartialOrd for TypedValueRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match *self {
            TypedValueRef::BlankNode(a) => Some(match other {
                TypedValueRef::BlankNode(b) => a.as_str().cmp(b.as_str()),
                _ => Ordering::Less,
            }),
            TypedValueRef::NamedNode(a) => Some(match other {
                TypedValueRef::BlankNode(_) => Ordering::Greater,
                TypedValueRef::NamedNode(b) => a.as_str().cmp(b.as_str()),
                _ => Ordering::Less,
            }),
            TypedValueRef::Triple(a) => match other {
                TypedValueRef::NamedNode(_) | TypedValueRef::BlankNode(_) => {
                    Some(Ordering::Greater)
                }
                TypedValueRef::Triple(b) => Some(a.to_string().cmp(&b.to_string())),
                _ => Some(Ordering::Less),
            },
            a => match other {
                TypedValueRef::NamedNode(_)
                | TypedValueRef::BlankNode(_)
                | TypedValueRef::Triple(_) => Some(Ordering::Greater),
                _ => partial_cmp_literals(a, *other),
            },
        }
    }
}

/// Compares two literals by value. Returns [None] if they are not comparable.
fn partial_cmp_literals(a: TypedValueRef<'_>, b: TypedValueRef<'_>) -> Option<Ordering> {
    match (a, b) {
        (TypedValueRef::SimpleLiteral(a), TypedValueRef::SimpleLiteral(b)) => a.partial_cmp(&b),
        (TypedValueRef::LanguageStringLiteral(a), TypedValueRef::LanguageStringLiteral(b)) => {
            a.partial_cmp(&b)
        }
        (TypedValueRef::BooleanLiteral(a), TypedValueRef::BooleanLiteral(b)) => {
            a.partial_cmp(&b)
        }
        (TypedValueRef::NumericLiteral(a), TypedValueRef::NumericLiteral(b)) => {
            a.partial_cmp(&b)
        }
        (TypedValueRef::DateTimeLiteral(a), TypedValueRef::DateTimeLiteral(b)) => {
            a.partial_cmp(&b)
        }
        (TypedValueRef::TimeLiteral(a), TypedValueRef::TimeLiteral(b)) => a.partial_cmp(&b),
        (TypedValueRef::DateLiteral(a), TypedValueRef::DateLiteral(b)) => a.partial_cmp(&b),
        (
            TypedValueRef::DurationLiteral(_)
            | TypedValueRef::YearMonthDurationLiteral(_)
            | TypedValueRef::DayTimeDurationLiteral(_),
            TypedValueRef::DurationLiteral(_)
            | TypedValueRef::YearMonthDurationLiteral(_)
            | TypedValueRef::DayTimeDurationLiteral(_),
        ) => as_duration(a)?.partial_cmp(&as_duration(b)?),
        (TypedValueRef::OtherLiteral(a), TypedValueRef::OtherLiteral(b))
            if a.datatype() == b.datatype() && a.value() == b.value() =>
        {
            Some(Ordering::Equal)
        }
        _ => None,
    }
}

fn as_duration(value: TypedValueRef<'_>) -> Option<Duration> {
    match value {
        TypedValueRef::DurationLiteral(value) => Some(value),
        TypedValueRef::YearMonthDurationLiteral(value) => Some(value.into()),
        TypedValueRef::DayTimeDurationLiteral(value) => Some(value.into()),
        _ => None,
    }
}

macro_rules! impl_from {
    ($TYPE: ty, $VARIANT: path) => {
        impl<'data> From<$TYPE> for TypedValueRef<'data> {
            fn from(value: $TYPE) -> Self {
                $VARIANT(value)
            }
        }
    };
}

impl_from!(Boolean, TypedValueRef::BooleanLiteral);
impl_from!(Numeric, TypedValueRef::NumericLiteral);
impl_from!(SimpleLiteralRef<'data>, TypedValueRef::SimpleLiteral);
impl_from!(
    LanguageStringRef<'data>,
    TypedValueRef::LanguageStringLiteral
);
impl_from!(DateTime, TypedValueRef::DateTimeLiteral);
impl_from!(NamedNodeRef<'data>, TypedValueRef::NamedNode);

impl<'data> From<&'data Term> for TypedValueRef<'data> {
    fn from(value: &'data Term) -> Self {
        Self::from_term(value.as_ref())
    }
}

/// Returns whether `literal` has a known datatype whose lexical form is ill-formed.
pub fn is_ill_formed(literal: LiteralRef<'_>) -> bool {
    literal.datatype() != xsd::STRING
        && literal.language().is_none()
        && XsdType::from_datatype(literal.datatype()).is_some()
        && matches!(
            TypedValueRef::from_literal(literal),
            TypedValueRef::OtherLiteral(_)
        )
}
