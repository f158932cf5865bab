//! The SSE (SPARQL S-Expression) notation of the algebra.
//!
//! The reader turns the text into a tree of [Sexpr]s, resolving IRIs and prefixed names on the
//! way. The writer renders operator trees back into the same notation.

mod context;
mod reader;
mod writer;

pub use context::{active_base_iri, active_context, SseContext};
pub(crate) use context::set_active_context;
pub(crate) use reader::{read, Sexpr, SexprValue};

use sparql_algebra_model::vocab::xsd;
use sparql_algebra_model::NamedNodeRef;

/// Returns the datatype of a numeric SSE token, or [None] if `text` is not a number.
pub(crate) fn number_datatype(text: &str) -> Option<NamedNodeRef<'static>> {
    let unsigned = text.strip_prefix(|c| c == '+' || c == '-').unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(|c| c == 'e' || c == 'E') {
        Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
        None => (unsigned, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let has_digits = !integer.is_empty() || fraction.is_some_and(|f| !f.is_empty());
    if !has_digits || !is_digits(integer) || !fraction.map_or(true, is_digits) {
        return None;
    }

    match exponent {
        Some(exponent) => {
            let exponent = exponent
                .strip_prefix(|c| c == '+' || c == '-')
                .unwrap_or(exponent);
            (!exponent.is_empty() && is_digits(exponent)).then_some(xsd::DOUBLE)
        }
        None if fraction.is_some() => Some(xsd::DECIMAL),
        None => Some(xsd::INTEGER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(number_datatype("42"), Some(xsd::INTEGER));
        assert_eq!(number_datatype("-7"), Some(xsd::INTEGER));
        assert_eq!(number_datatype("3.5"), Some(xsd::DECIMAL));
        assert_eq!(number_datatype(".5"), Some(xsd::DECIMAL));
        assert_eq!(number_datatype("1.0E-7"), Some(xsd::DOUBLE));
        assert_eq!(number_datatype("1e6"), Some(xsd::DOUBLE));
    }

    #[test]
    fn non_numbers() {
        assert_eq!(number_datatype("-"), None);
        assert_eq!(number_datatype("+"), None);
        assert_eq!(number_datatype("."), None);
        assert_eq!(number_datatype("1e"), None);
        assert_eq!(number_datatype("abc"), None);
        assert_eq!(number_datatype("1.2.3"), None);
    }
}
