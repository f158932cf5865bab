use crate::{EvalResult, TypeError};
use std::cmp::Ordering;

/// A literal without language tag whose datatype is `xsd:string`.
#[derive(Clone, PartialEq, Eq, Debug, PartialOrd, Ord, Hash)]
pub struct SimpleLiteral {
    pub value: String,
}

impl SimpleLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_ref(&self) -> SimpleLiteralRef<'_> {
        SimpleLiteralRef { value: &self.value }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord, Hash)]
pub struct SimpleLiteralRef<'value> {
    pub value: &'value str,
}

impl<'value> SimpleLiteralRef<'value> {
    pub fn new(value: &'value str) -> Self {
        Self { value }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_owned(self) -> SimpleLiteral {
        SimpleLiteral {
            value: self.value.to_owned(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct LanguageStringRef<'value> {
    pub value: &'value str,
    pub language: &'value str,
}

impl PartialOrd for LanguageStringRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.language == other.language {
            Some(self.value.cmp(other.value))
        } else {
            None
        }
    }
}

/// A reference to a string literal in RDF, consisting of a value and an optional language tag.
///
/// Used for functions that accept both simple literals and language-tagged strings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StringLiteralRef<'value>(pub &'value str, pub Option<&'value str>);

impl StringLiteralRef<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_owned(self) -> OwnedStringLiteral {
        OwnedStringLiteral(self.0.to_owned(), self.1.map(ToOwned::to_owned))
    }
}

/// An owned string literal in RDF, consisting of a value and an optional language tag.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OwnedStringLiteral(pub String, pub Option<String>);

impl OwnedStringLiteral {
    pub fn new(value: String, language: Option<String>) -> OwnedStringLiteral {
        OwnedStringLiteral(value, language)
    }
}

pub struct CompatibleStringArgs<'data> {
    pub lhs: &'data str,
    pub rhs: &'data str,
    pub language: Option<&'data str>,
}

impl<'data> CompatibleStringArgs<'data> {
    /// Checks whether two [StringLiteralRef] are compatible and if they are return a new
    /// [CompatibleStringArgs].
    ///
    /// Relevant Resources:
    /// - [SPARQL 1.1 - Argument Compatibility Rules](https://www.w3.org/TR/2013/REC-sparql11-query-20130321/#func-arg-compatibility)
    pub fn try_from(
        lhs: StringLiteralRef<'data>,
        rhs: StringLiteralRef<'data>,
    ) -> EvalResult<CompatibleStringArgs<'data>> {
        let is_compatible = rhs.1.is_none() || lhs.1 == rhs.1;

        if !is_compatible {
            return TypeError::raise(format!(
                "Incompatible language tags {:?} and {:?}",
                lhs.1, rhs.1
            ));
        }

        Ok(CompatibleStringArgs {
            lhs: lhs.0,
            rhs: rhs.0,
            language: lhs.1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_string_args() {
        let en = StringLiteralRef("abc", Some("en"));
        let plain = StringLiteralRef("b", None);
        let fr = StringLiteralRef("b", Some("fr"));

        assert!(CompatibleStringArgs::try_from(en, plain).is_ok());
        assert!(CompatibleStringArgs::try_from(plain, en).is_err());
        assert!(CompatibleStringArgs::try_from(en, fr).is_err());
    }

    #[test]
    fn length_counts_chars() {
        assert_eq!(StringLiteralRef("h\u{e9}llo", None).len(), 5);
    }
}
