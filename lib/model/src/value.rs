use crate::{
    Boolean, DateTime, DayTimeDuration, Decimal, Double, EvalResult, Integer, LanguageStringRef,
    Numeric, OwnedStringLiteral, SimpleLiteral, SimpleLiteralRef, StringLiteralRef, Term, TermRef,
    TypeError, TypedValueRef,
};
use oxrdf::{BlankNode, Literal, LiteralRef, NamedNode, NamedNodeRef, Triple};

/// A view on a term that only accepts terms of a particular kind.
///
/// Operators declare the kind of their arguments with this trait. Converting a term of another
/// kind raises a [TypeError].
pub trait RdfValueRef<'data>: Copy {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self>
    where
        Self: Sized;
}

fn unexpected<T>(expected: &str, term: TermRef<'_>) -> EvalResult<T> {
    TypeError::raise(format!("Expected {expected}, found {term}"))
}

impl<'data> RdfValueRef<'data> for TermRef<'data> {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        Ok(term)
    }
}

impl<'data> RdfValueRef<'data> for TypedValueRef<'data> {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        Ok(TypedValueRef::from_term(term))
    }
}

impl<'data> RdfValueRef<'data> for NamedNodeRef<'data> {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match term {
            TermRef::NamedNode(node) => Ok(node),
            _ => unexpected("an IRI", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for LiteralRef<'data> {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match term {
            TermRef::Literal(literal) => Ok(literal),
            _ => unexpected("a literal", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for &'data Triple {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match term {
            TermRef::Triple(triple) => Ok(triple),
            _ => unexpected("a quoted triple", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for Boolean {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match TypedValueRef::from_term(term) {
            TypedValueRef::BooleanLiteral(value) => Ok(value),
            _ => unexpected("a boolean", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for Numeric {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match TypedValueRef::from_term(term) {
            TypedValueRef::NumericLiteral(value) => Ok(value),
            _ => unexpected("a numeric literal", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for Integer {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match TypedValueRef::from_term(term) {
            TypedValueRef::NumericLiteral(Numeric::Integer(value)) => Ok(value),
            _ => unexpected("an integer", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for DateTime {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match TypedValueRef::from_term(term) {
            TypedValueRef::DateTimeLiteral(value) => Ok(value),
            _ => unexpected("a dateTime", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for SimpleLiteralRef<'data> {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match TypedValueRef::from_term(term) {
            TypedValueRef::SimpleLiteral(value) => Ok(value),
            _ => unexpected("a simple literal", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for LanguageStringRef<'data> {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match TypedValueRef::from_term(term) {
            TypedValueRef::LanguageStringLiteral(value) => Ok(value),
            _ => unexpected("a language-tagged string", term),
        }
    }
}

impl<'data> RdfValueRef<'data> for StringLiteralRef<'data> {
    fn from_term(term: TermRef<'data>) -> EvalResult<Self> {
        match TypedValueRef::from_term(term) {
            TypedValueRef::SimpleLiteral(value) => Ok(StringLiteralRef(value.value, None)),
            TypedValueRef::LanguageStringLiteral(value) => {
                Ok(StringLiteralRef(value.value, Some(value.language)))
            }
            _ => unexpected("a string literal", term),
        }
    }
}

/// Conversion of an operator result back into a term.
pub trait IntoTerm {
    fn into_term(self) -> Term;
}

impl IntoTerm for Term {
    fn into_term(self) -> Term {
        self
    }
}

impl IntoTerm for TermRef<'_> {
    fn into_term(self) -> Term {
        self.into_owned()
    }
}

impl IntoTerm for TypedValueRef<'_> {
    fn into_term(self) -> Term {
        TypedValueRef::into_term(self)
    }
}

impl IntoTerm for Numeric {
    fn into_term(self) -> Term {
        TypedValueRef::NumericLiteral(self).into_term()
    }
}

impl IntoTerm for SimpleLiteralRef<'_> {
    fn into_term(self) -> Term {
        Literal::new_simple_literal(self.value).into()
    }
}

impl IntoTerm for SimpleLiteral {
    fn into_term(self) -> Term {
        Literal::new_simple_literal(self.value).into()
    }
}

impl IntoTerm for StringLiteralRef<'_> {
    fn into_term(self) -> Term {
        match self.1 {
            Some(language) => {
                Literal::new_language_tagged_literal_unchecked(self.0, language).into()
            }
            None => Literal::new_simple_literal(self.0).into(),
        }
    }
}

impl IntoTerm for OwnedStringLiteral {
    fn into_term(self) -> Term {
        match self.1 {
            Some(language) => {
                Literal::new_language_tagged_literal_unchecked(self.0, language).into()
            }
            None => Literal::new_simple_literal(self.0).into(),
        }
    }
}

impl IntoTerm for NamedNode {
    fn into_term(self) -> Term {
        self.into()
    }
}

impl IntoTerm for BlankNode {
    fn into_term(self) -> Term {
        self.into()
    }
}

impl IntoTerm for Literal {
    fn into_term(self) -> Term {
        self.into()
    }
}

impl IntoTerm for Triple {
    fn into_term(self) -> Term {
        self.into()
    }
}

macro_rules! impl_into_term_via_literal {
    ($TYPE: ty) => {
        impl IntoTerm for $TYPE {
            fn into_term(self) -> Term {
                Literal::from(self).into()
            }
        }
    };
}

impl_into_term_via_literal!(Boolean);
impl_into_term_via_literal!(Integer);
impl_into_term_via_literal!(Decimal);
impl_into_term_via_literal!(Double);
impl_into_term_via_literal!(DateTime);
impl_into_term_via_literal!(DayTimeDuration);
