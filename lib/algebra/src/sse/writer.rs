use super::number_datatype;
use crate::kind::QUOTED_TRIPLE_SYMBOL;
use crate::{Operand, Operator, OperatorKind};
use sparql_algebra_model::vocab::{xsd, XSD_NAMESPACE};
use sparql_algebra_model::{LiteralRef, TermRef};
use std::fmt::{Display, Formatter, Result, Write};

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_char('(')?;
        let mut operands = self.operands().iter();
        if self.kind() == OperatorKind::FunctionCall {
            // The IRI of the function takes the place of the symbol.
            if let Some(iri) = operands.next() {
                write!(f, "{iri}")?;
            }
        } else if self.kind() == OperatorKind::Triple {
            // Keeps quoted triples apart from graph-pattern triples when read back.
            f.write_str(QUOTED_TRIPLE_SYMBOL)?;
        } else {
            f.write_str(self.kind().symbol())?;
        }
        for operand in operands {
            write!(f, " {operand}")?;
        }
        f.write_char(')')
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Operand::Operator(operator) => operator.fmt(f),
            Operand::Term(term) => write_term(f, term.as_ref()),
            Operand::Variable(variable) => variable.fmt(f),
            Operand::Symbol(symbol) => f.write_str(symbol),
            Operand::List(operands) => {
                f.write_char('(')?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    operand.fmt(f)?;
                }
                f.write_char(')')
            }
        }
    }
}

pub(crate) fn write_term(f: &mut impl Write, term: TermRef<'_>) -> Result {
    match term {
        TermRef::NamedNode(node) => write!(f, "{node}"),
        TermRef::BlankNode(node) => write!(f, "{node}"),
        TermRef::Literal(literal) => write_literal(f, literal),
        TermRef::Triple(triple) => {
            write!(f, "({QUOTED_TRIPLE_SYMBOL} ")?;
            write_term(f, triple.subject.as_ref().into())?;
            write!(f, " {} ", triple.predicate)?;
            write_term(f, triple.object.as_ref())?;
            f.write_char(')')
        }
    }
}

fn write_literal(f: &mut impl Write, literal: LiteralRef<'_>) -> Result {
    let value = literal.value();
    let datatype = literal.datatype();
    if number_datatype(value) == Some(datatype)
        || (datatype == xsd::BOOLEAN && matches!(value, "true" | "false"))
    {
        return f.write_str(value);
    }

    write_string(f, value)?;
    if let Some(language) = literal.language() {
        write!(f, "@{language}")
    } else if datatype == xsd::STRING {
        Ok(())
    } else if let Some(local) = datatype.as_str().strip_prefix(XSD_NAMESPACE) {
        write!(f, "^^xsd:{local}")
    } else {
        write!(f, "^^{datatype}")
    }
}

fn write_string(f: &mut impl Write, value: &str) -> Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::{Literal, NamedNode, Term, Triple, Variable};

    fn render(term: impl Into<Term>) -> String {
        Operand::Term(term.into()).to_string()
    }

    #[test]
    fn literals() {
        assert_eq!(render(Literal::from(1)), "1");
        assert_eq!(render(Literal::from(true)), "true");
        assert_eq!(
            render(Literal::new_typed_literal("5.5", xsd::DECIMAL)),
            "5.5"
        );
        assert_eq!(
            render(Literal::new_typed_literal("01", xsd::BOOLEAN)),
            "\"01\"^^xsd:boolean"
        );
        assert_eq!(render(Literal::new_simple_literal("a\"b")), r#""a\"b""#);
        assert_eq!(
            render(Literal::new_language_tagged_literal_unchecked("chat", "fr")),
            "\"chat\"@fr"
        );
        assert_eq!(
            render(Literal::new_typed_literal(
                "x",
                NamedNode::new_unchecked("http://e.com/t")
            )),
            "\"x\"^^<http://e.com/t>"
        );
    }

    #[test]
    fn quoted_triples() {
        let triple = Triple::new(
            NamedNode::new_unchecked("http://e.com/s"),
            NamedNode::new_unchecked("http://e.com/p"),
            Literal::from(1),
        );
        assert_eq!(
            render(triple),
            "(qtriple <http://e.com/s> <http://e.com/p> 1)"
        );
    }

    #[test]
    fn operators() {
        let str = Operator::new(
            OperatorKind::Str,
            vec![Variable::new_unchecked("x").into()],
        )
        .unwrap();
        let call = Operator::function_call(
            NamedNode::new_unchecked("http://e.com/f"),
            vec![str.into(), Operand::List(vec![])],
        );
        assert_eq!(call.to_string(), "(<http://e.com/f> (str ?x) ())");
    }
}
