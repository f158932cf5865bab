use super::{number_datatype, SseContext};
use oxiri::Iri;
use sparql_algebra_model::{
    BlankNode, Literal, NamedNode, SyntaxError, Term, Variable,
};

/// A parsed SSE value together with its byte offset in the input.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Sexpr {
    pub(crate) value: SexprValue,
    pub(crate) position: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SexprValue {
    List(Vec<Sexpr>),
    Symbol(String),
    Term(Term),
    Variable(Variable),
}

/// Reads a single SSE value from `text`.
///
/// IRIs and prefixed names are resolved against `context`, which is updated with the `base` and
/// `prefix` declarations found in the text.
pub(crate) fn read(text: &str, context: &mut SseContext) -> Result<Sexpr, SyntaxError> {
    let mut reader = Reader {
        text,
        position: 0,
        scopes: vec![context.clone()],
        declared: context.clone(),
    };
    reader.skip_whitespace_and_comments();
    if reader.peek().is_none() {
        return Err(SyntaxError::new("Empty input", 0));
    }
    let value = reader.read_value()?;
    reader.skip_whitespace_and_comments();
    if reader.peek().is_some() {
        return Err(SyntaxError::new(
            "Unexpected content after the expression",
            reader.position,
        ));
    }
    *context = reader.declared;
    Ok(value)
}

struct Reader<'text> {
    text: &'text str,
    position: usize,
    /// The innermost scope is the last one.
    scopes: Vec<SseContext>,
    /// All declarations seen so far, later ones overwriting earlier ones.
    declared: SseContext,
}

impl Reader<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.text[self.position..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn scope(&self) -> &SseContext {
        // The reader never pops its root scope.
        &self.scopes[self.scopes.len() - 1]
    }

    fn error<T>(&self, message: impl Into<String>, position: usize) -> Result<T, SyntaxError> {
        Err(SyntaxError::new(message, position))
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == ';' || c == '#' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn read_value(&mut self) -> Result<Sexpr, SyntaxError> {
        self.skip_whitespace_and_comments();
        let position = self.position;
        let value = match self.peek() {
            None => return self.error("Unexpected end of input", position),
            Some('(') => return self.read_list(),
            Some(')') => return self.error("Unbalanced parenthesis", position),
            Some('"') => SexprValue::Term(self.read_string_literal()?.into()),
            Some('<') if self.starts_iri() => SexprValue::Term(self.read_iri()?.into()),
            Some(_) => self.read_atom()?,
        };
        Ok(Sexpr { value, position })
    }

    fn read_list(&mut self) -> Result<Sexpr, SyntaxError> {
        let position = self.position;
        self.bump();
        let mut elements: Vec<Sexpr> = Vec::new();
        let mut pushed_scope = false;
        loop {
            self.skip_whitespace_and_comments();
            match self.peek() {
                None => return self.error("Unbalanced parenthesis", position),
                Some(')') => {
                    self.bump();
                    break;
                }
                Some(_) => {}
            }

            let head = elements.first().map(|head| &head.value);
            let is_prefix = matches!(head, Some(SexprValue::Symbol(s)) if s.eq_ignore_ascii_case("prefix"));
            let is_base = matches!(head, Some(SexprValue::Symbol(s)) if s.eq_ignore_ascii_case("base"));

            if elements.len() == 1 && is_prefix {
                let (declarations, scope) = self.read_prefix_declarations()?;
                elements.push(declarations);
                self.scopes.push(scope);
                pushed_scope = true;
                continue;
            }

            let element = self.read_value()?;
            if elements.len() == 1 && is_base {
                if let SexprValue::Term(Term::NamedNode(iri)) = &element.value {
                    let base = Iri::parse(iri.as_str().to_owned()).map_err(|error| {
                        SyntaxError::new(error.to_string(), element.position)
                    })?;
                    let mut scope = self.scope().clone();
                    scope.set_base_iri(Some(base.clone()));
                    self.declared.set_base_iri(Some(base));
                    self.scopes.push(scope);
                    pushed_scope = true;
                }
            }
            elements.push(element);
        }
        if pushed_scope {
            self.scopes.pop();
        }
        Ok(Sexpr {
            value: SexprValue::List(elements),
            position,
        })
    }

    /// Reads `((p: <iri>) ...)` and returns the declarations and the scope they open.
    fn read_prefix_declarations(&mut self) -> Result<(Sexpr, SseContext), SyntaxError> {
        let position = self.position;
        if self.bump() != Some('(') {
            return self.error("Expected a list of prefix declarations", position);
        }
        let mut scope = self.scope().clone();
        let mut declarations = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let declaration_position = self.position;
            match self.bump() {
                Some(')') => break,
                Some('(') => {}
                _ => return self.error("Expected a prefix declaration", declaration_position),
            }

            self.skip_whitespace_and_comments();
            let name_position = self.position;
            let name = self.read_atom_text();
            let Some(prefix) = name.strip_suffix(':') else {
                return self.error(format!("Invalid prefix name `{name}`"), name_position);
            };
            let prefix = prefix.to_owned();

            let iri = self.read_value()?;
            let SexprValue::Term(Term::NamedNode(iri_node)) = &iri.value else {
                return self.error("Expected the IRI of the prefix", iri.position);
            };
            scope.declare_prefix(prefix.clone(), iri_node.as_str());
            self.declared
                .declare_prefix(prefix.clone(), iri_node.as_str());

            self.skip_whitespace_and_comments();
            if self.bump() != Some(')') {
                return self.error("Unbalanced parenthesis", declaration_position);
            }
            declarations.push(Sexpr {
                value: SexprValue::List(vec![
                    Sexpr {
                        value: SexprValue::Symbol(format!("{prefix}:")),
                        position: name_position,
                    },
                    iri,
                ]),
                position: declaration_position,
            });
        }
        Ok((
            Sexpr {
                value: SexprValue::List(declarations),
                position,
            },
            scope,
        ))
    }

    /// Distinguishes `<iri>` from the symbols `<`, `<=` and `<=>`.
    fn starts_iri(&self) -> bool {
        !matches!(self.peek_second(), None | Some('=' | '>' | '(' | ')'))
            && !self.peek_second().is_some_and(char::is_whitespace)
    }

    fn read_iri(&mut self) -> Result<NamedNode, SyntaxError> {
        let position = self.position;
        self.bump();
        let start = self.position;
        loop {
            match self.bump() {
                Some('>') => break,
                Some(c) if c.is_whitespace() => {
                    return self.error("Unterminated IRI", position);
                }
                Some(_) => {}
                None => return self.error("Unterminated IRI", position),
            }
        }
        let iri = &self.text[start..self.position - 1];
        let resolved = match self.scope().base_iri() {
            Some(base) => base.resolve(iri),
            None => Iri::parse(iri.to_owned()),
        };
        resolved
            .map(NamedNode::from)
            .map_err(|error| SyntaxError::new(format!("Invalid IRI <{iri}>: {error}"), position))
    }

    fn read_string_literal(&mut self) -> Result<Literal, SyntaxError> {
        let position = self.position;
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return self.error("Unterminated string", position),
                Some('"') => break,
                Some('\\') => {
                    let escape_position = self.position - 1;
                    let escaped = match self.bump() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        _ => return self.error("Invalid escape sequence", escape_position),
                    };
                    value.push(escaped);
                }
                Some(c) => value.push(c),
            }
        }

        match self.peek() {
            Some('@') => {
                self.bump();
                let language_position = self.position;
                let language = self.read_atom_text();
                Literal::new_language_tagged_literal(value, language).map_err(|error| {
                    SyntaxError::new(error.to_string(), language_position)
                })
            }
            Some('^') => {
                let datatype_position = self.position;
                if self.bump() != Some('^') || self.bump() != Some('^') {
                    return self.error("Expected `^^` before the datatype", datatype_position);
                }
                let datatype = if self.peek() == Some('<') {
                    self.read_iri()?
                } else {
                    let name = self.read_atom_text();
                    self.resolve_prefixed_name(&name, datatype_position)?
                };
                Ok(Literal::new_typed_literal(value, datatype))
            }
            _ => Ok(Literal::new_simple_literal(value)),
        }
    }

    fn read_atom_text(&mut self) -> String {
        let start = self.position;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '(' | ')' | '"') {
                break;
            }
            self.bump();
        }
        self.text[start..self.position].to_owned()
    }

    fn read_atom(&mut self) -> Result<SexprValue, SyntaxError> {
        let position = self.position;
        let text = self.read_atom_text();

        if let Some(name) = text.strip_prefix('?') {
            let variable = match name.strip_prefix('?') {
                // Non-distinguished variables keep their marker in the name.
                Some(inner) => Variable::new(inner).map(|_| Variable::new_unchecked(name)),
                None => Variable::new(name),
            };
            return variable
                .map(SexprValue::Variable)
                .map_err(|error| SyntaxError::new(error.to_string(), position));
        }
        if let Some(label) = text.strip_prefix("_:") {
            return BlankNode::new(label)
                .map(|node| SexprValue::Term(node.into()))
                .map_err(|error| SyntaxError::new(error.to_string(), position));
        }
        match text.as_str() {
            "true" => return Ok(SexprValue::Term(Literal::from(true).into())),
            "false" => return Ok(SexprValue::Term(Literal::from(false).into())),
            _ => {}
        }
        if let Some(datatype) = number_datatype(&text) {
            return Ok(SexprValue::Term(
                Literal::new_typed_literal(text, datatype).into(),
            ));
        }
        if text.contains(':') {
            return self
                .resolve_prefixed_name(&text, position)
                .map(|node| SexprValue::Term(node.into()));
        }
        Ok(SexprValue::Symbol(text))
    }

    fn resolve_prefixed_name(&self, name: &str, position: usize) -> Result<NamedNode, SyntaxError> {
        let Some((prefix, local)) = name.split_once(':') else {
            return self.error(format!("Expected a prefixed name, found `{name}`"), position);
        };
        let Some(namespace) = self.scope().prefix(prefix) else {
            return self.error(format!("Undeclared prefix `{prefix}:`"), position);
        };
        NamedNode::new(format!("{namespace}{local}"))
            .map_err(|error| SyntaxError::new(format!("Invalid IRI {name}: {error}"), position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::vocab::xsd;

    fn read_default(text: &str) -> Result<Sexpr, SyntaxError> {
        read(text, &mut SseContext::default())
    }

    fn list(sexpr: Sexpr) -> Vec<SexprValue> {
        match sexpr.value {
            SexprValue::List(elements) => elements.into_iter().map(|e| e.value).collect(),
            other => vec![other],
        }
    }

    #[test]
    fn reads_atoms() {
        let values = list(read_default(r#"(+ ?x 1 2.5 1e3 "a" "b"@en xsd:integer true _:b)"#).unwrap());
        assert_eq!(
            values,
            vec![
                SexprValue::Symbol("+".to_owned()),
                SexprValue::Variable(Variable::new_unchecked("x")),
                SexprValue::Term(Literal::new_typed_literal("1", xsd::INTEGER).into()),
                SexprValue::Term(Literal::new_typed_literal("2.5", xsd::DECIMAL).into()),
                SexprValue::Term(Literal::new_typed_literal("1e3", xsd::DOUBLE).into()),
                SexprValue::Term(Literal::new_simple_literal("a").into()),
                SexprValue::Term(Literal::new_language_tagged_literal_unchecked("b", "en").into()),
                SexprValue::Term(xsd::INTEGER.into_owned().into()),
                SexprValue::Term(Literal::from(true).into()),
                SexprValue::Term(BlankNode::new_unchecked("b").into()),
            ]
        );
    }

    #[test]
    fn comparison_symbols_are_not_iris() {
        let values = list(read_default("(<= <http://e.com/> <)").unwrap());
        assert_eq!(values[0], SexprValue::Symbol("<=".to_owned()));
        assert_eq!(
            values[1],
            SexprValue::Term(NamedNode::new_unchecked("http://e.com/").into())
        );
        assert_eq!(values[2], SexprValue::Symbol("<".to_owned()));
    }

    #[test]
    fn typed_literals_and_escapes() {
        let values = list(read_default(r#"("2"^^xsd:integer "a\"b\n" "x"^^<http://e.com/t>)"#).unwrap());
        assert_eq!(
            values[0],
            SexprValue::Term(Literal::new_typed_literal("2", xsd::INTEGER).into())
        );
        assert_eq!(
            values[1],
            SexprValue::Term(Literal::new_simple_literal("a\"b\n").into())
        );
        assert_eq!(
            values[2],
            SexprValue::Term(
                Literal::new_typed_literal("x", NamedNode::new_unchecked("http://e.com/t")).into()
            )
        );
    }

    #[test]
    fn base_and_prefix_are_scoped() {
        let mut context = SseContext::default();
        let text = "(base <http://e.com/> (prefix ((ex: <http://ex.org/>)) (f <a> ex:b)))";
        let sexpr = read(text, &mut context).unwrap();
        let SexprValue::List(base) = sexpr.value else {
            panic!("expected a list");
        };
        let SexprValue::List(prefix) = &base[2].value else {
            panic!("expected a list");
        };
        let body = list(prefix[2].clone());
        assert_eq!(
            body[1],
            SexprValue::Term(NamedNode::new_unchecked("http://e.com/a").into())
        );
        assert_eq!(
            body[2],
            SexprValue::Term(NamedNode::new_unchecked("http://ex.org/b").into())
        );
        assert_eq!(context.base_iri().map(Iri::as_str), Some("http://e.com/"));
        assert_eq!(context.prefix("ex"), Some("http://ex.org/"));
    }

    #[test]
    fn comments_are_skipped() {
        let values = list(read_default("; leading\n(str # trailing\n ?x)").unwrap());
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn errors_report_their_position() {
        let error = read_default("(str ?x").unwrap_err();
        assert_eq!(error.position(), 0);
        let error = read_default("(str \"abc)").unwrap_err();
        assert_eq!(error.position(), 5);
        let error = read_default("(str ex:a)").unwrap_err();
        assert_eq!(error.message(), "Undeclared prefix `ex:`");
        assert_eq!(error.position(), 5);
        let error = read_default("(str ?x))").unwrap_err();
        assert_eq!(error.position(), 8);
    }

    #[test]
    fn relative_iri_without_base_is_an_error() {
        assert!(read_default("<a>").is_err());
    }
}
