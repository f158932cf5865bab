use crate::kind::QUOTED_TRIPLE_SYMBOL;
use crate::options::CompileLogger;
use crate::sse::{self, set_active_context, Sexpr, SexprValue, SseContext};
use crate::{AlgebraError, AlgebraResult, CompileOptions, Operand, Operator, OperatorKind};
use sparql_algebra_functions::extensions;
use sparql_algebra_model::{SyntaxError, Term};

/// Compiles an algebra expression in SSE notation into an operator tree.
///
/// The base IRI and prefixes of `options` are the defaults for resolving IRIs. The effective base
/// and prefixes, including those declared by `base` and `prefix` forms, become the process-wide
/// [active context](crate::sse::active_context), replacing the context of the previous
/// compilation.
///
/// The result is an [Operand] as the expression may also be a single term or variable.
pub fn compile(text: &str, options: &CompileOptions) -> AlgebraResult<Operand> {
    let mut context = SseContext::default();
    context.set_base_iri(options.base_iri().cloned());
    for (prefix, iri) in options.prefixes() {
        context.declare_prefix(prefix.clone(), iri.clone());
    }

    let sexpr = sse::read(text, &mut context);
    set_active_context(context);

    let compiler = Compiler {
        logger: options.logger(),
    };
    compiler.transform(sexpr?, None, 0)
}

struct Compiler<'options> {
    logger: Option<&'options dyn CompileLogger>,
}

impl Compiler<'_> {
    fn transform(
        &self,
        sexpr: Sexpr,
        parent: Option<OperatorKind>,
        depth: usize,
    ) -> AlgebraResult<Operand> {
        match sexpr.value {
            SexprValue::List(elements) => self.transform_list(elements, parent, depth),
            value => Ok(atom(value)),
        }
    }

    fn transform_list(
        &self,
        elements: Vec<Sexpr>,
        parent: Option<OperatorKind>,
        depth: usize,
    ) -> AlgebraResult<Operand> {
        let mut elements = elements.into_iter();
        let Some(head) = elements.next() else {
            return Ok(Operand::List(Vec::new()));
        };

        match head.value {
            SexprValue::Symbol(symbol) => {
                let kind = resolve_kind(&symbol, elements.len(), parent).ok_or_else(|| {
                    tracing::debug!(depth, %symbol, "No operator found");
                    SyntaxError::new(format!("Unknown operator `{symbol}`"), head.position)
                })?;
                tracing::debug!(depth, operator = %kind, "Resolved operator");

                let operands = self.transform_operands(kind, elements, depth)?;
                Ok(Operator::new(kind, operands)?.into())
            }
            SexprValue::Term(Term::NamedNode(iri)) => {
                if !extensions::is_extension(iri.as_ref()) {
                    tracing::debug!(depth, %iri, "No extension function found");
                    return Err(AlgebraError::NotImplemented(format!("The function {iri}")));
                }
                tracing::debug!(depth, %iri, "Resolved extension function");

                let args = self.transform_operands(OperatorKind::FunctionCall, elements, depth)?;
                Ok(Operator::function_call(iri, args).into())
            }
            value => {
                // Lists without a leading operator keep the parent for their elements.
                let head = Sexpr {
                    value,
                    position: head.position,
                };
                let operands = std::iter::once(head)
                    .chain(elements)
                    .map(|element| self.transform(element, parent, depth + 1));
                Ok(Operand::List(self.collect(operands)?))
            }
        }
    }

    fn transform_operands(
        &self,
        kind: OperatorKind,
        elements: impl Iterator<Item = Sexpr>,
        depth: usize,
    ) -> AlgebraResult<Vec<Operand>> {
        let operands = elements.enumerate().map(|(i, element)| {
            if kind == OperatorKind::Prefix && i == 0 {
                Ok(data(element))
            } else {
                self.transform(element, Some(kind), depth + 1)
            }
        });
        self.collect(operands)
    }

    /// In diagnostic mode, operands that could not be constructed are logged and dropped.
    fn collect(
        &self,
        operands: impl Iterator<Item = AlgebraResult<Operand>>,
    ) -> AlgebraResult<Vec<Operand>> {
        let mut result = Vec::new();
        for operand in operands {
            match (operand, self.logger) {
                (Ok(operand), _) => result.push(operand),
                (Err(error @ AlgebraError::Syntax(_)), _) | (Err(error), None) => {
                    return Err(error)
                }
                (Err(error), Some(logger)) => logger.log_error(&error),
            }
        }
        Ok(result)
    }
}

fn resolve_kind(symbol: &str, arity: usize, parent: Option<OperatorKind>) -> Option<OperatorKind> {
    let kind = OperatorKind::resolve(symbol, arity)?;
    let is_pattern = kind == OperatorKind::Triple
        && parent.is_some_and(OperatorKind::bears_patterns)
        && !symbol.eq_ignore_ascii_case(QUOTED_TRIPLE_SYMBOL);
    Some(if is_pattern {
        OperatorKind::PatternTriple
    } else {
        kind
    })
}

fn atom(value: SexprValue) -> Operand {
    match value {
        SexprValue::Term(term) => Operand::Term(term),
        SexprValue::Variable(variable) => Operand::Variable(variable),
        SexprValue::Symbol(symbol) => Operand::Symbol(symbol),
        SexprValue::List(elements) => {
            Operand::List(elements.into_iter().map(data).collect())
        }
    }
}

/// Converts a value without resolving operators (e.g., the declarations of `prefix`).
fn data(sexpr: Sexpr) -> Operand {
    atom(sexpr.value)
}
