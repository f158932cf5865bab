use super::Queryable;
use crate::{AlgebraResult, Operand, Operator, OperatorKind};
use sparql_algebra_model::{
    Bindings, Graph, NamedNodePattern, Solution, Term, TermPattern, TermRef, TriplePattern,
    TypeError, Variable,
};

/// Converts a `triple` operator into the pattern it matches.
///
/// Both graph-pattern triples and quoted triples are accepted. The latter may appear as the
/// subject or object of a pattern.
pub fn triple_pattern(operator: &Operator) -> AlgebraResult<TriplePattern> {
    let [subject, predicate, object] = operator.operands() else {
        return Err(TypeError::new(format!("Expected a triple pattern, found {operator}")).into());
    };
    if !matches!(
        operator.kind(),
        OperatorKind::PatternTriple | OperatorKind::Triple
    ) {
        return Err(TypeError::new(format!("Expected a triple pattern, found {operator}")).into());
    }

    let predicate = match predicate {
        Operand::Term(Term::NamedNode(node)) => NamedNodePattern::NamedNode(node.clone()),
        Operand::Variable(variable) => NamedNodePattern::Variable(variable.clone()),
        _ => {
            return Err(TypeError::new(format!("Invalid predicate {predicate}")).into());
        }
    };
    Ok(TriplePattern {
        subject: term_pattern(subject)?,
        predicate,
        object: term_pattern(object)?,
    })
}

fn term_pattern(operand: &Operand) -> AlgebraResult<TermPattern> {
    match operand {
        Operand::Variable(variable) => Ok(TermPattern::Variable(variable.clone())),
        Operand::Term(term) => Ok(constant_pattern(term.clone())),
        Operand::Operator(operator) => Ok(TermPattern::Triple(Box::new(triple_pattern(
            operator,
        )?))),
        Operand::Symbol(_) | Operand::List(_) => {
            Err(TypeError::new(format!("Invalid term pattern {operand}")).into())
        }
    }
}

fn constant_pattern(term: Term) -> TermPattern {
    match term {
        Term::NamedNode(node) => TermPattern::NamedNode(node),
        Term::BlankNode(node) => TermPattern::BlankNode(node),
        Term::Literal(literal) => TermPattern::Literal(literal),
        Term::Triple(triple) => {
            let triple = *triple;
            TermPattern::Triple(Box::new(TriplePattern {
                subject: constant_pattern(triple.subject.into()),
                predicate: NamedNodePattern::NamedNode(triple.predicate),
                object: constant_pattern(triple.object),
            }))
        }
    }
}

/// Scans the graph. Blank nodes of the pattern only match themselves.
impl Queryable for Graph {
    fn query_pattern(&self, pattern: &TriplePattern) -> AlgebraResult<Vec<Solution>> {
        Ok(self
            .iter()
            .filter_map(|triple| {
                let mut solution = Solution::new();
                let matches = match_term(&pattern.subject, triple.subject.into(), &mut solution)
                    && match_predicate(&pattern.predicate, triple.predicate.into(), &mut solution)
                    && match_term(&pattern.object, triple.object, &mut solution);
                matches.then_some(solution)
            })
            .collect())
    }
}

fn match_predicate(
    pattern: &NamedNodePattern,
    term: TermRef<'_>,
    solution: &mut Solution,
) -> bool {
    match pattern {
        NamedNodePattern::NamedNode(node) => term == TermRef::from(node.as_ref()),
        NamedNodePattern::Variable(variable) => bind(variable, term, solution),
    }
}

fn match_term(pattern: &TermPattern, term: TermRef<'_>, solution: &mut Solution) -> bool {
    match (pattern, term) {
        (TermPattern::NamedNode(node), _) => term == TermRef::from(node.as_ref()),
        (TermPattern::BlankNode(node), _) => term == TermRef::from(node.as_ref()),
        (TermPattern::Literal(literal), _) => term == TermRef::from(literal.as_ref()),
        (TermPattern::Triple(pattern), TermRef::Triple(triple)) => {
            match_term(&pattern.subject, triple.subject.as_ref().into(), solution)
                && match_predicate(&pattern.predicate, triple.predicate.as_ref().into(), solution)
                && match_term(&pattern.object, triple.object.as_ref(), solution)
        }
        (TermPattern::Triple(_), _) => false,
        (TermPattern::Variable(variable), _) => bind(variable, term, solution),
    }
}

/// Binds `variable` or checks that its value equals `term` if it is already bound.
fn bind(variable: &Variable, term: TermRef<'_>, solution: &mut Solution) -> bool {
    match solution.get(variable.as_ref()) {
        Some(existing) => existing.as_ref() == term,
        None => {
            solution.insert(variable.clone(), term.into_owned());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile, CompileOptions};
    use sparql_algebra_model::{Literal, NamedNode, Triple};

    fn ex(name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://e.com/{name}"))
    }

    fn pattern(text: &str) -> TriplePattern {
        let operator = compile(text, &CompileOptions::default().with_prefix("ex", "http://e.com/"))
            .unwrap()
            .into_operator()
            .unwrap();
        let bgp = operator.operands()[0].as_operator().unwrap().clone();
        triple_pattern(&bgp).unwrap()
    }

    #[test]
    fn repeated_variables_must_agree() {
        let mut graph = Graph::new();
        graph.insert(&Triple::new(ex("a"), ex("p"), ex("a")));
        graph.insert(&Triple::new(ex("a"), ex("p"), ex("b")));

        let solutions = graph
            .query_pattern(&pattern("(bgp (triple ?x ex:p ?x))"))
            .unwrap();
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn quoted_triples_match_recursively() {
        let quoted = Triple::new(ex("a"), ex("p"), Literal::from(1));
        let mut graph = Graph::new();
        graph.insert(&Triple::new(quoted.clone(), ex("source"), ex("web")));

        let solutions = graph
            .query_pattern(&pattern("(bgp (triple (qtriple ?s ex:p ?o) ex:source ?src))"))
            .unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(
            solutions[0].get(Variable::new_unchecked("o").as_ref()),
            Some(&Term::from(Literal::from(1)))
        );
    }

    #[test]
    fn literals_are_not_predicates() {
        let operator = compile("(bgp (triple ?s 1 ?o))", &CompileOptions::default())
            .unwrap()
            .into_operator()
            .unwrap();
        let triple = operator.operands()[0].as_operator().unwrap();
        assert!(triple_pattern(triple).is_err());
    }
}
