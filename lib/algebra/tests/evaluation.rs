use sparql_algebra::{compile, AlgebraError, CompileOptions, EvaluationOptions, Memoize, Operand};
use sparql_algebra_functions::{cast, extensions};
use sparql_algebra_model::vocab::xsd;
use sparql_algebra_model::{Literal, Solution, Term, TypeError, Variable};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn compile_default(text: &str) -> Operand {
    compile(text, &CompileOptions::default()).unwrap()
}

fn solution(pairs: &[(&str, Term)]) -> Solution {
    pairs
        .iter()
        .map(|(name, value)| (Variable::new_unchecked(*name), value.clone()))
        .collect()
}

#[test]
fn arithmetic_with_cast() {
    let result = compile_default(r#"(+ "2"^^xsd:integer "3.5"^^xsd:decimal)"#)
        .evaluate(&Solution::new(), &EvaluationOptions::default())
        .unwrap();
    assert_eq!(
        result,
        Term::from(Literal::new_typed_literal("5.5", xsd::DECIMAL))
    );
}

#[test]
fn unbound_variable() {
    let bindings = solution(&[("y", Literal::from(1).into())]);
    let options = EvaluationOptions::default();

    let bound = compile_default("(bound ?x)").evaluate(&bindings, &options);
    assert_eq!(bound.unwrap(), Term::from(Literal::from(false)));

    let error = compile_default("(str ?x)")
        .evaluate(&bindings, &options)
        .unwrap_err();
    assert!(matches!(error, AlgebraError::Type(_)));
}

#[test]
fn string_cast_of_doubles() {
    let cases = [("1.0E-7", "1.0E-7"), ("0.0", "0"), ("-0.0", "-0")];
    for (value, expected) in cases {
        let double = Literal::new_typed_literal(value, xsd::DOUBLE);
        let result = cast(xsd::STRING, double.as_ref().into()).unwrap();
        assert_eq!(result, Literal::from(expected), "casting {value}");
    }

    let result = compile_default("(xsd:string 1.0E-7)")
        .evaluate(&Solution::new(), &EvaluationOptions::default())
        .unwrap();
    assert_eq!(result, Term::from(Literal::from("1.0E-7")));
}

#[test]
fn memoized_evaluation_calls_the_function_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    extensions::register("http://example.com/fn#counted", move |args| {
        counter.fetch_add(1, Ordering::SeqCst);
        args.first()
            .cloned()
            .ok_or_else(|| TypeError::new("Expected an argument"))
    })
    .unwrap();

    let expression = compile_default("(<http://example.com/fn#counted> (+ ?x 1))");
    let options = EvaluationOptions::default().with_memoize(Memoize::Unbounded);
    let bindings = solution(&[("x", Literal::from(1).into())]);

    let first = expression.evaluate(&bindings, &options).unwrap();
    let second = expression.evaluate(&bindings, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let other = solution(&[("x", Literal::from(2).into())]);
    expression.evaluate(&other, &options).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    expression
        .evaluate(&bindings, &EvaluationOptions::default())
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn constant_folding_preserves_results() {
    let empty = Solution::new();
    let options = EvaluationOptions::default();
    let expressions = [
        r#"(concat (ucase "a") (str 1))"#,
        r#"(xsd:dateTime "2020-01-01T00:00:00Z")"#,
        "(if (< 1 2) (abs -3) 0)",
        "(coalesce (/ 1 0) 2)",
    ];
    for text in expressions {
        let expected = compile_default(text).evaluate(&empty, &options).unwrap();
        let optimized = compile_default(text).optimize();
        assert_eq!(optimized, Operand::Term(expected), "optimizing {text}");
    }

    let failing = ["(/ 1 0)", "(xsd:integer \"a\")", "(strlang \"a\" \"\")"];
    for text in failing {
        let optimized = compile_default(text).optimize();
        assert_eq!(optimized, compile_default(text), "optimizing {text}");
        let error = optimized.evaluate(&empty, &options).unwrap_err();
        assert!(error.is_type_error(), "evaluating {text}");
    }
}

#[test]
fn distinct_aggregates_ignore_multiplicities_and_order() {
    let rows = |values: &[i32]| {
        values
            .iter()
            .map(|value| solution(&[("x", Literal::from(*value).into())]))
            .collect::<Vec<_>>()
    };
    let options = EvaluationOptions::default();
    for text in ["(sum distinct ?x)", "(count distinct ?x)", "(max distinct ?x)"] {
        let aggregate = compile_default(text).into_operator().unwrap();
        let duplicated = aggregate.aggregate(&rows(&[1, 2, 2, 3, 1]), &options).unwrap();
        let reordered = aggregate.aggregate(&rows(&[3, 1, 2]), &options).unwrap();
        assert_eq!(duplicated, reordered, "aggregating {text}");
    }
}

#[test]
fn aggregate_results_as_bound_variables() {
    let expression = compile_default("(* (sum ?x) 2)").into_operator().unwrap();
    let rows = [1, 2, 3].map(|value| solution(&[("x", Literal::from(value).into())]));
    let options = EvaluationOptions::default();

    let mut bindings = Solution::new();
    let expression = expression.replace_aggregates(&mut |aggregate| {
        let placeholder = Variable::new_unchecked("agg");
        let value = aggregate.aggregate(&rows, &options).unwrap();
        bindings.insert(placeholder.clone(), value);
        placeholder
    });

    assert_eq!(
        expression.evaluate(&bindings, &options).unwrap(),
        Term::from(Literal::from(12))
    );
}
