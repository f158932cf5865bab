use crate::sse::active_base_iri;
use crate::{AlgebraError, AlgebraResult, OperatorKind};
use sparql_algebra_functions::extensions;
use sparql_algebra_functions::*;
use sparql_algebra_model::{Term, TypeError};

/// Applies the combining function of `kind` to the evaluated operands.
pub(super) fn apply(kind: OperatorKind, args: &[Term]) -> AlgebraResult<Term> {
    let result = match kind {
        OperatorKind::Not => dispatch_unary(&NotRdfOp::new(), args),

        OperatorKind::Equal => dispatch_binary(&EqualRdfOp::new(), args),
        OperatorKind::NotEqual => dispatch_binary(&NotEqualRdfOp::new(), args),
        OperatorKind::LessThan => dispatch_binary(&LessThanRdfOp::new(), args),
        OperatorKind::LessOrEqual => dispatch_binary(&LessOrEqualRdfOp::new(), args),
        OperatorKind::GreaterThan => dispatch_binary(&GreaterThanRdfOp::new(), args),
        OperatorKind::GreaterOrEqual => dispatch_binary(&GreaterOrEqualRdfOp::new(), args),
        OperatorKind::Compare => dispatch_binary(&CompareRdfOp::new(), args),
        OperatorKind::SameTerm => dispatch_binary(&SameTermRdfOp::new(), args),

        OperatorKind::Add => dispatch_binary(&AddRdfOp::new(), args),
        OperatorKind::UnaryPlus => dispatch_unary(&UnaryPlusRdfOp::new(), args),
        OperatorKind::Subtract => dispatch_binary(&SubRdfOp::new(), args),
        OperatorKind::UnaryMinus => dispatch_unary(&UnaryMinusRdfOp::new(), args),
        OperatorKind::Multiply => dispatch_binary(&MulRdfOp::new(), args),
        OperatorKind::Divide => dispatch_binary(&DivRdfOp::new(), args),

        OperatorKind::IsIri | OperatorKind::IsUri => dispatch_unary(&IsIriRdfOp::new(), args),
        OperatorKind::IsBlank => dispatch_unary(&IsBlankRdfOp::new(), args),
        OperatorKind::IsLiteral => dispatch_unary(&IsLiteralRdfOp::new(), args),
        OperatorKind::IsNumeric => dispatch_unary(&IsNumericRdfOp::new(), args),
        OperatorKind::Str => dispatch_unary(&StrRdfOp::new(), args),
        OperatorKind::Lang => dispatch_unary(&LangRdfOp::new(), args),
        OperatorKind::Datatype => dispatch_unary(&DatatypeRdfOp::new(), args),
        OperatorKind::Iri | OperatorKind::Uri => {
            dispatch_unary(&IriRdfOp::new(active_base_iri()), args)
        }
        OperatorKind::BNode => dispatch_nullary(&BNodeRdfOp::new(), args),
        OperatorKind::StrDt => dispatch_binary(&StrDtRdfOp::new(), args),
        OperatorKind::StrLang => dispatch_binary(&StrLangRdfOp::new(), args),
        OperatorKind::Uuid => dispatch_nullary(&UuidRdfOp::new(), args),
        OperatorKind::StrUuid => dispatch_nullary(&StrUuidRdfOp::new(), args),

        OperatorKind::Abs => dispatch_unary(&AbsRdfOp::new(), args),
        OperatorKind::Ceil => dispatch_unary(&CeilRdfOp::new(), args),
        OperatorKind::Floor => dispatch_unary(&FloorRdfOp::new(), args),
        OperatorKind::Round => dispatch_unary(&RoundRdfOp::new(), args),
        OperatorKind::Rand => dispatch_nullary(&RandRdfOp::new(), args),

        OperatorKind::StrLen => dispatch_unary(&StrLenRdfOp::new(), args),
        OperatorKind::SubStr if args.len() == 2 => dispatch_binary(&SubStrRdfOp::new(), args),
        OperatorKind::SubStr => dispatch_ternary(&SubStrRdfOp::new(), args),
        OperatorKind::UCase => dispatch_unary(&UCaseRdfOp::new(), args),
        OperatorKind::LCase => dispatch_unary(&LCaseRdfOp::new(), args),
        OperatorKind::StrStarts => dispatch_binary(&StrStartsRdfOp::new(), args),
        OperatorKind::StrEnds => dispatch_binary(&StrEndsRdfOp::new(), args),
        OperatorKind::Contains => dispatch_binary(&ContainsRdfOp::new(), args),
        OperatorKind::StrBefore => dispatch_binary(&StrBeforeRdfOp::new(), args),
        OperatorKind::StrAfter => dispatch_binary(&StrAfterRdfOp::new(), args),
        OperatorKind::EncodeForUri => dispatch_unary(&EncodeForUriRdfOp::new(), args),
        OperatorKind::Concat => dispatch_n_ary(&ConcatRdfOp::new(), args),
        OperatorKind::LangMatches => dispatch_binary(&LangMatchesRdfOp::new(), args),
        OperatorKind::Regex if args.len() == 2 => dispatch_binary(&RegexRdfOp::new(), args),
        OperatorKind::Regex => dispatch_ternary(&RegexRdfOp::new(), args),
        OperatorKind::Replace if args.len() == 3 => dispatch_ternary(&ReplaceRdfOp::new(), args),
        OperatorKind::Replace => dispatch_quaternary(&ReplaceRdfOp::new(), args),

        OperatorKind::Now => dispatch_nullary(&NowRdfOp::new(), args),
        OperatorKind::Year => dispatch_unary(&YearRdfOp::new(), args),
        OperatorKind::Month => dispatch_unary(&MonthRdfOp::new(), args),
        OperatorKind::Day => dispatch_unary(&DayRdfOp::new(), args),
        OperatorKind::Hours => dispatch_unary(&HoursRdfOp::new(), args),
        OperatorKind::Minutes => dispatch_unary(&MinutesRdfOp::new(), args),
        OperatorKind::Seconds => dispatch_unary(&SecondsRdfOp::new(), args),
        OperatorKind::Timezone => dispatch_unary(&TimezoneRdfOp::new(), args),
        OperatorKind::Tz => dispatch_unary(&TzRdfOp::new(), args),

        OperatorKind::Md5 => dispatch_unary(&Md5RdfOp::new(), args),
        OperatorKind::Sha1 => dispatch_unary(&Sha1RdfOp::new(), args),
        OperatorKind::Sha256 => dispatch_unary(&Sha256RdfOp::new(), args),
        OperatorKind::Sha384 => dispatch_unary(&Sha384RdfOp::new(), args),
        OperatorKind::Sha512 => dispatch_unary(&Sha512RdfOp::new(), args),

        OperatorKind::Triple => dispatch_ternary(&TripleRdfOp::new(), args),
        OperatorKind::Subject => dispatch_unary(&SubjectRdfOp::new(), args),
        OperatorKind::Predicate => dispatch_unary(&PredicateRdfOp::new(), args),
        OperatorKind::Object => dispatch_unary(&ObjectRdfOp::new(), args),
        OperatorKind::IsTriple => dispatch_unary(&IsTripleRdfOp::new(), args),

        OperatorKind::FunctionCall => match args.split_first() {
            Some((Term::NamedNode(iri), args)) => extensions::call(iri.as_ref(), args),
            _ => TypeError::raise("A function call expects the IRI of the function"),
        },

        _ => {
            return Err(AlgebraError::NotImplemented(format!(
                "Evaluating `{kind}`"
            )))
        }
    };
    Ok(result?)
}
