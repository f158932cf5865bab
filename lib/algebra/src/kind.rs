use std::fmt::{Display, Formatter};

/// The number of operands an operator accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::Between(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(min) => count >= min,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::Between(min, max) => write!(f, "{min} to {max}"),
            Arity::AtLeast(min) => write!(f, "at least {min}"),
        }
    }
}

/// What an operator can be used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Evaluated against a single binding.
    Expression,
    /// Evaluated against a multiset of bindings.
    Aggregate,
    /// Executed against a store.
    Pattern,
    /// Wraps a body and can be both evaluated and executed (e.g., `base`).
    Wrapper,
    /// Only carries data for its parent (e.g., `separator` or `vars`).
    Auxiliary,
}

macro_rules! define_operator_kinds {
    ($($KIND: ident => $SYMBOL: literal, $ARITY: expr, $CATEGORY: ident;)*) => {
        /// The closed set of operators of the algebra.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum OperatorKind {
            $($KIND,)*
        }

        impl OperatorKind {
            /// All operator kinds in registry order.
            pub const ALL: &'static [OperatorKind] = &[$(OperatorKind::$KIND,)*];

            /// The SSE symbol of this operator.
            pub fn symbol(self) -> &'static str {
                match self {
                    $(OperatorKind::$KIND => $SYMBOL,)*
                }
            }

            /// The number of operands this operator accepts.
            pub fn arity(self) -> Arity {
                match self {
                    $(OperatorKind::$KIND => $ARITY,)*
                }
            }

            pub fn category(self) -> Category {
                match self {
                    $(OperatorKind::$KIND => Category::$CATEGORY,)*
                }
            }
        }
    };
}

define_operator_kinds! {
    // Logical
    Or => "||", Arity::Exactly(2), Expression;
    And => "&&", Arity::Exactly(2), Expression;
    Not => "!", Arity::Exactly(1), Expression;

    // Comparison
    Equal => "=", Arity::Exactly(2), Expression;
    NotEqual => "!=", Arity::Exactly(2), Expression;
    LessThan => "<", Arity::Exactly(2), Expression;
    LessOrEqual => "<=", Arity::Exactly(2), Expression;
    GreaterThan => ">", Arity::Exactly(2), Expression;
    GreaterOrEqual => ">=", Arity::Exactly(2), Expression;
    Compare => "<=>", Arity::Exactly(2), Expression;
    SameTerm => "sameTerm", Arity::Exactly(2), Expression;
    In => "in", Arity::AtLeast(1), Expression;
    NotIn => "notin", Arity::AtLeast(1), Expression;

    // Arithmetic
    Add => "+", Arity::Exactly(2), Expression;
    UnaryPlus => "+", Arity::Exactly(1), Expression;
    Subtract => "-", Arity::Exactly(2), Expression;
    UnaryMinus => "-", Arity::Exactly(1), Expression;
    Multiply => "*", Arity::Exactly(2), Expression;
    Divide => "/", Arity::Exactly(2), Expression;

    // Functional forms
    Bound => "bound", Arity::Exactly(1), Expression;
    If => "if", Arity::Exactly(3), Expression;
    Coalesce => "coalesce", Arity::AtLeast(0), Expression;
    Exists => "exists", Arity::Exactly(1), Expression;
    NotExists => "notexists", Arity::Exactly(1), Expression;

    // Terms
    IsIri => "isIRI", Arity::Exactly(1), Expression;
    IsUri => "isURI", Arity::Exactly(1), Expression;
    IsBlank => "isBlank", Arity::Exactly(1), Expression;
    IsLiteral => "isLiteral", Arity::Exactly(1), Expression;
    IsNumeric => "isNumeric", Arity::Exactly(1), Expression;
    Str => "str", Arity::Exactly(1), Expression;
    Lang => "lang", Arity::Exactly(1), Expression;
    Datatype => "datatype", Arity::Exactly(1), Expression;
    Iri => "iri", Arity::Exactly(1), Expression;
    Uri => "uri", Arity::Exactly(1), Expression;
    BNode => "bnode", Arity::Between(0, 1), Expression;
    StrDt => "strdt", Arity::Exactly(2), Expression;
    StrLang => "strlang", Arity::Exactly(2), Expression;
    Uuid => "uuid", Arity::Exactly(0), Expression;
    StrUuid => "struuid", Arity::Exactly(0), Expression;

    // Numerics
    Abs => "abs", Arity::Exactly(1), Expression;
    Ceil => "ceil", Arity::Exactly(1), Expression;
    Floor => "floor", Arity::Exactly(1), Expression;
    Round => "round", Arity::Exactly(1), Expression;
    Rand => "rand", Arity::Exactly(0), Expression;

    // Strings
    StrLen => "strlen", Arity::Exactly(1), Expression;
    SubStr => "substr", Arity::Between(2, 3), Expression;
    UCase => "ucase", Arity::Exactly(1), Expression;
    LCase => "lcase", Arity::Exactly(1), Expression;
    StrStarts => "strstarts", Arity::Exactly(2), Expression;
    StrEnds => "strends", Arity::Exactly(2), Expression;
    Contains => "contains", Arity::Exactly(2), Expression;
    StrBefore => "strbefore", Arity::Exactly(2), Expression;
    StrAfter => "strafter", Arity::Exactly(2), Expression;
    EncodeForUri => "encode_for_uri", Arity::Exactly(1), Expression;
    Concat => "concat", Arity::AtLeast(0), Expression;
    LangMatches => "langMatches", Arity::Exactly(2), Expression;
    Regex => "regex", Arity::Between(2, 3), Expression;
    Replace => "replace", Arity::Between(3, 4), Expression;

    // Dates and times
    Now => "now", Arity::Exactly(0), Expression;
    Year => "year", Arity::Exactly(1), Expression;
    Month => "month", Arity::Exactly(1), Expression;
    Day => "day", Arity::Exactly(1), Expression;
    Hours => "hours", Arity::Exactly(1), Expression;
    Minutes => "minutes", Arity::Exactly(1), Expression;
    Seconds => "seconds", Arity::Exactly(1), Expression;
    Timezone => "timezone", Arity::Exactly(1), Expression;
    Tz => "tz", Arity::Exactly(1), Expression;

    // Hashes
    Md5 => "md5", Arity::Exactly(1), Expression;
    Sha1 => "sha1", Arity::Exactly(1), Expression;
    Sha256 => "sha256", Arity::Exactly(1), Expression;
    Sha384 => "sha384", Arity::Exactly(1), Expression;
    Sha512 => "sha512", Arity::Exactly(1), Expression;

    // Quoted triples
    Triple => "triple", Arity::Exactly(3), Expression;
    Subject => "subject", Arity::Exactly(1), Expression;
    Predicate => "predicate", Arity::Exactly(1), Expression;
    Object => "object", Arity::Exactly(1), Expression;
    IsTriple => "isTRIPLE", Arity::Exactly(1), Expression;

    FunctionCall => "function_call", Arity::AtLeast(1), Expression;
    Asc => "asc", Arity::Exactly(1), Expression;
    Desc => "desc", Arity::Exactly(1), Expression;

    // Aggregates (the counts include the optional `distinct` marker)
    Count => "count", Arity::Between(0, 2), Aggregate;
    Sum => "sum", Arity::Between(1, 2), Aggregate;
    Avg => "avg", Arity::Between(1, 2), Aggregate;
    Min => "min", Arity::Between(1, 2), Aggregate;
    Max => "max", Arity::Between(1, 2), Aggregate;
    Sample => "sample", Arity::Between(1, 2), Aggregate;
    GroupConcat => "group_concat", Arity::Between(1, 3), Aggregate;

    // Graph patterns
    PatternTriple => "triple", Arity::Exactly(3), Pattern;
    Bgp => "bgp", Arity::AtLeast(0), Pattern;
    Join => "join", Arity::Exactly(2), Pattern;
    LeftJoin => "leftjoin", Arity::Between(2, 3), Pattern;
    Filter => "filter", Arity::Exactly(2), Pattern;
    Union => "union", Arity::Exactly(2), Pattern;
    Graph => "graph", Arity::Exactly(2), Pattern;
    Extend => "extend", Arity::Exactly(2), Pattern;
    Minus => "minus", Arity::Exactly(2), Pattern;
    Group => "group", Arity::Between(2, 3), Pattern;
    Order => "order", Arity::Exactly(2), Pattern;
    Project => "project", Arity::Exactly(2), Pattern;
    Distinct => "distinct", Arity::Exactly(1), Pattern;
    Reduced => "reduced", Arity::Exactly(1), Pattern;
    Slice => "slice", Arity::Exactly(3), Pattern;
    Table => "table", Arity::AtLeast(0), Pattern;
    Path => "path", Arity::Exactly(3), Pattern;
    PathAlternative => "alt", Arity::Exactly(2), Pattern;
    PathSequence => "seq", Arity::Exactly(2), Pattern;
    Reverse => "reverse", Arity::Exactly(1), Pattern;
    ZeroOrOne => "path?", Arity::Exactly(1), Pattern;
    ZeroOrMore => "path*", Arity::Exactly(1), Pattern;
    OneOrMore => "path+", Arity::Exactly(1), Pattern;
    NegatedPropertySet => "notoneof", Arity::AtLeast(1), Pattern;
    Service => "service", Arity::Between(2, 3), Pattern;

    // Query forms
    Construct => "construct", Arity::Exactly(2), Pattern;
    Ask => "ask", Arity::Exactly(1), Pattern;
    Describe => "describe", Arity::Exactly(2), Pattern;
    Dataset => "dataset", Arity::Exactly(2), Pattern;

    // Updates
    Insert => "insert", Arity::Exactly(1), Pattern;
    Delete => "delete", Arity::Exactly(1), Pattern;
    InsertData => "insertdata", Arity::Exactly(1), Pattern;
    DeleteData => "deletedata", Arity::Exactly(1), Pattern;
    DeleteWhere => "deletewhere", Arity::Exactly(1), Pattern;
    Modify => "modify", Arity::AtLeast(1), Pattern;
    Load => "load", Arity::Between(1, 3), Pattern;
    Clear => "clear", Arity::Between(1, 2), Pattern;
    Create => "create", Arity::Between(1, 2), Pattern;
    Drop => "drop", Arity::Between(1, 2), Pattern;
    AddGraph => "add", Arity::Between(2, 3), Pattern;
    MoveGraph => "move", Arity::Between(2, 3), Pattern;
    CopyGraph => "copy", Arity::Between(2, 3), Pattern;
    Update => "update", Arity::AtLeast(0), Pattern;
    Using => "using", Arity::Exactly(2), Pattern;
    With => "with", Arity::AtLeast(2), Pattern;

    Base => "base", Arity::Exactly(2), Wrapper;
    Prefix => "prefix", Arity::Exactly(2), Wrapper;

    // Data carried by a parent
    Separator => "separator", Arity::Exactly(1), Auxiliary;
    Vars => "vars", Arity::AtLeast(0), Auxiliary;
    Row => "row", Arity::AtLeast(0), Auxiliary;
    ExprList => "exprlist", Arity::AtLeast(0), Auxiliary;
    Sequence => "sequence", Arity::AtLeast(0), Auxiliary;
}

/// The symbol that forces a quoted triple inside a pattern-bearing operator.
pub const QUOTED_TRIPLE_SYMBOL: &str = "qtriple";

impl OperatorKind {
    /// Looks up the operator for `symbol` applied to `arity` operands.
    ///
    /// Symbols are matched case-insensitively. The arity only decides between the overloaded
    /// symbols `+` and `-`. Graph-pattern triples are never returned as the compiler derives them
    /// from their parent.
    pub fn resolve(symbol: &str, arity: usize) -> Option<OperatorKind> {
        if symbol.eq_ignore_ascii_case(QUOTED_TRIPLE_SYMBOL) {
            return Some(OperatorKind::Triple);
        }
        let mut candidates = Self::ALL.iter().copied().filter(|kind| {
            *kind != OperatorKind::PatternTriple && kind.symbol().eq_ignore_ascii_case(symbol)
        });
        let first = candidates.next()?;
        if first.arity().accepts(arity) {
            return Some(first);
        }
        Some(
            candidates
                .find(|kind| kind.arity().accepts(arity))
                .unwrap_or(first),
        )
    }

    /// Operators whose `triple` operands are graph patterns rather than quoted triples.
    pub fn bears_patterns(self) -> bool {
        matches!(
            self,
            OperatorKind::Bgp
                | OperatorKind::Construct
                | OperatorKind::Delete
                | OperatorKind::DeleteData
                | OperatorKind::DeleteWhere
                | OperatorKind::Graph
                | OperatorKind::Insert
                | OperatorKind::InsertData
                | OperatorKind::Path
        )
    }

    /// Whether the operator supports evaluation against a single binding.
    pub fn is_evaluatable(self) -> bool {
        matches!(self.category(), Category::Expression | Category::Wrapper)
    }

    /// Whether the operator supports execution against a store.
    pub fn is_executable(self) -> bool {
        matches!(self.category(), Category::Pattern | Category::Wrapper)
    }

    pub fn is_aggregate(self) -> bool {
        self.category() == Category::Aggregate
    }

    /// Whether repeated evaluations with the same operands yield the same result.
    ///
    /// `iri` and `uri` are not, as they resolve against the active base IRI.
    pub fn is_deterministic(self) -> bool {
        !matches!(
            self,
            OperatorKind::Iri
                | OperatorKind::Uri
                | OperatorKind::BNode
                | OperatorKind::Uuid
                | OperatorKind::StrUuid
                | OperatorKind::Rand
                | OperatorKind::Now
        )
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
