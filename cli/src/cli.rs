use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(about, version, name = "sparql-algebra")]
/// Compiles, evaluates and optimizes SPARQL algebra expressions written in SSE
pub struct Args {
    /// The most verbose level of log messages written to stderr
    ///
    /// The RUST_LOG environment variable refines it.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile an expression and print the operator tree
    Parse {
        #[command(flatten)]
        input: Input,
    },
    /// Evaluate an expression against a single binding
    Eval {
        #[command(flatten)]
        input: Input,
        /// Binds a variable, e.g. `--bind '?x="abc"@en'`
        ///
        /// The value is a term in SSE notation. The flag can be repeated.
        #[arg(short, long, value_name = "?VAR=TERM")]
        bind: Vec<String>,
        /// Caches the results of each operator
        #[arg(long)]
        memoize: bool,
        /// The maximal number of cached results per operator
        ///
        /// By default the cache is unbounded.
        #[arg(long, requires = "memoize")]
        memoize_capacity: Option<NonZeroUsize>,
    },
    /// Fold the constant sub-trees of an expression and print the result
    Optimize {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(ClapArgs)]
pub struct Input {
    /// The expression in SSE notation
    ///
    /// If neither an expression nor a file is given, stdin is read.
    #[arg(conflicts_with = "file")]
    pub expression: Option<String>,
    /// File to read the expression from
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
    /// Base IRI to resolve relative IRIs against
    #[arg(long, value_hint = ValueHint::Url)]
    pub base: Option<String>,
}
