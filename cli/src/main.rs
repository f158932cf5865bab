use crate::cli::{Args, Command, Input};
use anyhow::{bail, Context};
use clap::Parser;
use oxiri::Iri;
use sparql_algebra::{compile, CompileOptions, EvaluationOptions, Memoize, Operand};
use sparql_algebra_model::{Solution, Term, Variable};
use std::fs;
use std::io::{self, stdin, stdout, Read, Write};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    match args.command {
        Command::Parse { input } => {
            let expression = compile_input(&input)?;
            print(&expression)
        }
        Command::Eval {
            input,
            bind,
            memoize,
            memoize_capacity,
        } => {
            // Compiled first since compiling the expression sets the active base IRI.
            let bindings = bind
                .iter()
                .map(|binding| parse_binding(binding.as_str()))
                .collect::<anyhow::Result<Solution>>()?;
            let expression = compile_input(&input)?;
            let memoize = match (memoize, memoize_capacity) {
                (false, _) => Memoize::Off,
                (true, None) => Memoize::Unbounded,
                (true, Some(capacity)) => Memoize::Bounded(capacity),
            };
            let options = EvaluationOptions::default().with_memoize(memoize);
            let result = expression.evaluate(&bindings, &options)?;
            print(&Operand::Term(result))
        }
        Command::Optimize { input } => {
            let expression = compile_input(&input)?;
            print(&expression.optimize())
        }
    }
}

fn compile_input(input: &Input) -> anyhow::Result<Operand> {
    let text = match (&input.expression, &input.file) {
        (Some(expression), _) => expression.clone(),
        (None, Some(file)) => fs::read_to_string(file)
            .with_context(|| format!("Could not read {}", file.display()))?,
        (None, None) => {
            let mut text = String::new();
            stdin().lock().read_to_string(&mut text)?;
            text
        }
    };
    let expression = compile(&text, &compile_options(input.base.as_deref())?)?;
    tracing::debug!(%expression, "Compiled expression");
    Ok(expression)
}

fn compile_options(base: Option<&str>) -> anyhow::Result<CompileOptions> {
    let mut options = CompileOptions::default();
    if let Some(base) = base {
        let base =
            Iri::parse(base.to_owned()).with_context(|| format!("Invalid base IRI {base}"))?;
        options = options.with_base_iri(base);
    }
    Ok(options)
}

/// Parses `?name=term` where the term is written in SSE.
fn parse_binding(binding: &str) -> anyhow::Result<(Variable, Term)> {
    let Some((name, value)) = binding.split_once('=') else {
        bail!("The binding '{binding}' is not of the form ?name=term")
    };
    let name = name.strip_prefix('?').unwrap_or(name);
    let variable =
        Variable::new(name).with_context(|| format!("Invalid variable name '{name}'"))?;
    match compile(value, &CompileOptions::default())
        .with_context(|| format!("Invalid value for ?{name}"))?
    {
        Operand::Term(term) => Ok((variable, term)),
        other => bail!("The value of ?{name} must be a term, found {other}"),
    }
}

fn print(operand: &Operand) -> anyhow::Result<()> {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{operand}")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn, reason = "tests")]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;
    use predicates::prelude::*;

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command
            .arg("run")
            .arg("--bin")
            .arg("sparql-algebra")
            .arg("--");
        command
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn cli_parse() {
        cli_command()
            .arg("parse")
            .arg("(prefix ((ex: <http://example.com/>)) (bgp (triple ?s ex:p ?o)))")
            .assert()
            .success()
            .stdout("(prefix ((ex: <http://example.com/>)) (bgp (triple ?s <http://example.com/p> ?o)))\n");
    }

    #[test]
    fn cli_parse_reports_syntax_errors() {
        cli_command()
            .arg("parse")
            .arg("(str ?x")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unbalanced parenthesis"));
    }

    #[test]
    fn cli_eval_with_bindings() {
        cli_command()
            .arg("eval")
            .arg("(concat (ucase ?x) ?y)")
            .arg("--bind")
            .arg("?x=\"ab\"")
            .arg("--bind")
            .arg("y=\"c\"")
            .arg("--memoize")
            .assert()
            .success()
            .stdout("\"ABc\"\n");
    }

    #[test]
    fn cli_eval_unbound_variable() {
        cli_command()
            .arg("eval")
            .arg("(str ?x)")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unbound variable ?x"));
    }

    #[test]
    fn cli_eval_relative_iri() {
        cli_command()
            .arg("eval")
            .arg("--base")
            .arg("http://example.com/")
            .arg("(iri \"a\")")
            .assert()
            .success()
            .stdout("<http://example.com/a>\n");
    }

    #[test]
    fn cli_optimize_file() -> Result<()> {
        let input_file = NamedTempFile::new("expression.sse")?;
        input_file.write_str("; constant sub-tree\n(+ ?x (* 2 3))\n")?;
        cli_command()
            .arg("optimize")
            .arg("--file")
            .arg(input_file.path())
            .assert()
            .success()
            .stdout("(+ ?x 6)\n");
        Ok(())
    }

    #[test]
    fn cli_optimize_stdin() {
        cli_command()
            .arg("optimize")
            .write_stdin("(* (strlen \"abc\") ?x)")
            .assert()
            .success()
            .stdout("(* 3 ?x)\n");
    }

    #[test]
    fn bindings_are_parsed_as_terms() -> Result<()> {
        let (variable, term) = parse_binding("?x=<http://example.com/>")?;
        assert_eq!(variable.as_str(), "x");
        assert_eq!(term.to_string(), "<http://example.com/>");
        assert!(parse_binding("?x=(str 1)").is_err());
        assert!(parse_binding("x").is_err());
        Ok(())
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
