//! Command-line interface for the alpha-CTL planning checker.

mod display;
mod models;

use actl_mc::EvalError;
use actl_model::{induced, Lts, Policy};
use clap::{Parser, Subcommand};
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI error with source context for pretty printing.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("parse error: {message}")]
    #[diagnostic(code(actl::parse_error))]
    ParseError {
        message: String,
        #[source_code]
        src: NamedSource<Arc<String>>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("evaluation error: {0}")]
    EvalError(#[from] EvalError),

    #[error("unknown model id {id}; available: {available}")]
    UnknownModel { id: u32, available: String },
}

impl CliError {
    fn from_parse_error(e: actl_syntax::ParseError, source: Arc<String>) -> Self {
        let span = e.span();
        CliError::ParseError {
            message: e.to_string(),
            src: NamedSource::new("<formula>", source),
            span: (span.start, span.len()).into(),
        }
    }
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "actl", version)]
#[command(
    about = "Alpha-CTL policy synthesis over nondeterministic planning domains",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a goal formula and echo its canonical form
    Parse {
        /// Goal formula, e.g. "ag(ef(and(r, not(p))))"
        formula: String,
    },

    /// List the registered example domains
    Models,

    /// Print a registered domain
    Show {
        /// Model id
        id: u32,
    },

    /// Synthesize a policy for a goal over a registered domain
    Check {
        /// Model id
        id: u32,

        /// Goal formula, e.g. "ag(ef(and(r, not(p))))"
        formula: String,

        /// Print only the policy, not the induced domain
        #[arg(long)]
        policy_only: bool,
    },
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { formula } => {
            let parsed = parse_formula(&formula)?;
            println!("{parsed}");
        }
        Commands::Models => {
            for id in models::MODEL_IDS {
                let description = models::describe(id).unwrap_or("");
                println!("{id}: {description}");
            }
        }
        Commands::Show { id } => {
            let lts = lookup_model(id)?;
            print!("{}", display::render_lts(&lts));
        }
        Commands::Check {
            id,
            formula,
            policy_only,
        } => {
            let (policy, projection) = satisfy(id, &formula)?;
            println!("policy:");
            print!("{}", display::render_policy(&policy));
            if !policy_only {
                println!("induced domain:");
                print!("{}", display::render_lts(&projection));
            }
        }
    }
    Ok(())
}

/// Look up a domain, synthesize the policy for a goal, and project the
/// domain through it.
fn satisfy(id: u32, formula: &str) -> CliResult<(Policy, Lts)> {
    let lts = lookup_model(id)?;
    let goal = parse_formula(formula)?;
    let policy = actl_mc::sat(&lts, &goal)?;
    info!(model = id, goal = %goal, pairs = policy.len(), "synthesized policy");
    let projection = induced(&lts, &policy);
    Ok((policy, projection))
}

fn lookup_model(id: u32) -> CliResult<Lts> {
    models::model(id).ok_or_else(|| CliError::UnknownModel {
        id,
        available: models::MODEL_IDS.map(|i| i.to_string()).join(", "),
    })
}

fn parse_formula(source: &str) -> CliResult<actl_syntax::Formula> {
    let text = Arc::new(source.to_string());
    actl_syntax::parse(source).map_err(|e| CliError::from_parse_error(e, text))
}
