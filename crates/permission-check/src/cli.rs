//! Command dispatch for the `permission-check` entrypoint.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use permission_catalog::{PermissionCatalog, PermissionsCatalog};
use permission_clause::{PermissionClause, RoleSet};
use tracing::{debug, info};

use crate::config::{CheckConfig, LogLevel};
use crate::error::CheckError;
use crate::output::{
    write_diagnostic, write_rpn, write_target, write_target_verdict, write_verdict,
};

/// Evaluate permission clauses and catalogs against a set of roles.
#[derive(Parser, Debug)]
#[command(name = "permission-check", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a clause; exits with status 1 when access is denied.
    Eval(EvalArgs),
    /// Print a clause in reverse Polish notation.
    Rpn {
        /// Clause to compile.
        clause: String,
    },
    /// List the catalog targets the given roles may access.
    Catalog(CatalogArgs),
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Clause to evaluate.
    pub clause: String,
    /// Role held by the principal; repeat for several roles.
    #[arg(short, long = "role")]
    pub roles: Vec<String>,
    /// Also print the compiled clause and any failure.
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for the `catalog` command.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog definition; defaults to `PERMISSION_CHECK_CATALOG`.
    pub path: Option<PathBuf>,
    /// Role held by the principal; repeat for several roles.
    #[arg(short, long = "role")]
    pub roles: Vec<String>,
    /// Print every target with its verdict instead of only permitted ones.
    #[arg(long)]
    pub explain: bool,
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command completed and, for `eval`, access was granted.
    Success,
    /// `eval` completed and access was denied.
    Denied,
}

impl Cli {
    /// Fold the command line overrides into `config`.
    #[must_use]
    pub fn configure(&self, config: CheckConfig) -> CheckConfig {
        let catalog = match &self.command {
            Command::Catalog(args) => args.path.clone(),
            Command::Eval(_) | Command::Rpn { .. } => None,
        };
        config.apply_overrides(self.log_level, catalog)
    }
}

/// Run `command`, writing its report to `out`.
///
/// # Errors
///
/// Returns an error when a clause passed to `rpn` fails to compile, when
/// the catalog cannot be located or loaded, or when writing fails.
pub fn run(command: &Command, config: &CheckConfig, out: &mut dyn Write) -> Result<Outcome> {
    match command {
        Command::Eval(args) => handle_eval(args, out),
        Command::Rpn { clause } => handle_rpn(clause, out),
        Command::Catalog(args) => handle_catalog(args, config, out),
    }
}

fn handle_eval(args: &EvalArgs, out: &mut dyn Write) -> Result<Outcome> {
    let clause = PermissionClause::new(args.clause.as_str());
    let roles: RoleSet = args.roles.iter().cloned().collect();
    let verdict = clause.verdict(&roles);
    debug!(clause = %clause, permitted = verdict.permitted, "evaluated clause");

    write_verdict(out, &verdict)?;
    if args.explain {
        if let Ok(rpn) = clause.compile() {
            write_rpn(out, rpn.as_ref())?;
        }
        write_diagnostic(out, &verdict)?;
    }
    Ok(if verdict.is_permitted() {
        Outcome::Success
    } else {
        Outcome::Denied
    })
}

fn handle_rpn(clause: &str, out: &mut dyn Write) -> Result<Outcome> {
    let rpn = PermissionClause::new(clause)
        .compile()
        .map_err(CheckError::from)?;
    write_rpn(out, rpn.as_ref())?;
    Ok(Outcome::Success)
}

fn handle_catalog(
    args: &CatalogArgs,
    config: &CheckConfig,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let path = config.catalog_path()?;
    let catalog = PermissionCatalog::load(path).map_err(CheckError::from)?;
    info!(path = %path.display(), entries = catalog.len(), "loaded catalog");

    let roles: RoleSet = args.roles.iter().cloned().collect();
    if args.explain {
        for (target, verdict) in catalog.verdicts(&roles) {
            write_target_verdict(out, target, &verdict)?;
        }
    } else {
        for target in catalog.permitted_targets(&roles) {
            write_target(out, &target)?;
        }
    }
    Ok(Outcome::Success)
}
