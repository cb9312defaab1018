pub mod build;
pub mod chop;
pub mod completions;
pub mod delete;
pub mod list;
pub mod save;

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::error::{ContextKind, ErrorKind};
use clap::{Args, Parser, Subcommand};

use crate::error::{EnvironmentError, OperationError, Result};
use crate::output::Printer;
use crate::store::AliasStore;

/// Banner printed for a missing or unknown command.
pub const USAGE: &str = "Usage: templater <save|build|dump|list|delete> [alias]";

/// templater - save directories as templates and copy them back out
#[derive(Parser, Debug)]
#[command(name = "templater")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Alias store to use instead of ~/.templater/config.json
    #[arg(long, global = true, env = "TEMPLATER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print extra detail about each step
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save the current directory under an alias
    Save(AliasArgs),

    /// Copy an aliased directory into ./<alias>
    Build(AliasArgs),

    /// Copy an aliased directory straight into the current directory
    Dump(AliasArgs),

    /// List saved aliases
    List(ListArgs),

    /// Forget an alias
    Delete(AliasArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct AliasArgs {
    /// Alias name
    pub alias: Option<String>,

    /// Anything after the alias is ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

impl AliasArgs {
    /// The alias, or a usage error naming `command`.
    pub fn require(&self, command: &str) -> Result<&str> {
        self.alias.as_deref().ok_or_else(|| OperationError::Usage {
            usage: format!("templater {} <alias>", command),
        })
    }
}

/// What a command runs against: the alias store and the working directory.
#[derive(Debug, Clone)]
pub struct Context {
    pub store: AliasStore,
    pub cwd: PathBuf,
}

impl Context {
    pub fn new(store: AliasStore, cwd: impl Into<PathBuf>) -> Self {
        Self {
            store,
            cwd: cwd.into(),
        }
    }
}

/// Run one command, returning its failure instead of reporting it.
pub fn execute(command: Commands, ctx: &Context, printer: &Printer) -> Result<()> {
    match command {
        Commands::Save(args) => save::run(ctx, args.require("save")?, printer),
        Commands::Build(args) => {
            build::run(ctx, args.require("build")?, build::Placement::Subdirectory, printer)
                .map(|_| ())
        }
        Commands::Dump(args) => {
            build::run(ctx, args.require("dump")?, build::Placement::WorkingDirectory, printer)
                .map(|_| ())
        }
        Commands::List(_) => list::run(ctx, &mut io::stdout().lock()),
        Commands::Delete(args) => delete::run(ctx, args.require("delete")?, printer),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Run one command and report any failure. Failures never change the
/// exit status; only environment errors do.
pub fn dispatch(command: Commands, ctx: &Context, printer: &Printer) {
    if let Err(err) = execute(command, ctx, printer) {
        report(&err, printer);
    }
}

/// Run one command, building its [`Context`] only if it touches the store.
///
/// Operation failures are reported and swallowed; only a failure to build
/// the context is returned.
pub fn run<F>(command: Commands, context: F, printer: &Printer) -> std::result::Result<(), EnvironmentError>
where
    F: FnOnce() -> std::result::Result<Context, EnvironmentError>,
{
    match command {
        Commands::Completions(args) => {
            if let Err(err) = completions::run(args) {
                report(&err, printer);
            }
        }
        command => dispatch(command, &context()?, printer),
    }
    Ok(())
}

fn report(err: &OperationError, printer: &Printer) {
    if let OperationError::Usage { .. } = err {
        println!("{}", err);
        return;
    }

    printer.error("Error", &err.to_string());
    if let Some(help) = miette::Diagnostic::help(err) {
        printer.info("Help", &help.to_string());
    }
}

/// Parse `argv`, printing `usage` instead of clap's error on bad input.
///
/// Help and version requests print normally. Returns `None` whenever the
/// caller should stop without doing anything.
pub fn parse_or_usage<P, I, T>(argv: I, usage: &str) -> Option<P>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(argv) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                }
                ErrorKind::InvalidSubcommand => {
                    if let Some(name) = err.get(ContextKind::InvalidSubcommand) {
                        println!("Unknown command: {}", name);
                    }
                    println!("{}", usage);
                }
                _ => println!("{}", usage),
            }
            None
        }
    }
}
