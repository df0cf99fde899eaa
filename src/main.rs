//! jj-evo-commit - turns everything in the current evolog into jj changes
//!
//! Binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jj_evo_commit::console::{Console, TerminalConsole};
use jj_evo_commit::jj::JjExecutor;
use jj_evo_commit::model::FilterSpec;
use jj_evo_commit::replay::{ReplayEngine, ReplayOptions, ReplayOrder};

/// Turns everything in the current evolog into jj changes
#[derive(Parser, Debug)]
#[command(name = "jj-evo-commit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show what would be done without making changes
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Comma-separated list of commit IDs or change IDs to skip
    #[arg(short, long, value_name = "IDS")]
    skip: Option<String>,

    /// Comma-separated list of commit IDs or change IDs to process (only these will be processed)
    #[arg(short, long, value_name = "IDS")]
    pick: Option<String>,

    /// Change whose evolog is replayed (defaults to the working copy)
    #[arg(short, long, value_name = "REVSET")]
    revision: Option<String>,

    /// Path to the jj repository (defaults to the current directory)
    #[arg(short = 'R', long, value_name = "PATH")]
    repository: Option<PathBuf>,

    /// Replay in jj's native newest-first order instead of oldest-first
    #[arg(long)]
    as_received: bool,

    /// Exit with a failure status if any entry could not be replayed
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> ReplayOptions {
        ReplayOptions {
            filter: FilterSpec::from_lists(self.skip.as_deref(), self.pick.as_deref()),
            dry_run: self.dry_run,
            order: if self.as_received {
                ReplayOrder::AsReceived
            } else {
                ReplayOrder::Chronological
            },
            revision: self.revision.clone(),
        }
    }

    /// Dry runs only read the log, so an old jj must not stop them
    fn needs_version_check(&self) -> bool {
        !self.dry_run
    }

    fn executor(&self) -> JjExecutor {
        match &self.repository {
            Some(path) => JjExecutor::with_repo_path(path.clone()),
            None => JjExecutor::new(),
        }
    }
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the report on stdout
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let executor = cli.executor();
    if cli.needs_version_check() {
        executor.check_version()?;
    }

    let mut console = TerminalConsole;
    let outcome = ReplayEngine::new(&executor, &executor, cli.options()).run(&mut console)?;

    if outcome.attempted > 0 || outcome.dry_run {
        console.info("");
        console.info(&outcome.summary());
    }

    if cli.strict && !outcome.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
