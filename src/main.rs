use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use palindrom::session::{Session, check_texts};
use palindrom::{Charset, Checker, CheckerConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "palindrom")]
#[command(about = "Check whether texts are palindromes", long_about = None)]
#[command(version)]
struct Cli {
    /// Texts to check; reads lines from standard input when omitted
    texts: Vec<String>,

    /// Character classification used when normalizing input
    #[arg(short, long, value_enum, default_value_t = CharsetArg::Unicode)]
    charset: CharsetArg,

    /// Reject inputs longer than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_len: Option<usize>,

    /// Do not print the prompt in interactive mode
    #[arg(long)]
    no_prompt: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum CharsetArg {
    /// ASCII letters and digits only
    Ascii,
    /// Unicode letters and numbers
    Unicode,
}

impl From<CharsetArg> for Charset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Ascii => Charset::Ascii,
            CharsetArg::Unicode => Charset::Unicode,
        }
    }
}

impl Cli {
    fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            charset: self.charset.into(),
            max_input_len: self.max_len,
        }
    }
}

/// Exit status for argument mode: success only if every text was checked
/// and found to be a palindrome.
fn exit_status(all_palindromes: bool) -> u8 {
    if all_palindromes { 0 } else { 1 }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let checker = Checker::new(cli.checker_config()).context("invalid checker configuration")?;

    if cli.texts.is_empty() {
        let stats = Session::new(&checker, io::stdin().lock(), io::stdout().lock())
            .with_prompt(!cli.no_prompt)
            .run()
            .context("interactive session failed")?;
        info!(
            checked = stats.checked,
            palindromes = stats.palindromes,
            rejected = stats.rejected,
            "done"
        );
        return Ok(ExitCode::SUCCESS);
    }

    let stats = check_texts(&checker, &cli.texts, io::stdout().lock())
        .context("failed to write verdicts")?;
    info!(
        checked = stats.checked,
        palindromes = stats.palindromes,
        rejected = stats.rejected,
        "done"
    );
    Ok(ExitCode::from(exit_status(stats.all_palindromes())))
}
