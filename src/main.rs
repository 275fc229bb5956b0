use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lfsrcrack::report::{self, ReportOptions};
use lfsrcrack::{decoder, LfsrError, SearchOutcome, SeedSearch, SeedSpace, StreamCipher};

#[derive(Parser, Debug)]
#[command(name = "lfsrcrack")]
#[command(about, author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Try every seed and print the plaintexts that look like text
    Crack {
        /// Ciphertext file ('0'/'1' groups terminated by ']')
        #[arg(default_value = "Chiffretext.txt")]
        file: PathBuf,
        /// Spread the search over all CPU cores
        #[arg(long)]
        parallel: bool,
        /// Print each candidate on its own line, prefixed by its seed
        #[arg(long)]
        show_seeds: bool,
        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Encrypt a plaintext file and print it as bit-group text
    #[command(arg_required_else_help = true)]
    Encrypt {
        /// Register seed (decimal or 0x-prefixed hexadecimal)
        #[arg(short, long, value_parser = parse_seed)]
        seed: u64,
        /// Plaintext file
        file: PathBuf,
    },
    /// Decrypt a ciphertext file with a known seed
    #[command(arg_required_else_help = true)]
    Decrypt {
        /// Register seed (decimal or 0x-prefixed hexadecimal)
        #[arg(short, long, value_parser = parse_seed)]
        seed: u64,
        /// Ciphertext file
        file: PathBuf,
    },
}

pub fn main() -> Result<()> {
    init_tracing();
    let stdout = console::Term::stdout();
    let cli = Cli::parse();

    match cli.command {
        Commands::Crack {
            file,
            parallel,
            show_seeds,
            no_progress,
        } => command_crack(stdout, file, parallel, show_seeds, no_progress)?,
        Commands::Encrypt { seed, file } => command_encrypt(stdout, seed, file)?,
        Commands::Decrypt { seed, file } => command_decrypt(stdout, seed, file)?,
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn command_crack(
    stdout: console::Term,
    file: PathBuf,
    parallel: bool,
    show_seeds: bool,
    no_progress: bool,
) -> Result<()> {
    let started = Instant::now();
    let ciphertext = decoder::decode_file(&file)?;
    tracing::info!(path = %file.display(), bytes = ciphertext.len(), "ciphertext loaded");

    let bar = if no_progress {
        indicatif::ProgressBar::hidden()
    } else {
        indicatif::ProgressBar::new(SeedSpace::new().len() as u64)
    };
    bar.set_style(get_bar_style()?);

    let search = SeedSearch::new(&ciphertext).with_progress(|n| bar.inc(n));
    let outcome = if parallel {
        run_parallel(&search)
    } else {
        search.run()
    };
    bar.finish_and_clear();

    let recovered = report::recover(&ciphertext, &outcome.candidates);
    report::write_report(stdout.clone(), &recovered, ReportOptions { show_seeds })?;

    let text = format!("{}", started.elapsed().as_secs());
    stdout.write_line(&text).into_diagnostic()?;

    Ok(())
}

fn command_encrypt(stdout: console::Term, seed: u64, file: PathBuf) -> Result<()> {
    let plaintext = std::fs::read(&file).map_err(|source| LfsrError::ReadPlaintext {
        path: file.clone(),
        source,
    })?;
    let ciphertext = StreamCipher::with_seed(seed).apply(&plaintext);
    stdout
        .write_line(&decoder::encode(&ciphertext))
        .into_diagnostic()?;

    Ok(())
}

fn command_decrypt(stdout: console::Term, seed: u64, file: PathBuf) -> Result<()> {
    let ciphertext = decoder::decode_file(&file)?;
    let plaintext = StreamCipher::with_seed(seed).apply(&ciphertext);
    stdout
        .write_line(&report::render_text(&plaintext))
        .into_diagnostic()?;

    Ok(())
}

#[cfg(feature = "parallel")]
fn run_parallel(search: &SeedSearch<'_>) -> SearchOutcome {
    search.run_parallel()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(search: &SeedSearch<'_>) -> SearchOutcome {
    tracing::warn!("built without the `parallel` feature, searching on one thread");
    search.run()
}

fn get_bar_style() -> Result<indicatif::ProgressStyle> {
    Ok(
        indicatif::ProgressStyle::with_template("[{bar:32}] {pos:>7}/{len:7} seeds {eta}")
            .into_diagnostic()?
            .progress_chars("=>-"),
    )
}

/// Parses a seed given as decimal or `0x`-prefixed hexadecimal.
fn parse_seed(input: &str) -> std::result::Result<u64, LfsrError> {
    let trimmed = input.trim();
    let digits = trimmed.replace('_', "");
    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse::<u64>(),
    };
    parsed.map_err(|_| LfsrError::InvalidSeed {
        input: input.to_string(),
    })
}
