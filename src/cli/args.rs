//! Command-line argument parsing for `unlz5`.
//!
//! [`parse_args`] reads `std::env::args()` (clap prints help/version and
//! exits on its own); [`parse_args_from`] takes an explicit argv and is what
//! the tests drive.  Both resolve the raw flags into a [`ParsedArgs`] with
//! the output destination already decided.

use anyhow::{anyhow, bail};
use clap::{ArgAction, Parser};

use crate::cli::constants::{GB, KB, MB};
use crate::config::{default_nb_workers, resolve_nb_workers, LZ5_EXTENSION};
use crate::dispatch::{decoder_for_method, DECODER_TYPES, DEFAULT_METHOD};
use crate::io::decompress_files::output_filename;
use crate::io::file_io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;

/// Raw flags, as clap sees them.
#[derive(Parser, Debug)]
#[command(
    name = "unlz5",
    version,
    about = "Decompress LArc -lz5- streams",
    after_help = "With no INPUT, or when INPUT is `stdin`, read standard input."
)]
pub struct Cli {
    /// Write to standard output
    #[arg(short = 'c', long = "stdout", conflicts_with = "multiple")]
    pub stdout: bool,

    /// Overwrite existing output files
    #[arg(short, long)]
    pub force: bool,

    /// Test: decode and discard the output
    #[arg(short, long)]
    pub test: bool,

    /// Treat every FILE as an input; outputs drop the .lz5 suffix
    #[arg(short, long)]
    pub multiple: bool,

    /// Do not copy the input's modification time to the output
    #[arg(long = "no-mtime")]
    pub no_mtime: bool,

    /// Decoded size recorded by the archive (K, M, G suffixes allowed)
    #[arg(short, long, value_name = "BYTES", value_parser = parse_size)]
    pub size: Option<u64>,

    /// Files decoded in parallel with -m (0 = one per core)
    #[arg(short = 'T', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Compression method identifier
    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_METHOD,
        allow_hyphen_values = true,
        value_parser = parse_method
    )]
    pub method: String,

    /// More output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// INPUT [OUTPUT], or all inputs with -m
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

/// Resolved options.
#[derive(Debug)]
pub struct ParsedArgs {
    pub prefs: Prefs,
    pub display_level: u32,
    /// Input paths; exactly one unless `multiple`.
    pub inputs: Vec<String>,
    /// Destination for single-input mode.
    pub output: Option<String>,
    pub multiple: bool,
    /// Writing decoded bytes to a terminal was explicitly allowed.
    pub force_stdout: bool,
}

/// Parses a byte count with an optional binary suffix: `512`, `64K`, `2MiB`.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(format!("`{}` is not a size", s));
    }
    let value: u64 = s[..digits].parse().map_err(|_| format!("`{}` is too large", s))?;
    let multiplier = match &s[digits..] {
        "" => 1,
        "K" | "KB" | "KiB" => KB,
        "M" | "MB" | "MiB" => MB,
        "G" | "GB" | "GiB" => GB,
        other => return Err(format!("unknown size suffix `{}`", other)),
    };
    value.checked_mul(multiplier).ok_or_else(|| format!("`{}` is too large", s))
}

fn parse_method(s: &str) -> Result<String, String> {
    if decoder_for_method(s).is_some() {
        return Ok(s.to_owned());
    }
    let known: Vec<&str> = DECODER_TYPES.iter().map(|t| t.name).collect();
    Err(format!("unsupported method `{}` (supported: {})", s, known.join(", ")))
}

/// Parses the process arguments.
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    resolve(Cli::parse())
}

/// Parses an explicit argv, `argv[0]` being the program name.
pub fn parse_args_from<I, T>(argv: I) -> anyhow::Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    resolve(Cli::try_parse_from(argv)?)
}

fn resolve(cli: Cli) -> anyhow::Result<ParsedArgs> {
    let display_level = (2 + u32::from(cli.verbose)).saturating_sub(u32::from(cli.quiet));

    let mut prefs = Prefs::default();
    prefs
        .set_method(&cli.method)
        .set_expected_size(cli.size)
        .set_overwrite(cli.force)
        .set_test_mode(cli.test)
        .set_keep_mtime(!cli.no_mtime)
        .set_nb_workers(cli.threads.map_or_else(default_nb_workers, resolve_nb_workers));

    if cli.multiple {
        if cli.files.is_empty() {
            bail!("bad usage: -m requires at least one input file");
        }
        return Ok(ParsedArgs {
            prefs,
            display_level,
            inputs: cli.files,
            output: None,
            multiple: true,
            force_stdout: false,
        });
    }

    if cli.files.len() > 2 {
        bail!("bad usage: too many file names (use -m for several inputs)");
    }
    let mut files = cli.files.into_iter();
    let input = files.next().unwrap_or_else(|| STDIN_MARK.to_owned());
    let output = match files.next() {
        Some(out) => out,
        None if cli.test => NUL_MARK.to_owned(),
        None if cli.stdout || input == STDIN_MARK => STDOUT_MARK.to_owned(),
        None => output_filename(&input, LZ5_EXTENSION).ok_or_else(|| {
            anyhow!(
                "{}: cannot derive an output name (no {} suffix); name the output or use -c",
                input,
                LZ5_EXTENSION
            )
        })?,
    };

    Ok(ParsedArgs {
        prefs,
        display_level,
        inputs: vec![input],
        output: Some(output),
        multiple: false,
        force_stdout: cli.stdout || cli.force,
    })
}
