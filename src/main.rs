//! Binary entry point for the `unlz5` command-line tool.
//!
//! 1. [`parse_args`] turns argv into a [`lz5::cli::args::ParsedArgs`]
//!    (clap handles `--help` / `--version` and usage errors itself).
//! 2. [`run`] performs the decompression and yields the exit code.

use lz5::cli::args::parse_args;
use lz5::cli::constants::PROGRAM_NAME;
use lz5::cli::dispatch::run;

fn main() {
    let code = match parse_args().and_then(run) {
        Ok(code) => code,
        Err(e) => {
            lz5::displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
            1
        }
    };
    std::process::exit(code);
}
