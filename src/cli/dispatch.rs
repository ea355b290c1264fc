//! Post-parse dispatch for `unlz5`.

use std::io::{self, IsTerminal};

use anyhow::{bail, Context};

use crate::cli::args::ParsedArgs;
use crate::cli::constants::{set_display_level, AUTHOR, PROGRAM_NAME};
use crate::config::LZ5_EXTENSION;
use crate::displaylevel;
use crate::io::{decompress_filename, decompress_multiple_filenames, STDIN_MARK, STDOUT_MARK};

/// Runs the operation described by `args` and returns the exit code.
///
/// Decoding failures are reported on stderr where they happen and turn
/// into exit code 1.  `Err` is reserved for refusals made before any I/O.
pub fn run(args: ParsedArgs) -> anyhow::Result<i32> {
    set_display_level(args.display_level);
    displaylevel!(
        3,
        "*** {} v{} {}-bit, by {} ***\n",
        PROGRAM_NAME,
        crate::version_string(),
        usize::BITS,
        AUTHOR
    );

    let prefs = &args.prefs;
    if let Some(size) = prefs.expected_size {
        displaylevel!(4, "expected decoded size : {} bytes\n", size);
    }

    if args.multiple {
        let failed = decompress_multiple_filenames(&args.inputs, LZ5_EXTENSION, prefs)
            .context("multiple-file decoding")?;
        if failed > 0 {
            displaylevel!(2, "{} of {} files could not be decoded\n", failed, args.inputs.len());
            return Ok(1);
        }
        return Ok(0);
    }

    let input = args.inputs.first().map_or(STDIN_MARK, String::as_str);
    let output = args.output.as_deref().unwrap_or(STDOUT_MARK);

    if input == STDIN_MARK && io::stdin().is_terminal() {
        bail!("refusing to read from a console");
    }
    if output == STDOUT_MARK && !prefs.test_mode && io::stdout().is_terminal() && !args.force_stdout {
        bail!("refusing to write to console without -c");
    }

    displaylevel!(4, "{} -> {}\n", input, output);
    match decompress_filename(input, output, prefs) {
        Ok(_) => Ok(0),
        Err(_) => Ok(1),
    }
}
