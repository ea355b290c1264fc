// config.rs: Compile-time defaults and environment overrides.
//
// Worker-count resolution follows the usual pattern: the `LZ5_NBWORKERS`
// environment variable overrides `NB_WORKERS_DEFAULT`, and the -T# flag
// overrides both.  `0` asks for one worker per logical core.

use crate::displaylevel;

/// Extension stripped from input names to derive output names.
pub const LZ5_EXTENSION: &str = ".lz5";

/// Read/write chunk size for the stream and file layers.
pub const IO_BUFFER_SIZE: usize = 64 * 1024;

/// Default number of files decompressed concurrently.
pub const NB_WORKERS_DEFAULT: usize = 1;

/// Upper bound for the worker count, whatever the source of the setting.
pub const NB_WORKERS_MAX: usize = 200;

const ENV_NBWORKERS: &str = "LZ5_NBWORKERS";

/// Parses the leading decimal digits of `s`.
fn read_leading_u32(s: &str) -> Option<u32> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..digits].parse().ok()
}

/// Resolves a requested worker count: `0` means one per core, and the
/// result is kept within `1..=NB_WORKERS_MAX`.
pub fn resolve_nb_workers(requested: usize) -> usize {
    let n = if requested == 0 { num_cpus::get() } else { requested };
    n.clamp(1, NB_WORKERS_MAX)
}

/// Worker count from the `LZ5_NBWORKERS` environment variable, or the default.
pub fn default_nb_workers() -> usize {
    init_nb_workers_from(std::env::var(ENV_NBWORKERS).ok().as_deref())
}

/// Testable core of [`default_nb_workers`]: `None` simulates an unset variable.
pub fn init_nb_workers_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        if let Some(val) = read_leading_u32(env) {
            return resolve_nb_workers(val as usize);
        }
        displaylevel!(
            2,
            "Ignore environment variable setting {}={}: not a valid unsigned value \n",
            ENV_NBWORKERS,
            env
        );
    }
    NB_WORKERS_DEFAULT
}
