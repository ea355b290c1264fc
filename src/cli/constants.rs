// cli/constants.rs: Program identity and the display-level globals.
//
// Diagnostics go to stderr through the `displaylevel!` macro,
// gated on a process-wide notification level:
//
// 0 = silent; 1 = errors only; 2 = results and warnings (default);
// 3 = progress; 4 = verbose

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "unlz5";
pub const AUTHOR: &str = "the lz5r developers";

/// Binary-prefixed size multipliers accepted by `--size`.
pub const KB: u64 = 1 << 10;
pub const MB: u64 = 1 << 20;
pub const GB: u64 = 1 << 30;

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
