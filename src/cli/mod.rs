//! Command-line interface for the `unlz5` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, size multipliers, the display-level global and its macros. |
//! | [`args`]      | clap definitions and resolution into [`args::ParsedArgs`]. |
//! | [`dispatch`]  | [`dispatch::run`]: console checks and hand-off to the I/O layer. |

pub mod args;
pub mod constants;
pub mod dispatch;
