//! Command implementations for weave-cli

pub mod check;
pub mod init;
pub mod list;
pub mod regenerate;

pub use check::run_check;
pub use init::run_init;
pub use list::run_list;
pub use regenerate::{RegenerateOptions, run_regenerate};

use colored::Colorize;
use weave_core::Warning;

/// Print warnings to stderr, one line each.
pub(crate) fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}
