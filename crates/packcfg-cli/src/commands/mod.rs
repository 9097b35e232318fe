//! Command implementations for the packcfg CLI.
//!
//! - [`print`] - Emit the configuration record
//! - [`check`] - Validate the configuration record

pub mod check;
pub mod print;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use print::execute as print_execute;
