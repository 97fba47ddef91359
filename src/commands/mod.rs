//! CLI command implementations
//!
//! `dump` reads an SFDP binary, decodes it with `sfdpdec_core::sfdp` and
//! prints the column report to stdout.

mod dump;

pub use dump::run_dump;
