//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sfdpdec")]
#[command(author, version, about = "SFDP header decoder", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Raw SFDP dump, as read with RDSFDP (0x5A) starting at address 0
    #[arg(value_name = "SFDP_BINARY")]
    pub input: PathBuf,
}

