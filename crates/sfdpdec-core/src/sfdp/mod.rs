//! SFDP (Serial Flash Discoverable Parameters) header decoding
//!
//! This module decodes the SFDP directory as defined by JEDEC JESD216
//! (through revision H). SFDP provides a standardized way for flash chips
//! to describe their capabilities.
//!
//! # Overview
//!
//! SFDP data is stored in a reserved area of the flash chip. Its directory
//! contains:
//!
//! - An 8-byte SFDP header with signature, revision, header count and
//!   access protocol
//! - One or more 8-byte parameter headers, each pointing at a parameter
//!   table elsewhere in the SFDP area
//!
//! The parameter tables themselves are not decoded.
//!
//! # Usage
//!
//! ```ignore
//! use sfdpdec_core::sfdp;
//!
//! let mut report = String::new();
//! sfdp::dump(&data, &mut report)?;
//! print!("{}", report);
//! ```

mod format;
mod labels;
mod parser;
mod types;

pub use format::*;
pub use labels::*;
pub use parser::*;
pub use types::*;
