//! sfdpdec-core - SFDP header decoding
//!
//! This crate decodes the Serial Flash Discoverable Parameters (JESD216)
//! header block that SPI flash chips expose, and renders it as a fixed
//! column text report. It works on an in-memory byte slice and is designed
//! to be `no_std` compatible.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`)
//! - `alloc` - Enable [`sfdp::render`], which collects the report into a `String`
//!
//! # Example
//!
//! ```ignore
//! use sfdpdec_core::sfdp::Sfdp;
//!
//! let sfdp = Sfdp::parse(&data)?;
//! print!("{}", sfdp.header());
//! for param in sfdp.parameter_headers() {
//!     print!("{}", param?);
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod error;
pub mod sfdp;

pub use error::{Error, Result};
