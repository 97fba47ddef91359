//! Text report formatting
//!
//! Every field is printed as one line: the label, a colon, padding up to
//! column [`LABEL_WIDTH`] and the value.

use core::fmt;

use crate::error::Result;

use super::labels::{Labeled, ACCESS_PROTOCOLS};
use super::parser::Sfdp;
use super::types::{ParameterHeader, SfdpHeader};

/// Width reserved for field labels
pub const LABEL_WIDTH: usize = 40;

/// A single `label: value` report line
#[derive(Debug, Clone, Copy)]
pub struct Column<'a, V> {
    label: &'a str,
    value: V,
}

impl<'a, V: fmt::Display> Column<'a, V> {
    /// Create a report line
    pub fn new(label: &'a str, value: V) -> Self {
        Self { label, value }
    }
}

impl<V: fmt::Display> fmt::Display for Column<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Labels wider than the column are kept whole
        let pad = LABEL_WIDTH.saturating_sub(self.label.len());
        writeln!(f, "{}:{:pad$}{}", self.label, "", self.value, pad = pad)
    }
}

impl fmt::Display for SfdpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Column::new("SFDP Revision", self.revision))?;
        write!(
            f,
            "{}",
            Column::new("Number of Parameter Headers", self.num_param_headers())
        )?;
        write!(
            f,
            "{}",
            Column::new(
                "Access Protocol",
                Labeled::resolve(ACCESS_PROTOCOLS, self.access_protocol)
            )
        )
    }
}

impl fmt::Display for ParameterHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Column::new("ID", format_args!("{:x}", self.id)))?;
        write!(f, "{}", Column::new("  Revision", self.revision))?;
        write!(f, "{}", Column::new("  Length", self.length_dwords))?;
        write!(
            f,
            "{}",
            Column::new("  Pointer", format_args!("@{:06x}", self.table_pointer))
        )
    }
}

/// Decode `data` and write the full report to `out`
///
/// Output is written as decoding progresses: on a truncated parameter
/// header, everything before it has already reached `out`.
pub fn dump<W: fmt::Write + ?Sized>(data: &[u8], out: &mut W) -> Result<()> {
    let sfdp = Sfdp::parse(data)?;

    write!(out, "{}", sfdp.header())?;
    for param in sfdp.parameter_headers() {
        write!(out, "{}", param?)?;
    }

    Ok(())
}

/// Decode `data` and return the full report as a string
#[cfg(feature = "alloc")]
pub fn render(data: &[u8]) -> Result<alloc::string::String> {
    let mut out = alloc::string::String::new();
    dump(data, &mut out)?;
    Ok(out)
}
