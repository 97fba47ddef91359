//! Dump command implementation

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use sfdpdec_core::sfdp;

use crate::error::{CliError, Result};

/// Largest amount of SFDP data read from the input file
pub const MAX_READ_LEN: usize = 4096;

/// Decode an SFDP dump file and print the report to stdout
pub fn run_dump(path: &Path) -> Result<()> {
    let data = read_sfdp_file(path)?;
    log::debug!("Read {} bytes from {}", data.len(), path.display());

    let stdout = io::stdout();
    dump_to(&data, stdout.lock())
}

/// Read at most [`MAX_READ_LEN`] bytes from `path`
///
/// Anything beyond that is never looked at.
pub fn read_sfdp_file(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut data = Vec::with_capacity(MAX_READ_LEN);
    file.take(MAX_READ_LEN as u64)
        .read_to_end(&mut data)
        .map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        })?;

    Ok(data)
}

/// Write the report for `data` to `out`
///
/// Lines are written as they are decoded, so a truncated parameter header
/// still leaves everything before it in `out`.
pub fn dump_to<W: Write>(data: &[u8], out: W) -> Result<()> {
    let mut sink = IoSink::new(out);
    let result = sfdp::dump(data, &mut sink);
    let flushed = sink.inner.flush();

    match result {
        Err(sfdpdec_core::Error::Format) => {
            let source = sink
                .error
                .take()
                .unwrap_or_else(|| io::Error::other("formatter error"));
            Err(CliError::Write(source))
        }
        Err(e) => Err(e.into()),
        Ok(()) => flushed.map_err(CliError::Write),
    }
}

/// Adapts an `io::Write` to `fmt::Write`, keeping the underlying I/O error
struct IoSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> IoSink<W> {
    fn new(inner: W) -> Self {
        Self { inner, error: None }
    }
}

impl<W: Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
