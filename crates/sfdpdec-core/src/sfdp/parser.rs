//! SFDP parsing implementation
//!
//! Decodes the SFDP header and walks the parameter headers that follow it.
//! All functions borrow the caller's buffer and never read past its end.

use zerocopy::FromBytes;

use crate::error::{Error, Result};

use super::types::*;

/// Parse the SFDP header and verify signature
pub fn parse_header(data: &[u8]) -> Result<SfdpHeader> {
    let (raw, _) =
        RawSfdpHeader::ref_from_prefix(data).map_err(|_| Error::TooShort { len: data.len() })?;

    log::debug!(
        "SFDP header bytes: {:02X} {:02X} {:02X} {:02X} {:02X} {:02X} {:02X} {:02X}",
        raw.signature[0],
        raw.signature[1],
        raw.signature[2],
        raw.signature[3],
        raw.minor,
        raw.major,
        raw.nph,
        raw.access_protocol
    );

    let header = SfdpHeader::from(raw);

    if !header.is_valid() {
        log::debug!("SFDP signature invalid (expected 'SFDP')");
        return Err(Error::InvalidSignature);
    }

    if !header.revision.at_least(1, 6) {
        log::debug!(
            "SFDP revision {} predates JESD216B, access protocol byte is reserved",
            header.revision
        );
    }

    match header.revision.standard_name() {
        Some(name) => log::debug!("SFDP header valid: revision {} ({})", header.revision, name),
        None => log::debug!("SFDP header valid: revision {}", header.revision),
    }

    Ok(header)
}

/// Decode the parameter header at `index`
///
/// Fails with [`Error::TruncatedInput`] when the buffer ends before the
/// full 8-byte record.
pub fn parse_param_header(data: &[u8], index: usize) -> Result<ParameterHeader> {
    let offset = index
        .checked_mul(PARAM_HEADER_LEN)
        .and_then(|o| o.checked_add(SFDP_HEADER_LEN));
    let truncated = Error::TruncatedInput {
        index,
        needed: offset.map_or(usize::MAX, |o| o.saturating_add(PARAM_HEADER_LEN)),
        available: data.len(),
    };

    let offset = offset.ok_or(truncated)?;
    let rest = data.get(offset..).ok_or(truncated)?;
    let (raw, _) = RawParameterHeader::ref_from_prefix(rest).map_err(|_| truncated)?;
    let header = ParameterHeader::from(raw);

    let kind = if header.is_basic() {
        "JEDEC basic"
    } else if header.is_jedec() {
        "JEDEC"
    } else {
        "vendor"
    };
    log::trace!(
        "Parameter header {} at 0x{:02X}: {} table ID {:04X}, rev {}, {} bytes @ 0x{:06X}",
        index,
        offset,
        kind,
        header.id,
        header.revision,
        header.length_bytes(),
        header.table_pointer
    );
    if let Some(name) = header.known_name() {
        log::debug!("Parameter header {}: {}", index, name);
    }

    Ok(header)
}

/// A validated SFDP directory borrowed from a raw buffer
#[derive(Debug, Clone, Copy)]
pub struct Sfdp<'a> {
    data: &'a [u8],
    header: SfdpHeader,
}

impl<'a> Sfdp<'a> {
    /// Validate the buffer length and signature and decode the header
    ///
    /// The length check comes first, so a short buffer always reports
    /// [`Error::TooShort`] whatever its first bytes are.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < MIN_SFDP_LEN {
            log::debug!(
                "SFDP data too short: {} bytes (need {})",
                data.len(),
                MIN_SFDP_LEN
            );
            return Err(Error::TooShort { len: data.len() });
        }

        let header = parse_header(data)?;

        if data.len() > header.directory_len() {
            log::trace!(
                "Ignoring {} bytes past the parameter headers",
                data.len() - header.directory_len()
            );
        }

        Ok(Self { data, header })
    }

    /// The decoded SFDP header
    pub fn header(&self) -> &SfdpHeader {
        &self.header
    }

    /// Iterate the declared parameter headers in order
    pub fn parameter_headers(&self) -> ParameterHeaders<'a> {
        ParameterHeaders {
            data: self.data,
            next: 0,
            count: self.header.num_param_headers(),
        }
    }
}

/// Iterator over parameter headers, yielded lazily
///
/// Yields one `Err(TruncatedInput)` for the first header that does not fit
/// in the buffer and then stops.
#[derive(Debug, Clone)]
pub struct ParameterHeaders<'a> {
    data: &'a [u8],
    next: usize,
    count: usize,
}

impl Iterator for ParameterHeaders<'_> {
    type Item = Result<ParameterHeader>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        let result = parse_param_header(self.data, self.next);
        self.next = match result {
            Ok(_) => self.next + 1,
            Err(_) => self.count,
        };
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.count - self.next))
    }
}

impl core::iter::FusedIterator for ParameterHeaders<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;
    use std::vec::Vec;

    fn sfdp_with(nph: u8, params: &[[u8; 8]]) -> Vec<u8> {
        let mut data = vec![0x53, 0x46, 0x44, 0x50, 0x06, 0x01, nph, 0xFF];
        for p in params {
            data.extend_from_slice(p);
        }
        data
    }

    #[test]
    fn test_parse_header_fields() {
        let data = sfdp_with(0, &[[0; 8]]);
        let header = parse_header(&data).unwrap();
        assert_eq!(header.revision, SfdpRevision::JESD216B);
        assert_eq!(header.nph, 0);
        assert_eq!(header.access_protocol, 0xFF);
    }

    #[test]
    fn test_parse_header_needs_eight_bytes() {
        assert_eq!(parse_header(b"SFDP"), Err(Error::TooShort { len: 4 }));
    }

    #[test]
    fn test_bad_signature_rejected() {
        for sig in [b"SFDQ", b"sfdp", b"\0\0\0\0", b"PDFS"] {
            let mut data = sfdp_with(0, &[[0xAA; 8]]);
            data[..4].copy_from_slice(sig);
            assert_eq!(Sfdp::parse(&data).unwrap_err(), Error::InvalidSignature);
        }
    }

    #[test]
    fn test_short_buffer_rejected_before_signature() {
        let valid = sfdp_with(0, &[[0; 8]]);
        for len in 0..MIN_SFDP_LEN {
            assert_eq!(
                Sfdp::parse(&valid[..len]).unwrap_err(),
                Error::TooShort { len }
            );
        }
        assert_eq!(
            Sfdp::parse(b"garbage").unwrap_err(),
            Error::TooShort { len: 7 }
        );
    }

    #[test]
    fn test_walk_yields_all_headers() {
        let data = sfdp_with(
            1,
            &[
                [0x00, 0x00, 0x01, 0x09, 0x1C, 0x00, 0x00, 0xFF],
                [0xC2, 0x00, 0x01, 0x04, 0x48, 0x00, 0x00, 0xFF],
            ],
        );
        let sfdp = Sfdp::parse(&data).unwrap();
        let headers: Vec<_> = sfdp
            .parameter_headers()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].id, 0xFF00);
        assert_eq!(headers[0].length_dwords, 9);
        assert_eq!(headers[0].table_pointer, 0x1C);
        assert_eq!(headers[1].id, 0xFFC2);
        assert_eq!(headers[1].table_pointer, 0x48);
    }

    #[test]
    fn test_walk_detects_truncation() {
        // Declares 3 headers but only carries 1 and a half
        let mut data = sfdp_with(2, &[[0x00, 0x06, 0x01, 0x10, 0x80, 0x00, 0x00, 0xFF]]);
        data.extend_from_slice(&[0x84, 0x00, 0x01]);

        let sfdp = Sfdp::parse(&data).unwrap();
        let mut iter = sfdp.parameter_headers();

        assert!(iter.next().unwrap().is_ok());
        assert_eq!(
            iter.next().unwrap(),
            Err(Error::TruncatedInput {
                index: 1,
                needed: 24,
                available: 19,
            })
        );
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_truncation_past_end() {
        let data = sfdp_with(5, &[[0; 8]]);
        assert_eq!(
            parse_param_header(&data, 4),
            Err(Error::TruncatedInput {
                index: 4,
                needed: 48,
                available: 16,
            })
        );
    }

    #[test]
    fn test_huge_index_is_truncation() {
        let data = sfdp_with(0, &[[0; 8]]);
        assert_eq!(
            parse_param_header(&data, usize::MAX),
            Err(Error::TruncatedInput {
                index: usize::MAX,
                needed: usize::MAX,
                available: 16,
            })
        );
        assert_eq!(
            parse_param_header(&data, usize::MAX / PARAM_HEADER_LEN),
            Err(Error::TruncatedInput {
                index: usize::MAX / PARAM_HEADER_LEN,
                needed: usize::MAX,
                available: 16,
            })
        );
    }

    #[test]
    fn test_full_directory_of_256_headers() {
        let params = [[0x00, 0x06, 0x01, 0x10, 0x80, 0x00, 0x00, 0xFF]; 256];
        let data = sfdp_with(0xFF, &params);
        assert_eq!(data.len(), 8 + 256 * 8);

        let sfdp = Sfdp::parse(&data).unwrap();
        assert_eq!(sfdp.header().num_param_headers(), 256);
        assert!(sfdp.parameter_headers().all(|p| p.is_ok()));

        let short = Sfdp::parse(&data[..data.len() - 1]).unwrap();
        let last = short.parameter_headers().last().unwrap();
        assert!(matches!(last, Err(Error::TruncatedInput { index: 255, .. })));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut data = sfdp_with(0, &[[0x00, 0x06, 0x01, 0x10, 0x80, 0x00, 0x00, 0xFF]]);
        data.resize(4096, 0xFF);

        let sfdp = Sfdp::parse(&data).unwrap();
        assert_eq!(sfdp.parameter_headers().count(), 1);
    }
}
