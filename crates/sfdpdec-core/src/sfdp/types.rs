//! SFDP type definitions
//!
//! Types representing the SFDP header block as defined by JEDEC JESD216H.

use zerocopy::{FromBytes, Immutable, KnownLayout};

/// SFDP signature ("SFDP" in ASCII, stored at address 0x00)
pub const SFDP_SIGNATURE: &[u8; 4] = b"SFDP";

/// Size of the SFDP header (signature block)
pub const SFDP_HEADER_LEN: usize = 8;

/// Size of a single parameter header
pub const PARAM_HEADER_LEN: usize = 8;

/// Smallest buffer worth decoding: the SFDP header plus one parameter header
pub const MIN_SFDP_LEN: usize = SFDP_HEADER_LEN + PARAM_HEADER_LEN;

// ============================================================================
// Parameter IDs (MSB << 8 | LSB)
// ============================================================================

/// Basic Flash Parameter Table ID
pub const PARAM_ID_BASIC: u16 = 0xFF00;
/// Sector Map Parameter Table ID
pub const PARAM_ID_SECTOR_MAP: u16 = 0xFF81;
/// 4-byte Address Instruction Table ID
pub const PARAM_ID_4BYTE_ADDR: u16 = 0xFF84;
/// xSPI Profile 1.0 Parameter Table ID
pub const PARAM_ID_XSPI_1_0: u16 = 0xFF05;
/// Status/Control/Config Register Map ID
pub const PARAM_ID_SCCR_MAP: u16 = 0xFF87;

// ============================================================================
// SFDP Revision
// ============================================================================

/// SFDP revision information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SfdpRevision {
    /// Major revision number
    pub major: u8,
    /// Minor revision number
    pub minor: u8,
}

impl SfdpRevision {
    /// Create a new revision
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Check if this revision is at least the specified version
    pub fn at_least(&self, major: u8, minor: u8) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    /// Name of the JESD216 release this revision corresponds to, if any
    pub fn standard_name(&self) -> Option<&'static str> {
        match *self {
            Self::JESD216 => Some("JESD216"),
            Self::JESD216A => Some("JESD216A"),
            Self::JESD216B => Some("JESD216B"),
            Self::JESD216C => Some("JESD216C"),
            Self::JESD216D => Some("JESD216D"),
            Self::JESD216F => Some("JESD216F"),
            _ => None,
        }
    }

    /// JESD216 (first release, 9 DWORDs)
    pub const JESD216: Self = Self::new(1, 0);
    /// JESD216A (added 4-byte address table)
    pub const JESD216A: Self = Self::new(1, 5);
    /// JESD216B (16 DWORDs, added QE requirements)
    pub const JESD216B: Self = Self::new(1, 6);
    /// JESD216C (added xSPI)
    pub const JESD216C: Self = Self::new(1, 7);
    /// JESD216D (20 DWORDs)
    pub const JESD216D: Self = Self::new(1, 8);
    /// JESD216F (23 DWORDs)
    pub const JESD216F: Self = Self::new(1, 9);
}

impl core::fmt::Display for SfdpRevision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

// ============================================================================
// Wire layout
// ============================================================================

/// SFDP header exactly as stored on the chip
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
pub(crate) struct RawSfdpHeader {
    pub signature: [u8; 4],
    pub minor: u8,
    pub major: u8,
    pub nph: u8,
    pub access_protocol: u8,
}

/// Parameter header exactly as stored on the chip
///
/// The ID is split: LSB at offset 0, MSB at offset 7.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
pub(crate) struct RawParameterHeader {
    pub id_lsb: u8,
    pub minor: u8,
    pub major: u8,
    pub length_dwords: u8,
    pub pointer: [u8; 3],
    pub id_msb: u8,
}

// ============================================================================
// SFDP Header
// ============================================================================

/// SFDP header structure (first 8 bytes at address 0x00)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SfdpHeader {
    /// SFDP signature (should be "SFDP")
    pub signature: [u8; 4],
    /// SFDP revision
    pub revision: SfdpRevision,
    /// Number of parameter headers (0-based, so actual count is nph + 1)
    pub nph: u8,
    /// Access protocol (0xFF for legacy)
    pub access_protocol: u8,
}

impl SfdpHeader {
    /// Parse SFDP header from raw bytes
    ///
    /// Does not check the signature; see [`SfdpHeader::is_valid`].
    pub fn parse(data: &[u8; SFDP_HEADER_LEN]) -> Self {
        let raw: RawSfdpHeader = zerocopy::transmute!(*data);
        Self::from(&raw)
    }

    /// Check if the signature is valid
    pub fn is_valid(&self) -> bool {
        &self.signature == SFDP_SIGNATURE
    }

    /// Get the number of parameter headers
    pub fn num_param_headers(&self) -> usize {
        (self.nph as usize) + 1
    }

    /// Number of bytes the SFDP header plus all declared parameter headers occupy
    pub fn directory_len(&self) -> usize {
        SFDP_HEADER_LEN + self.num_param_headers() * PARAM_HEADER_LEN
    }
}

impl From<&RawSfdpHeader> for SfdpHeader {
    fn from(raw: &RawSfdpHeader) -> Self {
        Self {
            signature: raw.signature,
            revision: SfdpRevision {
                minor: raw.minor,
                major: raw.major,
            },
            nph: raw.nph,
            access_protocol: raw.access_protocol,
        }
    }
}

// ============================================================================
// Parameter Header
// ============================================================================

/// Parameter header structure (8 bytes each, starting at address 0x08)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterHeader {
    /// Parameter ID (MSB << 8 | LSB)
    pub id: u16,
    /// Parameter table revision
    pub revision: SfdpRevision,
    /// Parameter table length in DWORDs
    pub length_dwords: u8,
    /// Parameter table pointer (24-bit byte address)
    pub table_pointer: u32,
}

impl ParameterHeader {
    /// Parse a parameter header from raw bytes
    pub fn parse(data: &[u8; PARAM_HEADER_LEN]) -> Self {
        let raw: RawParameterHeader = zerocopy::transmute!(*data);
        Self::from(&raw)
    }

    /// Get the table length in bytes
    pub fn length_bytes(&self) -> usize {
        (self.length_dwords as usize) * 4
    }

    /// Check if this is the Basic Flash Parameter Table
    pub fn is_basic(&self) -> bool {
        self.id == PARAM_ID_BASIC
    }

    /// Check if this is a JEDEC-defined table (MSB >= 0x80)
    pub fn is_jedec(&self) -> bool {
        (self.id >> 8) >= 0x80
    }

    /// Name of the table for well-known JEDEC parameter IDs
    pub fn known_name(&self) -> Option<&'static str> {
        match self.id {
            PARAM_ID_BASIC => Some("Basic Flash Parameter Table"),
            PARAM_ID_SECTOR_MAP => Some("Sector Map Parameter Table"),
            PARAM_ID_4BYTE_ADDR => Some("4-byte Address Instruction Table"),
            PARAM_ID_XSPI_1_0 => Some("xSPI Profile 1.0 Parameter Table"),
            PARAM_ID_SCCR_MAP => Some("Status, Control and Configuration Register Map"),
            _ => None,
        }
    }
}

impl From<&RawParameterHeader> for ParameterHeader {
    fn from(raw: &RawParameterHeader) -> Self {
        let [p0, p1, p2] = raw.pointer;
        Self {
            id: ((raw.id_msb as u16) << 8) | (raw.id_lsb as u16),
            revision: SfdpRevision {
                minor: raw.minor,
                major: raw.major,
            },
            length_dwords: raw.length_dwords,
            table_pointer: u32::from_le_bytes([p0, p1, p2, 0]),
        }
    }
}
