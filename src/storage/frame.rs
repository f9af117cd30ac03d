//! Checksummed file framing
//!
//! A stored file is one header line followed by the payload:
//!
//! ```text
//! crc32:<8 lowercase hex digits>\n
//! <payload bytes>
//! ```
//!
//! The CRC32 (IEEE) covers the payload only. Every read verifies it.

use crc32fast::Hasher;

use super::errors::{StorageError, StorageResult};

const HEADER_PREFIX: &str = "crc32:";

/// Computes the CRC32 checksum of `data`
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Prefixes `payload` with its checksum header
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let header = format!("{}{:08x}\n", HEADER_PREFIX, compute_checksum(payload));
    let mut framed = Vec::with_capacity(header.len() + payload.len());
    framed.extend_from_slice(header.as_bytes());
    framed.extend_from_slice(payload);
    framed
}

/// Splits off and verifies the header, returning the payload.
///
/// `origin` names the file in error messages.
pub fn decode_frame<'a>(bytes: &'a [u8], origin: &str) -> StorageResult<&'a [u8]> {
    let newline = bytes
        .iter()
        .position(|b| *b == b'\n')
        .ok_or_else(|| StorageError::corruption(format!("{}: missing checksum header", origin)))?;

    let header = std::str::from_utf8(&bytes[..newline])
        .ok()
        .and_then(|h| h.strip_prefix(HEADER_PREFIX))
        .ok_or_else(|| StorageError::corruption(format!("{}: malformed checksum header", origin)))?;

    let expected = u32::from_str_radix(header, 16).map_err(|_| {
        StorageError::corruption(format!("{}: malformed checksum '{}'", origin, header))
    })?;

    let payload = &bytes[newline + 1..];
    let actual = compute_checksum(payload);
    if actual != expected {
        return Err(StorageError::corruption(format!(
            "{}: checksum mismatch (expected {:08x}, found {:08x})",
            origin, expected, actual
        )));
    }

    Ok(payload)
}
