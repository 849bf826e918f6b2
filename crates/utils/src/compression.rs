//! Gzip codec wrappers

use commonkit_core::{Error, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress a byte buffer with gzip framing at the default level.
///
/// The stream is finished before returning, so flush failures surface
/// as errors instead of producing a silently truncated buffer.
pub fn gzip_encode(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| Error::compression("encode", e))?;
    encoder.finish().map_err(|e| Error::compression("encode", e))
}

/// Decompress a gzip-framed byte buffer.
///
/// Fails on malformed, truncated, or non-gzip input.
pub fn gzip_decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| Error::compression("decode", e))?;
    Ok(out)
}
