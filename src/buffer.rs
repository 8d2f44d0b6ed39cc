//! Encoding and decoding at the native boundary.
//!
//! Paths and names go out as C strings: the UTF-8 bytes plus one trailing
//! NUL. Values go out as their bytes alone, since the write call takes an
//! explicit length and a value may itself contain NUL bytes.

use std::ffi::CString;

use crate::error::XattrError;

/// Encode a path or attribute name as a NUL-terminated C string.
pub fn encode_cstr(what: &'static str, s: &str) -> Result<CString, XattrError> {
    CString::new(s).map_err(|_| XattrError::InteriorNul { what })
}

/// Encode an attribute value. No terminator is appended.
pub fn encode_value(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Allocate a zeroed buffer of exactly `size` bytes, as reported by a
/// sizing call.
pub fn alloc(size: u64) -> Result<Vec<u8>, XattrError> {
    let len = usize::try_from(size).map_err(|_| XattrError::SizeOutOfRange { size })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| XattrError::Alloc { size: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Trim `buf` to the byte count a fetch call reported.
///
/// A count larger than the buffer means the payload grew after it was
/// sized; the buffer holds no usable data then.
pub fn filled(
    call: &'static str,
    mut buf: Vec<u8>,
    reported: u64,
) -> Result<Vec<u8>, XattrError> {
    let capacity = buf.len();
    match usize::try_from(reported) {
        Ok(n) if n <= capacity => {
            buf.truncate(n);
            Ok(buf)
        }
        _ => Err(XattrError::SizeRace {
            call,
            reported,
            capacity,
        }),
    }
}

pub fn decode_value(buf: Vec<u8>) -> Result<String, XattrError> {
    Ok(String::from_utf8(buf)?)
}

/// Split a listing of consecutive NUL-terminated names.
///
/// The final terminator leaves an empty entry behind, which is dropped.
pub fn decode_names(buf: &[u8]) -> Result<Vec<String>, XattrError> {
    let mut names = buf
        .split(|&b| b == 0)
        .map(|name| String::from_utf8(name.to_vec()))
        .collect::<Result<Vec<_>, _>>()?;
    if names.last().is_some_and(String::is_empty) {
        names.pop();
    }
    Ok(names)
}
