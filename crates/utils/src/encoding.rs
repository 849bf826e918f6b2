//! Fixed-width binary encoding and boolean coercion

/// Big-endian two's-complement bytes of a signed 64-bit integer.
pub fn i64_to_be_bytes(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// True iff `value` equals exactly 1.
pub fn int_to_bool(value: i64) -> bool {
    value == 1
}
