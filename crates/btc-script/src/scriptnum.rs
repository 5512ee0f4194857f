//! Minimal script number encoding.
//!
//! Script numbers are little-endian sign-magnitude byte strings: the most
//! significant bit of the last byte is the sign. Zero is the empty string.
//! This is the form timelock values take when pushed ahead of
//! CHECKLOCKTIMEVERIFY / CHECKSEQUENCEVERIFY.

/// Encode an integer as a minimal script number.
pub fn encode(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // If the top bit is already used, add a byte to carry the sign.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

/// Decode a script number of at most 8 bytes.
///
/// Returns `None` for longer inputs. Non-minimal encodings are accepted.
pub fn decode(bytes: &[u8]) -> Option<i64> {
    if bytes.is_empty() {
        return Some(0);
    }
    if bytes.len() > 8 {
        return None;
    }

    let mut magnitude: u64 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        magnitude |= u64::from(b) << (8 * i);
    }
    let sign_bit = 0x80u64 << (8 * (bytes.len() - 1));
    if magnitude & sign_bit != 0 {
        Some(-((magnitude & !sign_bit) as i64))
    } else {
        Some(magnitude as i64)
    }
}
