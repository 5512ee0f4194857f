//! ECDSA signature with DER serialization and RFC6979 deterministic nonces.
//!
//! Signatures are always produced and serialized in low-S form, which is
//! what standard relay policy requires of legacy transaction signatures.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa;

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// The secp256k1 curve order N.
const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// Half of the secp256k1 curve order (N/2).
const HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B,
    0x20, 0xA0,
];

/// An ECDSA signature with big-endian R and S components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
}

impl Signature {
    /// Create a signature from raw R and S values.
    pub fn new(r: [u8; 32], s: [u8; 32]) -> Self {
        Signature { r, s }
    }

    /// The R component.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// The S component.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Parse a DER-encoded ECDSA signature.
    ///
    /// Expected format: `0x30 <len> 0x02 <r_len> <r> 0x02 <s_len> <s>`.
    /// Bytes after the announced sequence length (such as a trailing
    /// sighash flag) are ignored.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if the encoding is malformed
    /// or either integer is zero or not below the curve order.
    pub fn from_der(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let malformed = |what: &str| {
            PrimitivesError::InvalidSignature(format!("malformed signature: {}", what))
        };

        if bytes.len() < 8 || bytes[0] != 0x30 {
            return Err(malformed("no header magic"));
        }
        let seq_len = bytes[1] as usize;
        if seq_len + 2 > bytes.len() {
            return Err(malformed("bad length"));
        }
        let body = &bytes[2..seq_len + 2];

        let (r_bytes, rest) = read_der_int(body).ok_or_else(|| malformed("bogus R"))?;
        let (s_bytes, rest) = read_der_int(rest).ok_or_else(|| malformed("bogus S"))?;
        if !rest.is_empty() {
            return Err(malformed("trailing data in sequence"));
        }

        let r = to_32_bytes(r_bytes)?;
        let s = to_32_bytes(s_bytes)?;
        for (name, v) in [("R", &r), ("S", &s)] {
            if v.iter().all(|&b| b == 0) {
                return Err(PrimitivesError::InvalidSignature(format!(
                    "signature {} is zero",
                    name
                )));
            }
            if !is_less_than(v, &CURVE_ORDER) {
                return Err(PrimitivesError::InvalidSignature(format!(
                    "signature {} is >= curve.N",
                    name
                )));
            }
        }

        Ok(Signature { r, s })
    }

    /// Serialize the signature in DER format with low-S normalization.
    pub fn to_der(&self) -> Vec<u8> {
        let s = low_s(&self.s);
        let rb = canonicalize_int(&self.r);
        let sb = canonicalize_int(&s);

        let total_len = 6 + rb.len() + sb.len();
        let mut out = Vec::with_capacity(total_len);
        out.push(0x30);
        out.push((total_len - 2) as u8);
        out.push(0x02);
        out.push(rb.len() as u8);
        out.extend_from_slice(&rb);
        out.push(0x02);
        out.push(sb.len() as u8);
        out.extend_from_slice(&sb);
        out
    }

    /// Sign a 32-byte digest using RFC6979 deterministic nonces.
    pub fn sign(digest: &[u8; 32], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        let (k256_sig, _recovery_id) = priv_key
            .signing_key()
            .sign_prehash_recoverable(digest)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;

        let (r_bytes, s_bytes) = k256_sig.split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);

        Ok(Signature { r, s: low_s(&s) })
    }

    /// Verify this signature against a 32-byte digest and public key.
    pub fn verify(&self, digest: &[u8; 32], pub_key: &PublicKey) -> bool {
        let k256_sig = match ecdsa::Signature::from_scalars(
            k256::FieldBytes::from(self.r),
            k256::FieldBytes::from(self.s),
        ) {
            Ok(sig) => sig,
            Err(_) => return false,
        };

        pub_key
            .verifying_key()
            .verify_prehash(digest, &k256_sig)
            .is_ok()
    }
}

/// Read one DER INTEGER (`0x02 <len> <bytes>`) from the front of `data`.
fn read_der_int(data: &[u8]) -> Option<(&[u8], &[u8])> {
    if data.len() < 2 || data[0] != 0x02 {
        return None;
    }
    let len = data[1] as usize;
    if len == 0 || data.len() < 2 + len {
        return None;
    }
    Some((&data[2..2 + len], &data[2 + len..]))
}

/// Replace S with N - S when S is in the upper half of the order.
fn low_s(s: &[u8; 32]) -> [u8; 32] {
    if is_less_than(&HALF_ORDER, s) {
        subtract_from_order(s)
    } else {
        *s
    }
}

/// Strip leading zeros and prepend 0x00 if the high bit is set.
fn canonicalize_int(val: &[u8; 32]) -> Vec<u8> {
    let start = val.iter().position(|&b| b != 0).unwrap_or(31);
    let trimmed = &val[start..];
    let mut out = Vec::with_capacity(trimmed.len() + 1);
    if trimmed[0] & 0x80 != 0 {
        out.push(0x00);
    }
    out.extend_from_slice(trimmed);
    out
}

/// Left-pad a big-endian integer to 32 bytes.
fn to_32_bytes(bytes: &[u8]) -> Result<[u8; 32], PrimitivesError> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let trimmed = &bytes[start..];
    if trimmed.len() > 32 {
        return Err(PrimitivesError::InvalidSignature(
            "integer value too large for 32 bytes".to_string(),
        ));
    }
    let mut out = [0u8; 32];
    out[32 - trimmed.len()..].copy_from_slice(trimmed);
    Ok(out)
}

/// Big-endian comparison a < b.
fn is_less_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a < b
}

/// Compute N - val.
fn subtract_from_order(val: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;
    for i in (0..32).rev() {
        let diff = CURVE_ORDER[i] as i32 - val[i] as i32 - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }
    result
}
