//! Chain hash type for transaction identification.
//!
//! Provides a `Hash` type: a 32-byte double-SHA-256 value stored in hash
//! (wire) order and displayed as byte-reversed hex, the historical
//! convention for transaction ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Size of a Hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Length of the hex display form of a Hash (64 hex characters).
pub const HASH_HEX_SIZE: usize = HASH_SIZE * 2;

/// A 32-byte hash used for transaction ids.
///
/// The bytes are kept in the order the hash function produced them, which
/// is also the order they take on the wire. `Display` and `from_hex` work
/// on the byte-reversed form shown by explorers and node RPCs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Create a Hash from a raw 32-byte array in wire order.
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a Hash from a wire-order byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Hash)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != HASH_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            )));
        }
        let mut arr = [0u8; HASH_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Hash(arr))
    }

    /// Parse a Hash from its display (byte-reversed) hex form.
    ///
    /// # Arguments
    /// * `hex_str` - Exactly 64 hex characters, upper or lower case.
    ///
    /// # Returns
    /// `Ok(Hash)` with the bytes in wire order, or an error if the string
    /// has the wrong length or is not valid hex.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.len() != HASH_HEX_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "hash string must be {} hex characters, got {}",
                HASH_HEX_SIZE,
                hex_str.len()
            )));
        }
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(hex_str, &mut bytes)?;
        bytes.reverse();
        Ok(Hash(bytes))
    }

    /// Access the wire-order bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Return the bytes in display order (reversed).
    pub fn to_display_bytes(&self) -> [u8; HASH_SIZE] {
        let mut reversed = self.0;
        reversed.reverse();
        reversed
    }
}

/// Display the hash as byte-reversed lowercase hex.
///
/// Wire bytes `[0x06, 0xe5, ...]` display as `"...e506"`.
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_display_bytes()))
    }
}

impl FromStr for Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

/// Serialize as the display hex string.
impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize from the display hex string.
impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute SHA-256d of the input and return the result as a Hash.
pub fn double_hash_h(data: &[u8]) -> Hash {
    Hash(sha256d(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Genesis coinbase transaction id as shown by explorers.
    const GENESIS_COINBASE_TXID: &str =
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

    #[test]
    fn test_from_hex_reverses_bytes() {
        let hash = Hash::from_hex(GENESIS_COINBASE_TXID).unwrap();
        assert_eq!(hash.as_bytes()[0], 0x3b);
        assert_eq!(hash.as_bytes()[31], 0x4a);
        assert_eq!(hash.to_string(), GENESIS_COINBASE_TXID);
    }

    #[test]
    fn test_from_hex_accepts_uppercase() {
        let upper = GENESIS_COINBASE_TXID.to_uppercase();
        let hash = Hash::from_hex(&upper).unwrap();
        assert_eq!(hash.to_string(), GENESIS_COINBASE_TXID);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(matches!(
            Hash::from_hex("abcd"),
            Err(PrimitivesError::InvalidHash(_))
        ));
        let too_long = format!("{}00", GENESIS_COINBASE_TXID);
        assert!(Hash::from_hex(&too_long).is_err());
        assert!(Hash::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_bad_chars() {
        let bad = format!("zz{}", &GENESIS_COINBASE_TXID[2..]);
        assert!(matches!(Hash::from_hex(&bad), Err(PrimitivesError::InvalidHex(_))));
    }

    #[test]
    fn test_from_bytes_length() {
        assert!(Hash::from_bytes(&[0u8; 32]).is_ok());
        assert!(Hash::from_bytes(&[0u8; 31]).is_err());
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Hash::default().to_string(), "0".repeat(64));
    }

    #[test]
    fn test_from_str() {
        let hash: Hash = GENESIS_COINBASE_TXID.parse().unwrap();
        assert_eq!(hash.to_string(), GENESIS_COINBASE_TXID);
    }

    #[test]
    fn test_serde_json_uses_display_hex() {
        let hash = Hash::from_hex(GENESIS_COINBASE_TXID).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", GENESIS_COINBASE_TXID));
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_double_hash_h() {
        let hash = double_hash_h(b"");
        assert_eq!(
            hex::encode(hash.as_bytes()),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }
}
