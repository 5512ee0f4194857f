//! Bitcoin Script type - a sequence of opcodes and data pushes.
//!
//! Scripts appear in transaction inputs (unlocking) and outputs (locking).
//! Transaction code never interprets them; it only needs their serialized
//! bytes and length, which is the `ScriptBytes` contract.

use std::borrow::Cow;
use std::fmt;

use crate::opcodes::*;
use crate::scriptnum;
use crate::ScriptError;

/// Anything that can be serialized into script bytes.
///
/// Transaction inputs and outputs store a `Script`, but signature hashing
/// accepts any implementor as the subscript so callers can pass raw byte
/// slices or their own script representations.
pub trait ScriptBytes {
    /// The serialized script.
    fn script_bytes(&self) -> Cow<'_, [u8]>;

    /// Length of the serialized script in bytes.
    fn script_len(&self) -> usize {
        self.script_bytes().len()
    }
}

/// A Bitcoin script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string (e.g. "76a914...88ac").
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or an error if the hex is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(hex_str).map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Ok(Script(bytes))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create a script from a Bitcoin ASM string.
    ///
    /// Tokens are separated by whitespace. Known opcode names (e.g.
    /// "OP_DUP") are emitted directly; anything else must be hex and is
    /// pushed as data with the minimal push prefix.
    ///
    /// # Returns
    /// A `Script`, or an error if a token is neither an opcode nor hex.
    pub fn from_asm(asm: &str) -> Result<Self, ScriptError> {
        let mut script = Script::new();
        for token in asm.split_whitespace() {
            if let Some(opcode) = string_to_opcode(token) {
                script.0.push(opcode);
            } else {
                let data = hex::decode(token)
                    .map_err(|_| ScriptError::InvalidAsmToken(token.to_string()))?;
                script.append_push_data(&data)?;
            }
        }
        Ok(script)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Encode the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Return a reference to the underlying bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return the length of the script in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the script is empty (zero bytes).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------------

    /// Check if this is a Pay-to-Public-Key-Hash (P2PKH) output script.
    ///
    /// Pattern: OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == 25
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == OP_DATA_20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    /// Append data to the script with the minimal PUSHDATA prefix.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        let prefix = push_data_prefix(data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Append raw opcodes to the script.
    ///
    /// Rejects push data opcodes (OP_DATA_1..OP_PUSHDATA4) since those must
    /// be followed by their data; use `append_push_data` instead.
    pub fn append_opcodes(&mut self, opcodes: &[u8]) -> Result<(), ScriptError> {
        if let Some(&op) = opcodes
            .iter()
            .find(|&&op| (OP_DATA_1..=OP_PUSHDATA4).contains(&op))
        {
            return Err(ScriptError::InvalidOpcodeType(op));
        }
        self.0.extend_from_slice(opcodes);
        Ok(())
    }

    /// Append an integer push.
    ///
    /// 0 becomes OP_0, -1 becomes OP_1NEGATE and 1..=16 become OP_1..OP_16;
    /// any other value is pushed as a minimal script number. This is how a
    /// sequence or locktime value is placed ahead of CHECKSEQUENCEVERIFY or
    /// CHECKLOCKTIMEVERIFY.
    pub fn append_int(&mut self, value: i64) -> Result<(), ScriptError> {
        match value {
            0 => self.0.push(OP_0),
            -1 => self.0.push(OP_1NEGATE),
            1..=16 => self.0.push(OP_1 + (value as u8) - 1),
            _ => self.append_push_data(&scriptnum::encode(value))?,
        }
        Ok(())
    }
}

/// Build the minimal PUSHDATA prefix for a payload of `data_len` bytes.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>, ScriptError> {
    if data_len <= OP_DATA_75 as usize {
        Ok(vec![data_len as u8])
    } else if data_len <= 0xFF {
        Ok(vec![OP_PUSHDATA1, data_len as u8])
    } else if data_len <= 0xFFFF {
        let mut buf = vec![OP_PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        Ok(buf)
    } else if let Ok(len) = u32::try_from(data_len) {
        let mut buf = vec![OP_PUSHDATA4];
        buf.extend_from_slice(&len.to_le_bytes());
        Ok(buf)
    } else {
        Err(ScriptError::DataTooBig)
    }
}

impl ScriptBytes for Script {
    fn script_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.0)
    }

    fn script_len(&self) -> usize {
        self.0.len()
    }
}

impl ScriptBytes for [u8] {
    fn script_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }

    fn script_len(&self) -> usize {
        self.len()
    }
}

impl ScriptBytes for Vec<u8> {
    fn script_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }

    fn script_len(&self) -> usize {
        self.len()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl fmt::Display for Script {
    /// Display the script as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
