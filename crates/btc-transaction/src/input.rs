//! Transaction input referencing a previous output.
//!
//! Contains the previous transaction id, output index, unlocking script
//! and sequence number. Provides binary serialization/deserialization
//! following the legacy wire format.

use btc_primitives::chainhash::Hash;
use btc_primitives::util::{ByteReader, ByteWriter};
use btc_script::Script;

use crate::constants::DEFAULT_TX_SEQUENCE;
use crate::sequence::Sequence;
use crate::TransactionError;

/// A single input in a legacy transaction.
///
/// Each input references an output from a previous transaction by its
/// transaction id (`prev_txid`) and output index (`prev_index`). The
/// `unlocking_script` (scriptSig) supplies the data required to satisfy
/// the referenced output's locking script.
///
/// # Wire format
///
/// | Field            | Size                     |
/// |------------------|--------------------------|
/// | prev_txid        | 32 bytes (hash order)    |
/// | prev_index       | 4 bytes (LE)             |
/// | script length    | VarInt                   |
/// | unlocking_script | variable                 |
/// | sequence         | 4 bytes (LE)             |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    /// Id of the transaction being spent. Stored in hash order, so it is
    /// written to the wire as is and displayed reversed.
    pub prev_txid: Hash,

    /// Index of the output within the previous transaction.
    pub prev_index: u32,

    /// The unlocking script (scriptSig). Empty until the input is signed.
    pub unlocking_script: Script,

    /// Sequence number. Defaults to `0xFFFFFFFF` (final).
    pub sequence: u32,
}

impl TxInput {
    /// Create an input spending `prev_index` of the transaction whose id is
    /// `txid_hex` (display order, 64 hex characters).
    ///
    /// # Returns
    /// The input with an empty unlocking script and final sequence, or an
    /// error if `txid_hex` is not a valid transaction id.
    pub fn new(txid_hex: &str, prev_index: u32) -> Result<Self, TransactionError> {
        let prev_txid = Hash::from_hex(txid_hex)?;
        Ok(Self::from_outpoint(prev_txid, prev_index))
    }

    /// Create an input from an already-parsed outpoint.
    pub fn from_outpoint(prev_txid: Hash, prev_index: u32) -> Self {
        TxInput {
            prev_txid,
            prev_index,
            unlocking_script: Script::new(),
            sequence: DEFAULT_TX_SEQUENCE,
        }
    }

    pub fn with_unlocking_script(mut self, script: Script) -> Self {
        self.unlocking_script = script;
        self
    }

    pub fn with_sequence(mut self, sequence: Sequence) -> Self {
        self.sequence = sequence.to_u32();
        self
    }

    /// Set the raw sequence value.
    pub fn with_raw_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    /// Return the previous transaction id in display (reversed hex) form.
    pub fn txid_hex(&self) -> String {
        self.prev_txid.to_string()
    }

    /// Deserialize a `TxInput` from a `ByteReader`.
    ///
    /// # Arguments
    /// * `reader` - The reader positioned at the start of an encoded input.
    ///
    /// # Returns
    /// `Ok(TxInput)` on success, or a `SerializationError` if the data is
    /// truncated.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let txid_bytes: [u8; 32] = reader.read_array().map_err(|e| {
            TransactionError::SerializationError(format!("reading previous txid: {}", e))
        })?;

        let prev_index = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading output index: {}", e))
        })?;

        let script_len = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading script length: {}", e))
        })?;

        let script_len = usize::try_from(script_len.value()).map_err(|_| {
            TransactionError::SerializationError("script length overflows usize".to_string())
        })?;
        let script_bytes = reader.read_bytes(script_len).map_err(|e| {
            TransactionError::SerializationError(format!("reading unlocking script: {}", e))
        })?;

        let sequence = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading sequence number: {}", e))
        })?;

        Ok(TxInput {
            prev_txid: Hash::new(txid_bytes),
            prev_index,
            unlocking_script: Script::from_bytes(script_bytes),
            sequence,
        })
    }

    /// Serialize this input into a `ByteWriter`.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_bytes(self.prev_txid.as_bytes());
        writer.write_u32_le(self.prev_index);
        writer.write_var_bytes(self.unlocking_script.to_bytes());
        writer.write_u32_le(self.sequence);
    }

    /// Serialize this input to a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(41 + self.unlocking_script.len());
        self.write_to(&mut writer);
        writer.into_bytes()
    }
}
