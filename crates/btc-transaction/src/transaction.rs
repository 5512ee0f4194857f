//! Core transaction type.
//!
//! Represents a legacy transaction with version, inputs, outputs, and
//! locktime. Supports binary and hex serialization, transaction id
//! computation and the legacy signature digest.

use btc_primitives::chainhash::{double_hash_h, Hash};
use btc_primitives::util::{ByteReader, ByteWriter, VarInt};
use btc_script::ScriptBytes;

use crate::constants::{DEFAULT_TX_LOCKTIME, DEFAULT_TX_VERSION};
use crate::input::TxInput;
use crate::output::TxOutput;
use crate::sequence::Locktime;
use crate::sighash;
use crate::template::UnlockingScriptTemplate;
use crate::TransactionError;

/// A legacy transaction consisting of a version, a set of inputs, a set of
/// outputs, and a lock time.
///
/// Inputs and outputs are ordered; their positions are part of the id and
/// of every signature digest.
///
/// # Wire format
///
/// | Field        | Size                      |
/// |--------------|---------------------------|
/// | version      | 4 bytes (LE)              |
/// | input count  | VarInt                    |
/// | inputs       | variable (per input)      |
/// | output count | VarInt                    |
/// | outputs      | variable (per output)     |
/// | lock_time    | 4 bytes (LE)              |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction format version. Usually 1 or 2.
    pub version: u32,

    /// Ordered list of transaction inputs.
    pub inputs: Vec<TxInput>,

    /// Ordered list of transaction outputs.
    pub outputs: Vec<TxOutput>,

    /// Lock time. If non-zero, the transaction is not valid until the
    /// specified block height or UNIX timestamp.
    pub lock_time: Locktime,
}

impl Transaction {
    /// Create a new empty transaction with the default version and lock time.
    pub fn new() -> Self {
        Transaction {
            version: DEFAULT_TX_VERSION,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: Locktime(DEFAULT_TX_LOCKTIME),
        }
    }

    /// Assemble a transaction from its four fields.
    pub fn from_parts(
        version: u32,
        inputs: Vec<TxInput>,
        outputs: Vec<TxOutput>,
        lock_time: Locktime,
    ) -> Self {
        Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        }
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex-encoded string.
    ///
    /// # Returns
    /// `Ok(Transaction)` on success, or a `SerializationError` if the hex is
    /// invalid or the bytes do not form exactly one transaction.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::SerializationError(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from raw bytes.
    ///
    /// The slice must contain exactly one complete transaction with no
    /// trailing data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = ByteReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::SerializationError(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    /// Deserialize a transaction from a `ByteReader`.
    ///
    /// Reads the version, input count, inputs, output count, outputs, and
    /// lock time, leaving the reader just past the transaction.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let version = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading version: {}", e))
        })?;

        let input_count = read_count(reader, "input")?;
        // Each input is at least 41 bytes; don't trust the count for capacity.
        let mut inputs = Vec::with_capacity(input_count.min(reader.remaining() / 41));
        for _ in 0..input_count {
            inputs.push(TxInput::read_from(reader)?);
        }

        let output_count = read_count(reader, "output")?;
        let mut outputs = Vec::with_capacity(output_count.min(reader.remaining() / 9));
        for _ in 0..output_count {
            outputs.push(TxOutput::read_from(reader)?);
        }

        let lock_time = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading lock time: {}", e))
        })?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time: Locktime(lock_time),
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Serialize this transaction into a `ByteWriter`.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_u32_le(self.version);

        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(writer);
        }

        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(writer);
        }

        writer.write_bytes(&self.lock_time.for_transaction());
    }

    /// Serialize this transaction to raw bytes.
    ///
    /// # Returns
    /// version(4) + varint(n_in) + inputs + varint(n_out) + outputs + locktime(4).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(256);
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Serialize this transaction to a lowercase hex string (no reversal).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Return the size of this transaction in bytes.
    pub fn size(&self) -> usize {
        self.to_bytes().len()
    }

    // -----------------------------------------------------------------
    // Transaction ID
    // -----------------------------------------------------------------

    /// Compute the transaction id: double SHA-256 of the serialized bytes.
    ///
    /// Recomputed on every call; nothing is cached across mutation.
    pub fn tx_id(&self) -> Hash {
        double_hash_h(&self.to_bytes())
    }

    /// Compute the transaction id as the conventional 64-character
    /// byte-reversed hex string.
    pub fn id(&self) -> String {
        self.tx_id().to_string()
    }

    // -----------------------------------------------------------------
    // Inputs and outputs
    // -----------------------------------------------------------------

    pub fn add_input(&mut self, input: TxInput) {
        self.inputs.push(input);
    }

    pub fn add_output(&mut self, output: TxOutput) {
        self.outputs.push(output);
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Compute the sum of all output satoshi values.
    ///
    /// # Returns
    /// `OutOfRange` if the sum overflows an `i64`.
    pub fn total_output_satoshis(&self) -> Result<i64, TransactionError> {
        self.outputs
            .iter()
            .try_fold(0i64, |acc, o| acc.checked_add(o.satoshis))
            .ok_or_else(|| {
                TransactionError::OutOfRange("total output value overflows i64".to_string())
            })
    }

    // -----------------------------------------------------------------
    // Signature hash
    // -----------------------------------------------------------------

    /// Compute the legacy signature digest for one input.
    ///
    /// Shorthand for [`sighash::signature_hash`]; the transaction itself is
    /// left untouched.
    ///
    /// # Arguments
    /// * `input_index` - Index of the input being signed.
    /// * `subscript` - Locking script of the output that input spends.
    /// * `sighash_flags` - Base type optionally OR'd with ANYONECANPAY.
    pub fn digest<S: ScriptBytes + ?Sized>(
        &self,
        input_index: usize,
        subscript: &S,
        sighash_flags: u8,
    ) -> Result<[u8; 32], TransactionError> {
        sighash::signature_hash(self, input_index, subscript, sighash_flags)
    }

    /// Sign one input with `template` and store the resulting unlocking
    /// script on it.
    ///
    /// The digest never covers unlocking scripts, so inputs can be signed
    /// in any order.
    pub fn sign_input<T: UnlockingScriptTemplate + ?Sized>(
        &mut self,
        input_index: usize,
        template: &T,
    ) -> Result<(), TransactionError> {
        let script = template.sign(self, input_index)?;
        let input_count = self.inputs.len();
        let input = self.inputs.get_mut(input_index).ok_or_else(|| {
            TransactionError::InvalidTransaction(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index, input_count
            ))
        })?;
        input.unlocking_script = script;
        Ok(())
    }
}

/// Read an input or output count and convert it to `usize`.
fn read_count(reader: &mut ByteReader, what: &str) -> Result<usize, TransactionError> {
    let count = reader.read_varint().map_err(|e| {
        TransactionError::SerializationError(format!("reading {} count: {}", what, e))
    })?;
    usize::try_from(count.value()).map_err(|_| {
        TransactionError::SerializationError(format!("{} count overflows usize", what))
    })
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Transaction {
    /// Display the transaction as its hex-encoded serialization.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
