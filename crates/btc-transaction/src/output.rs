//! Transaction output with satoshi value and locking script.
//!
//! Defines the spending conditions for the output's value. Provides
//! binary serialization/deserialization following the legacy wire format.

use btc_primitives::util::{ByteReader, ByteWriter};
use btc_script::Script;

use crate::amount::{btc_to_satoshis, NEGATIVE_SATOSHI};
use crate::TransactionError;

/// A single output in a legacy transaction.
///
/// The amount is signed so that the `-1` placeholder used by
/// SIGHASH_SINGLE preimages serializes exactly like any other value.
///
/// # Wire format
///
/// | Field            | Size               |
/// |------------------|--------------------|
/// | satoshis         | 8 bytes (LE, i64)  |
/// | script length    | VarInt             |
/// | locking_script   | variable           |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    /// The number of satoshis locked by this output.
    pub satoshis: i64,

    /// The locking script (scriptPubKey) that defines spending conditions.
    pub locking_script: Script,
}

impl TxOutput {
    pub fn new(satoshis: i64, locking_script: Script) -> Self {
        TxOutput {
            satoshis,
            locking_script,
        }
    }

    /// Create an output from a whole-coin amount.
    ///
    /// # Returns
    /// `OutOfRange` if the amount cannot be converted to satoshis.
    pub fn from_btc(btc: f64, locking_script: Script) -> Result<Self, TransactionError> {
        Ok(TxOutput::new(btc_to_satoshis(btc)?, locking_script))
    }

    /// The placeholder output written below the signed index in a
    /// SIGHASH_SINGLE preimage: `-1` satoshi and an empty script.
    pub fn blanked() -> Self {
        TxOutput::new(NEGATIVE_SATOSHI, Script::new())
    }

    /// Deserialize a `TxOutput` from a `ByteReader`.
    ///
    /// # Returns
    /// `Ok(TxOutput)` on success, or a `SerializationError` if the data is
    /// truncated.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let satoshis = reader.read_i64_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading satoshis: {}", e))
        })?;

        let script_len = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading script length: {}", e))
        })?;
        let script_len = usize::try_from(script_len.value()).map_err(|_| {
            TransactionError::SerializationError("script length overflows usize".to_string())
        })?;

        let script_bytes = reader.read_bytes(script_len).map_err(|e| {
            TransactionError::SerializationError(format!("reading locking script: {}", e))
        })?;

        Ok(TxOutput {
            satoshis,
            locking_script: Script::from_bytes(script_bytes),
        })
    }

    /// Serialize this output into a `ByteWriter`.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_i64_le(self.satoshis);
        writer.write_var_bytes(self.locking_script.to_bytes());
    }

    /// Serialize this output to a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(9 + self.locking_script.len());
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Return the locking script as a hex-encoded string.
    pub fn locking_script_hex(&self) -> String {
        self.locking_script.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_bytes() {
        let output = TxOutput::new(0, Script::new());
        assert_eq!(output.to_bytes(), vec![0u8; 9]);
    }

    #[test]
    fn test_blanked_serializes_as_minus_one() {
        let bytes = TxOutput::blanked().to_bytes();
        assert_eq!(hex::encode(bytes), "ffffffffffffffff00");
    }

    #[test]
    fn test_from_btc() {
        let script = Script::from_hex("76a914c3f8e5b0f8455a2b02c29c4488a550278209b66988ac").unwrap();
        let output = TxOutput::from_btc(0.29, script.clone()).unwrap();
        assert_eq!(output.satoshis, 29_000_000);
        assert_eq!(
            hex::encode(output.to_bytes()),
            "4081ba01000000001976a914c3f8e5b0f8455a2b02c29c4488a550278209b66988ac"
        );
        assert!(TxOutput::from_btc(f64::NAN, script).is_err());
    }

    #[test]
    fn test_read_write_roundtrip() {
        let output = TxOutput::new(-5, Script::from_bytes(&[0x6a; 256]));
        let bytes = output.to_bytes();
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(TxOutput::read_from(&mut reader).unwrap(), output);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_truncated_script() {
        let mut reader = ByteReader::new(&[0, 0, 0, 0, 0, 0, 0, 0, 0x02, 0x51]);
        assert!(matches!(
            TxOutput::read_from(&mut reader),
            Err(TransactionError::SerializationError(_))
        ));
    }
}
