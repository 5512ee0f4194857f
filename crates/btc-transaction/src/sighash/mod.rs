//! Legacy signature hash computation.
//!
//! Computes the digest that is signed by ECDSA to authorize spending a
//! transaction input under the original (pre-segwit) scheme: a modified
//! copy of the transaction is serialized with the flags appended and
//! double-hashed.
//!
//! The modifications, in order:
//! 1. every unlocking script is emptied and the signed input's slot gets
//!    the subscript (the locking script of the output being spent);
//! 2. NONE drops all outputs, SINGLE keeps outputs up to the signed index
//!    with the lower ones blanked; both zero the other inputs' sequences;
//! 3. ANYONECANPAY keeps only the signed input.
//!
//! Any base type other than NONE or SINGLE is treated as ALL.

use btc_primitives::hash::sha256d;
use btc_primitives::util::ByteWriter;
use btc_script::{Script, ScriptBytes};
use tracing::{debug, trace};

use crate::constants::EMPTY_TX_SEQUENCE;
use crate::output::TxOutput;
use crate::transaction::Transaction;
use crate::TransactionError;

pub use crate::constants::{
    SIGHASH_ALL, SIGHASH_ANYONECANPAY, SIGHASH_MASK, SIGHASH_NONE, SIGHASH_SINGLE,
};

/// Compute the legacy signature hash for a given input.
///
/// # Arguments
/// * `tx`            - The transaction being signed. Never modified.
/// * `input_index`   - Index of the input being signed.
/// * `subscript`     - The locking script of the output being spent.
/// * `sighash_flags` - Base type (ALL, NONE, SINGLE) optionally OR'd with
///   ANYONECANPAY.
///
/// # Returns
/// A 32-byte double-SHA256 hash to be signed by ECDSA, `IndexOutOfRange`
/// for SINGLE without a matching output, or `InvalidTransaction` if
/// `input_index` is past the last input.
pub fn signature_hash<S: ScriptBytes + ?Sized>(
    tx: &Transaction,
    input_index: usize,
    subscript: &S,
    sighash_flags: u8,
) -> Result<[u8; 32], TransactionError> {
    let preimage = calc_preimage(tx, input_index, subscript, sighash_flags)?;
    let digest = sha256d(&preimage);
    trace!(
        input_index,
        sighash_flags,
        preimage_len = preimage.len(),
        digest = %hex::encode(digest),
        "computed legacy sighash"
    );
    Ok(digest)
}

/// Compute the pre-image bytes for the legacy sighash before double-hashing.
///
/// This is the serialization of the modified transaction copy followed by
/// the flags as a 4-byte little-endian integer. The flag byte is widened
/// without sign extension, so `0x81` becomes `81 00 00 00`.
pub fn calc_preimage<S: ScriptBytes + ?Sized>(
    tx: &Transaction,
    input_index: usize,
    subscript: &S,
    sighash_flags: u8,
) -> Result<Vec<u8>, TransactionError> {
    if input_index >= tx.inputs.len() {
        debug!(input_index, inputs = tx.inputs.len(), "sighash input index out of range");
        return Err(TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        )));
    }

    let mut tx_copy = tx.clone();
    for input in &mut tx_copy.inputs {
        input.unlocking_script = Script::new();
    }
    tx_copy.inputs[input_index].unlocking_script = Script::from_bytes(&subscript.script_bytes());

    match sighash_flags & SIGHASH_MASK {
        SIGHASH_NONE => {
            tx_copy.outputs.clear();
            zero_other_sequences(&mut tx_copy, input_index);
        }
        SIGHASH_SINGLE => {
            if input_index >= tx_copy.outputs.len() {
                debug!(
                    input_index,
                    outputs = tx_copy.outputs.len(),
                    "SIGHASH_SINGLE without matching output"
                );
                return Err(TransactionError::IndexOutOfRange {
                    index: input_index,
                    len: tx_copy.outputs.len(),
                });
            }
            tx_copy.outputs.truncate(input_index + 1);
            for output in &mut tx_copy.outputs[..input_index] {
                *output = TxOutput::blanked();
            }
            zero_other_sequences(&mut tx_copy, input_index);
        }
        _ => {}
    }

    if sighash_flags & SIGHASH_ANYONECANPAY != 0 {
        let signed = tx_copy.inputs.swap_remove(input_index);
        tx_copy.inputs = vec![signed];
    }

    let mut writer = ByteWriter::with_capacity(256);
    tx_copy.write_to(&mut writer);
    writer.write_i32_le(i32::from(sighash_flags));
    Ok(writer.into_bytes())
}

fn zero_other_sequences(tx: &mut Transaction, input_index: usize) {
    for (i, input) in tx.inputs.iter_mut().enumerate() {
        if i != input_index {
            input.sequence = EMPTY_TX_SEQUENCE;
        }
    }
}
