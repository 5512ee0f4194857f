//! Pay-to-Public-Key-Hash (P2PKH) script template.
//!
//! Creates standard P2PKH locking scripts (`OP_DUP OP_HASH160 <hash>
//! OP_EQUALVERIFY OP_CHECKSIG`) and unlocking scripts (`<sig> <pubkey>`).

use btc_primitives::ec::PrivateKey;
use btc_script::opcodes::*;
use btc_script::Script;
use tracing::debug;

use crate::constants::SIGHASH_ALL;
use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Create a P2PKH locking script from a 20-byte public key hash.
///
/// Produces: `OP_DUP OP_HASH160 <20-byte pubkey hash> OP_EQUALVERIFY OP_CHECKSIG`
pub fn lock(pubkey_hash: &[u8; 20]) -> Script {
    let mut bytes = Vec::with_capacity(25);
    bytes.push(OP_DUP);
    bytes.push(OP_HASH160);
    bytes.push(OP_DATA_20);
    bytes.extend_from_slice(pubkey_hash);
    bytes.push(OP_EQUALVERIFY);
    bytes.push(OP_CHECKSIG);
    Script::from(bytes)
}

/// Create a P2PKH unlocker for signing transaction inputs.
///
/// # Arguments
/// * `private_key` - The private key used to sign.
/// * `sighash_flag` - Optional sighash flag. Defaults to `SIGHASH_ALL`.
pub fn unlock(private_key: PrivateKey, sighash_flag: Option<u8>) -> P2PKH {
    P2PKH {
        private_key,
        sighash_flag: sighash_flag.unwrap_or(SIGHASH_ALL),
    }
}

/// P2PKH signing template holding a private key and sighash flag.
///
/// The subscript signed over is the P2PKH lock of the key's own public
/// key hash, so it only produces valid signatures for outputs locked to
/// that key.
pub struct P2PKH {
    private_key: PrivateKey,
    sighash_flag: u8,
}

impl P2PKH {
    /// The locking script this template can unlock.
    pub fn locking_script(&self) -> Script {
        lock(&self.private_key.pub_key().hash160())
    }
}

impl UnlockingScriptTemplate for P2PKH {
    /// Sign the specified input and produce `<DER_sig || flag> <compressed_pubkey>`.
    fn sign(&self, tx: &Transaction, input_index: usize) -> Result<Script, TransactionError> {
        let pub_key = self.private_key.pub_key();
        let subscript = lock(&pub_key.hash160());

        let digest = tx.digest(input_index, &subscript, self.sighash_flag)?;
        let signature = self.private_key.sign(&digest).map_err(|e| {
            debug!(input_index, error = %e, "P2PKH signing failed");
            TransactionError::SigningError(e.to_string())
        })?;

        let der_sig = signature.to_der();
        let mut sig_buf = Vec::with_capacity(der_sig.len() + 1);
        sig_buf.extend_from_slice(&der_sig);
        sig_buf.push(self.sighash_flag);

        let mut script = Script::new();
        script.append_push_data(&sig_buf)?;
        script.append_push_data(&pub_key.to_compressed())?;

        debug!(input_index, sighash_flag = self.sighash_flag, "signed P2PKH input");
        Ok(script)
    }

    /// A P2PKH scriptSig is at most 1 + 73 (DER sig + flag) + 1 + 33.
    fn estimate_length(&self, _tx: &Transaction, _input_index: usize) -> usize {
        108
    }
}
