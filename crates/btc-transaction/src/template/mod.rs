//! Script templates for common transaction types.
//!
//! Provides the `UnlockingScriptTemplate` trait and a P2PKH implementation
//! for creating locking and unlocking scripts during transaction signing.

pub mod p2pkh;

use btc_script::Script;

use crate::transaction::Transaction;
use crate::TransactionError;

/// Trait for script templates that produce unlocking scripts.
///
/// The `sign` method receives the full transaction and the input index,
/// computes the appropriate signature digest, signs it, and returns the
/// unlocking script. It does not modify the transaction; use
/// `Transaction::sign_input` to store the result.
pub trait UnlockingScriptTemplate {
    /// Produce an unlocking script for the given input.
    fn sign(&self, tx: &Transaction, input_index: usize) -> Result<Script, TransactionError>;

    /// Estimate the byte length of the unlocking script before signing.
    fn estimate_length(&self, tx: &Transaction, input_index: usize) -> usize;
}
