#![deny(missing_docs)]

//! Legacy Bitcoin SDK - Complete SDK.
//!
//! Re-exports all SDK components for convenient single-crate usage.
//!
//! ```
//! use btc_sdk::script::Script;
//! use btc_sdk::transaction::constants::SIGHASH_ALL;
//! use btc_sdk::transaction::{Transaction, TxInput, TxOutput};
//!
//! let lock = Script::from_hex("76a914c3f8e5b0f8455a2b02c29c4488a550278209b66988ac").unwrap();
//! let mut tx = Transaction::new();
//! tx.add_input(TxInput::new(&"00".repeat(32), 0).unwrap());
//! tx.add_output(TxOutput::new(29_000_000, lock.clone()));
//!
//! let digest = tx.digest(0, &lock, SIGHASH_ALL).unwrap();
//! assert_eq!(digest.len(), 32);
//! assert_eq!(tx.id().len(), 64);
//! ```

pub use btc_primitives as primitives;
pub use btc_script as script;
pub use btc_transaction as transaction;
