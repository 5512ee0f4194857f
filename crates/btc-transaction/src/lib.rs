/// Legacy Bitcoin SDK - Transaction building, signing, and serialization.
///
/// Provides the Transaction type with inputs and outputs, sequence and
/// locktime encoders, the legacy (pre-segwit) signature hash, and
/// binary/hex serialization.

pub mod amount;
pub mod constants;
pub mod input;
pub mod output;
pub mod sequence;
pub mod sighash;
pub mod template;
pub mod transaction;

mod error;
pub use error::TransactionError;
pub use input::TxInput;
pub use output::TxOutput;
pub use sequence::{Locktime, RelativeTimelock, Sequence};
pub use transaction::Transaction;
