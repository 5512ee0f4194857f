/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// A numeric argument is outside its legal range (e.g. relative
    /// timelock units, or a coin amount that cannot be represented).
    #[error("value out of range: {0}")]
    OutOfRange(String),
    /// The operation is not meaningful for this value (e.g. asking for the
    /// script form of a replace-by-fee sequence).
    #[error("invalid usage: {0}")]
    InvalidUsage(String),
    /// SIGHASH_SINGLE was requested for an input with no output at the
    /// same position.
    #[error("index {index} out of range (only {len} outputs)")]
    IndexOutOfRange { index: usize, len: usize },
    /// The transaction structure is invalid for the requested operation
    /// (e.g. an input index past the last input).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    /// An error occurred during input signing.
    #[error("signing error: {0}")]
    SigningError(String),
    /// An error occurred during binary/hex serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// An underlying script error (forwarded from `btc-script`).
    #[error("script error: {0}")]
    Script(#[from] btc_script::ScriptError),
    /// An underlying primitives error (forwarded from `btc-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] btc_primitives::PrimitivesError),
}
