/// Error types for script operations.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// An ASM token is neither a known opcode nor hex push data.
    #[error("invalid asm token '{0}'")]
    InvalidAsmToken(String),

    /// Attempted to append a push-data opcode through `append_opcodes`.
    #[error("use append_push_data for push data opcodes: 0x{0:02x}")]
    InvalidOpcodeType(u8),

    /// Push data exceeds the largest PUSHDATA4 length.
    #[error("data too big")]
    DataTooBig,
}
