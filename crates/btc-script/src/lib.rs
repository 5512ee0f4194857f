/// Legacy Bitcoin SDK - Script byte container and opcodes.
///
/// Provides the `Script` type, the `ScriptBytes` capability consumed by
/// transaction serialization and signature hashing, opcode constants and
/// minimal integer pushes.

pub mod script;
pub mod opcodes;
pub mod scriptnum;

mod error;
pub use error::ScriptError;
pub use script::{Script, ScriptBytes};
