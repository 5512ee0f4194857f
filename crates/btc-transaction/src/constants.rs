//! Protocol constants and construction defaults.
//!
//! These are the values a new transaction, input or signature starts out
//! with when the caller does not override them.

/// Version used by `Transaction::new()`.
pub const DEFAULT_TX_VERSION: u32 = 2;

/// Locktime used by `Transaction::new()`: no absolute lock.
pub const DEFAULT_TX_LOCKTIME: u32 = 0;

/// Final sequence: no relative timelock, no replace-by-fee signal.
pub const DEFAULT_TX_SEQUENCE: u32 = 0xFFFF_FFFF;

/// Sequence written into non-signed inputs by SIGHASH_NONE / SIGHASH_SINGLE.
pub const EMPTY_TX_SEQUENCE: u32 = 0x0000_0000;

/// Sequence that keeps the transaction locktime enforced without opting
/// into replace-by-fee.
pub const ABSOLUTE_TIMELOCK_SEQUENCE: u32 = 0xFFFF_FFFE;

/// Sequence signalling replace-by-fee.
pub const REPLACE_BY_FEE_SEQUENCE: u32 = 0x0000_0001;

/// Set when the relative timelock counts 512-second units rather than blocks.
pub const SEQUENCE_LOCKTIME_TYPE_FLAG: u32 = 1 << 22;

/// Locktime values below this are block heights; the rest are UNIX times.
pub const LOCKTIME_THRESHOLD: u32 = 500_000_000;

// -----------------------------------------------------------------------
// Sighash flags
// -----------------------------------------------------------------------

/// Sign all inputs and all outputs (the default).
pub const SIGHASH_ALL: u8 = 0x01;

/// Sign all inputs but no outputs, allowing outputs to be modified.
pub const SIGHASH_NONE: u8 = 0x02;

/// Sign all inputs and only the output with the same index as the signed input.
pub const SIGHASH_SINGLE: u8 = 0x03;

/// Combined with a base type: only sign the current input, allowing other
/// inputs to be added later.
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;

/// Mask applied to extract the base sighash type (ALL, NONE, SINGLE).
pub const SIGHASH_MASK: u8 = 0x1f;
