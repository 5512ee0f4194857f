/// Legacy Bitcoin SDK - Hashing, chain hashes, wire cursors and keys.
///
/// This crate provides the building blocks shared by the script and
/// transaction crates:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - Chain hash type used for transaction ids
/// - Compact-size integers and little-endian byte cursors
/// - secp256k1 keys and ECDSA signatures for signing digests

pub mod hash;
pub mod chainhash;
pub mod util;
pub mod ec;

mod error;
pub use error::PrimitivesError;
