/// Elliptic curve cryptography on secp256k1.
///
/// Private keys, public keys and ECDSA signatures: the signer that turns a
/// 32-byte transaction digest into a DER signature.

pub mod private_key;
pub mod public_key;
pub mod signature;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::Signature;
