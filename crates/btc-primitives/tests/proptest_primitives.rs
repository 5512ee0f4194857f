use proptest::prelude::*;

use btc_primitives::chainhash::Hash;
use btc_primitives::ec::PrivateKey;
use btc_primitives::hash::sha256d;
use btc_primitives::util::{ByteReader, ByteWriter, VarInt};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        // Not every 32-byte array is a valid scalar (zero or >= N).
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let digest = sha256d(&msg);
            let sig = pk.sign(&digest).unwrap();
            prop_assert!(pk.pub_key().verify(&digest, &sig));
            prop_assert_eq!(sig.clone(), btc_primitives::ec::Signature::from_der(&sig.to_der()).unwrap());
        }
    }

    #[test]
    fn hash_hex_roundtrip(bytes in prop::array::uniform32(any::<u8>())) {
        let hash = Hash::new(bytes);
        let hex_str = hash.to_string();
        prop_assert_eq!(hex_str.len(), 64);
        let hash2 = Hash::from_hex(&hex_str).unwrap();
        prop_assert_eq!(hash, hash2);
    }

    #[test]
    fn varint_reader_consumes_exact_length(value in any::<u64>(), tail in prop::collection::vec(any::<u8>(), 0..8)) {
        let vi = VarInt(value);
        let mut writer = ByteWriter::new();
        writer.write_varint(vi);
        writer.write_bytes(&tail);
        let data = writer.into_bytes();

        let mut reader = ByteReader::new(&data);
        prop_assert_eq!(reader.read_varint().unwrap(), vi);
        prop_assert_eq!(reader.remaining(), tail.len());
    }
}
