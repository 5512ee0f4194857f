//! Script opcode constants.
//!
//! Only the opcodes a transaction builder needs to assemble standard
//! locking scripts and timelock scripts are named here; any other byte is
//! still a valid script byte, it just has no constant.

pub const OP_0: u8 = 0x00;
pub const OP_FALSE: u8 = OP_0;
pub const OP_DATA_1: u8 = 0x01;
pub const OP_DATA_20: u8 = 0x14;
pub const OP_DATA_33: u8 = 0x21;
pub const OP_DATA_75: u8 = 0x4b;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_TRUE: u8 = OP_1;
pub const OP_16: u8 = 0x60;
pub const OP_NOP: u8 = 0x61;
pub const OP_IF: u8 = 0x63;
pub const OP_NOTIF: u8 = 0x64;
pub const OP_ELSE: u8 = 0x67;
pub const OP_ENDIF: u8 = 0x68;
pub const OP_VERIFY: u8 = 0x69;
pub const OP_RETURN: u8 = 0x6a;
pub const OP_DROP: u8 = 0x75;
pub const OP_DUP: u8 = 0x76;
pub const OP_SWAP: u8 = 0x7c;
pub const OP_SIZE: u8 = 0x82;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_ADD: u8 = 0x93;
pub const OP_SUB: u8 = 0x94;
pub const OP_RIPEMD160: u8 = 0xa6;
pub const OP_SHA256: u8 = 0xa8;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_HASH256: u8 = 0xaa;
pub const OP_CODESEPARATOR: u8 = 0xab;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_CHECKSIGVERIFY: u8 = 0xad;
pub const OP_CHECKMULTISIG: u8 = 0xae;
pub const OP_CHECKMULTISIGVERIFY: u8 = 0xaf;
pub const OP_CHECKLOCKTIMEVERIFY: u8 = 0xb1;
pub const OP_CHECKSEQUENCEVERIFY: u8 = 0xb2;

/// Named opcodes accepted by `Script::from_asm`.
const NAMED_OPCODES: &[(&str, u8)] = &[
    ("OP_0", OP_0),
    ("OP_FALSE", OP_FALSE),
    ("OP_1NEGATE", OP_1NEGATE),
    ("OP_TRUE", OP_TRUE),
    ("OP_NOP", OP_NOP),
    ("OP_IF", OP_IF),
    ("OP_NOTIF", OP_NOTIF),
    ("OP_ELSE", OP_ELSE),
    ("OP_ENDIF", OP_ENDIF),
    ("OP_VERIFY", OP_VERIFY),
    ("OP_RETURN", OP_RETURN),
    ("OP_DROP", OP_DROP),
    ("OP_DUP", OP_DUP),
    ("OP_SWAP", OP_SWAP),
    ("OP_SIZE", OP_SIZE),
    ("OP_EQUAL", OP_EQUAL),
    ("OP_EQUALVERIFY", OP_EQUALVERIFY),
    ("OP_ADD", OP_ADD),
    ("OP_SUB", OP_SUB),
    ("OP_RIPEMD160", OP_RIPEMD160),
    ("OP_SHA256", OP_SHA256),
    ("OP_HASH160", OP_HASH160),
    ("OP_HASH256", OP_HASH256),
    ("OP_CODESEPARATOR", OP_CODESEPARATOR),
    ("OP_CHECKSIG", OP_CHECKSIG),
    ("OP_CHECKSIGVERIFY", OP_CHECKSIGVERIFY),
    ("OP_CHECKMULTISIG", OP_CHECKMULTISIG),
    ("OP_CHECKMULTISIGVERIFY", OP_CHECKMULTISIGVERIFY),
    ("OP_CHECKLOCKTIMEVERIFY", OP_CHECKLOCKTIMEVERIFY),
    ("OP_NOP2", OP_CHECKLOCKTIMEVERIFY),
    ("OP_CHECKSEQUENCEVERIFY", OP_CHECKSEQUENCEVERIFY),
    ("OP_NOP3", OP_CHECKSEQUENCEVERIFY),
];

/// Look up an opcode by its ASM name.
///
/// `OP_1` through `OP_16` are resolved arithmetically.
pub fn string_to_opcode(name: &str) -> Option<u8> {
    if let Some(n) = name.strip_prefix("OP_").and_then(|n| n.parse::<u8>().ok()) {
        if (1..=16).contains(&n) {
            return Some(OP_1 + n - 1);
        }
    }
    NAMED_OPCODES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, op)| *op)
}
