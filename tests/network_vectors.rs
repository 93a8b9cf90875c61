//! Vectors produced by the reference client against ZKsync Era.

use zksync_derive::{
    apply_l1_to_l2_alias, create2_address, create_address, hash_bytecode_hex, is_eth_hex,
    undo_l1_to_l2_alias, Address, BytecodeHash, NetworkConfig,
};

const BYTECODE_27_WORDS: &str = include_str!("fixtures/bytecode_27_words.hex");
const BYTECODE_459_WORDS: &str = include_str!("fixtures/bytecode_459_words.hex");

fn address(s: &str) -> Address {
    s.parse().unwrap()
}

#[test]
fn test_create_address() {
    let sender = address("0x36615Cf349d7F6344891B1e7CA7C72883F5dc049");
    assert_eq!(
        create_address(&sender, 1u64).to_string(),
        "0x4B5DF730c2e6b28E17013A1485E5d9BC41Efe021"
    );
}

#[test]
fn test_create2_address() {
    let sender = address("0x36615Cf349d7F6344891B1e7CA7C72883F5dc049");
    let bytecode_hash: BytecodeHash =
        "0x010001cb6a6e8d5f6829522f19fa9568660e0a9cd53b2e8be4deb0a679452e41"
            .parse()
            .unwrap();

    let deployed = create2_address(&sender, &bytecode_hash, &[0x01], &[0x01]);
    assert_eq!(
        deployed.to_string(),
        "0x29bac3E5E8FFE7415F97C956BFA106D70316ad50"
    );
}

#[test]
fn test_alias_round_trip() {
    let l1 = address("0x702942B8205E5dEdCD3374E5f4419843adA76Eeb");
    let l2 = address("0x813A42B8205E5DedCd3374e5f4419843ADa77FFC");

    assert_eq!(apply_l1_to_l2_alias(&l1), l2);
    assert_eq!(undo_l1_to_l2_alias(&l2), l1);
}

#[test]
fn test_undo_alias_below_offset() {
    let l2 = Address::from_low_u64_be(0x100);
    assert_eq!(
        undo_l1_to_l2_alias(&l2),
        address("0xeeeeffffffffffffffffffffffffffffffffefef")
    );
}

#[test]
fn test_hash_bytecode_single_byte_length() {
    let hash = hash_bytecode_hex(BYTECODE_27_WORDS.trim()).unwrap();
    assert_eq!(
        hash.as_bytes(),
        &[
            1, 0, 0, 27, 57, 231, 154, 55, 0, 164, 201, 96, 244, 120, 23, 112, 54, 34, 224, 133,
            160, 122, 88, 164, 112, 80, 0, 134, 48, 138, 74, 16,
        ]
    );
    assert_eq!(hash.word_count(), 27);
}

#[test]
fn test_hash_bytecode_two_byte_length() {
    let hash = hash_bytecode_hex(BYTECODE_459_WORDS.trim()).unwrap();
    assert_eq!(
        hash.as_bytes(),
        &[
            1, 0, 1, 203, 106, 110, 141, 95, 104, 41, 82, 47, 25, 250, 149, 104, 102, 14, 10,
            156, 213, 59, 46, 139, 228, 222, 176, 166, 121, 69, 46, 65,
        ]
    );
    assert_eq!(hash.word_count(), 459);
}

#[test]
fn test_hashed_bytecode_feeds_create2() {
    let hash = hash_bytecode_hex(BYTECODE_459_WORDS.trim()).unwrap();
    let sender = address("0x36615Cf349d7F6344891B1e7CA7C72883F5dc049");
    assert_eq!(
        create2_address(&sender, &hash, &[0x01], &[0x01]),
        address("0x29bac3E5E8FFE7415F97C956BFA106D70316ad50")
    );
}

#[test]
fn test_is_eth() {
    assert!(is_eth_hex("0x0000000000000000000000000000000000000000").unwrap());
    assert!(is_eth_hex("0x000000000000000000000000000000000000800a").unwrap());
    assert!(!is_eth_hex("0x36615Cf349d7F6344891B1e7CA7C72883F5dc049").unwrap());
}

#[test]
fn test_free_functions_match_era_config() {
    let config = NetworkConfig::ERA;
    let sender = address("0x36615Cf349d7F6344891B1e7CA7C72883F5dc049");

    assert_eq!(config.create_address(&sender, 7u64), create_address(&sender, 7u64));
    assert_eq!(
        config.apply_l1_to_l2_alias(&sender),
        apply_l1_to_l2_alias(&sender)
    );
}
