#![cfg(feature = "use-std")]
use hash_tests::hash::{Test, main_test, one_million_a};
use hex;
use super::{hash, pad, to_words, InvalidLength};

#[test]
fn sha256_main() {
    // Standard FIPS 180-4 family vectors
    let tests = new_tests!("test1", "test2", "test3", "test4", "test5");
    main_test(hash, &tests);
}

#[test]
fn sha256_1million_a() {
    let output = include_bytes!("data/one_million_a.output");
    one_million_a(hash, output);
}

#[test]
fn sha256_hex_rendering() {
    let digest = hash(b"The quick brown fox jumps over the lazy dog");
    assert_eq!(hex::encode(&digest[..]),
               "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592");
}

#[test]
fn sha256_deterministic() {
    let message = b"determinism check";
    assert_eq!(hash(message)[..], hash(message)[..]);
}

#[test]
fn sha256_avalanche() {
    let message = [0x5au8; 96];
    let mut flipped = message;
    flipped[41] ^= 0x01;

    let a = hash(&message);
    let b = hash(&flipped);

    // Half of the 256 digest bits flip on average.
    let mut differing = 0;
    for i in 0..32 {
        differing += (a[i] ^ b[i]).count_ones();
    }
    assert!(differing >= 64, "only {} digest bits differ", differing);
}

#[test]
fn pad_aligns_to_512_bits() {
    for len in 0..129 {
        let padded = pad(&vec![0u8; len]);
        assert_eq!(padded.len() * 8 % 512, 0, "length {}", len);
    }
}

#[test]
fn pad_terminator_and_zero_fill() {
    for &len in [0usize, 1, 55, 56, 63, 64, 119, 120].iter() {
        let padded = pad(&vec![0x17u8; len]);

        assert_eq!(padded[len], 0x80);
        for &byte in padded[len + 1..padded.len() - 8].iter() {
            assert_eq!(byte, 0);
        }
    }
}

#[test]
fn pad_length_field_is_big_endian_bit_count() {
    for &len in [0usize, 1, 20, 55, 56, 64, 128].iter() {
        let padded = pad(&vec![1u8; len]);

        let mut bits = 0u64;
        for &byte in padded[padded.len() - 8..].iter() {
            bits = (bits << 8) | byte as u64;
        }
        assert_eq!(bits, (len as u64) * 8);
    }
}

#[test]
fn pad_no_extra_block_when_already_aligned() {
    // len + 9 a multiple of 64: the terminator and length field fit
    // exactly, no extra block.
    assert_eq!(pad(&[b'a'; 55]).len(), 64);
    assert_eq!(pad(&vec![0u8; 119]).len(), 128);
}

#[test]
fn pad_terminator_lands_in_word_16_for_one_block_message() {
    let words = to_words(&pad(&[0u8; 64])).unwrap();
    assert_eq!(words[16], 0x8000_0000);
}

#[test]
fn to_words_rejects_unaligned_input() {
    assert_eq!(to_words(&[0u8; 7]), Err(InvalidLength));
}
