//! An implementation of the SHA-256 cryptographic hash function.
//!
//! The whole message is hashed in one call: `pad` extends it with a
//! terminating `0x80` byte, zero fill and the 64-bit big-endian bit
//! length so the total is a multiple of 512 bits, the padded bytes are
//! reinterpreted as big-endian 32-bit words, and every 16-word block is
//! folded through the 64-round compression function. The final 8-word
//! state, serialized big-endian, is the 32-byte digest.
//!
//! # Usage
//!
//! ```rust
//! let digest = sha256::hash(b"Hello world!");
//!
//! assert_eq!(digest[..4], [0xc0, 0x53, 0x5e, 0x4b]);
//! ```

#![cfg_attr(not(feature = "use-std"), no_std)]

extern crate alloc;
extern crate hash_bytes;
#[cfg(test)]
#[macro_use]
extern crate hash_tests;
#[cfg(test)]
extern crate hex;

use alloc::vec::Vec;

pub use hash_bytes::{to_words, to_bytes, InvalidLength};
use hash_bytes::write_u64_be;

mod consts;
use consts::{STATE_LEN, BLOCK_LEN, H256, K32};

/// Pads `message` out to a multiple of the 64-byte block size: one byte
/// with only the high bit set, enough zero bytes to align, and the
/// original length in bits as a big-endian 64-bit integer.
///
/// The zero count is `(64 - (len + 9) % 64) % 64`; the outer modulo
/// keeps an already aligned `len + 9` from growing a full extra block.
/// A bit length of 2^64 or more wraps silently.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let pad_zero_bytes = (64 - (message.len() + 9) % 64) % 64;

    let mut padded = Vec::with_capacity(message.len() + 9 + pad_zero_bytes);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded.len() + pad_zero_bytes, 0);

    let mut length = [0u8; 8];
    write_u64_be(&mut length, (message.len() as u64).wrapping_mul(8));
    padded.extend_from_slice(&length);

    padded
}

/// Process one 16-word block with the SHA-256 compression function,
/// folding it into `state`.
pub fn digest_block(state: &mut [u32; STATE_LEN], block: &[u32; BLOCK_LEN]) {
    fn ch(x: u32, y: u32, z: u32) -> u32 { (x & y) | (!x & z) }

    fn maj(x: u32, y: u32, z: u32) -> u32 { (x & y) | (x & z) | (y & z) }

    fn big_sigma0(x: u32) -> u32 {
        x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
    }

    fn big_sigma1(x: u32) -> u32 {
        x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
    }

    fn small_sigma0(x: u32) -> u32 {
        x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
    }

    fn small_sigma1(x: u32) -> u32 {
        x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
    }

    // Expand the block into the 64-word message schedule.
    let mut w = [0u32; 64];
    w[..BLOCK_LEN].copy_from_slice(block);
    for t in BLOCK_LEN..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for t in 0..64 {
        let t1 = h.wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K32[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Hashes `message` with SHA-256 and returns the 32-byte digest.
///
/// Blocks are compressed strictly in order; every schedule and state
/// buffer is local to the call, so concurrent calls for different
/// messages need no synchronization.
pub fn hash(message: &[u8]) -> [u8; 32] {
    let padded = pad(message);
    let words = to_words(&padded).expect("padded message is 4-byte aligned");

    let mut state = H256;
    for block_words in words.chunks(BLOCK_LEN) {
        let mut block = [0u32; BLOCK_LEN];
        block.copy_from_slice(block_words);
        digest_block(&mut state, &block);
    }

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&to_bytes(&state));
    digest
}

#[cfg(test)]
mod tests;
