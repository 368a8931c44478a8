//! Shared helpers for the hash crates' known answer tests.

#![cfg_attr(not(feature = "use-std"), no_std)]

#[cfg(feature = "use-std")]
pub mod hash;
