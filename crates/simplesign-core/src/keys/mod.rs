//! Signing capabilities backed by in-memory keys.
//!
//! Key generation and storage are out of scope; construct these from keys
//! obtained elsewhere.

mod ecdsa;
mod ed25519;

pub use ecdsa::{EcdsaP256Signer, EcdsaP256Verifier};
pub use ed25519::{Ed25519Signer, Ed25519Verifier};
