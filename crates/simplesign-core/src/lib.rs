//! Sign and verify container image identity payloads.
//!
//! This crate provides:
//! - Capability traits ([`SignMessage`], [`VerifySignature`]) that any signing
//!   backend implements
//! - [`sign_image`]: build, encode and sign a payload in one step
//! - [`ImageVerifier`] / [`verify_image`]: authenticity, strict decode and
//!   identity/digest binding, in that order
//! - ECDSA P-256 and Ed25519 capabilities in [`keys`]
//!
//! Core invariants:
//! - The signature always covers exactly the returned payload bytes
//! - Verification never re-encodes; it decodes the bytes that were signed
//! - A cryptographically valid signature over a payload claiming a different
//!   identity or digest is a failure, never a warning
//!
//! ## Quick Start
//!
//! ```rust
//! use simplesign_core::keys::Ed25519Signer;
//! use simplesign_core::{sign_image, verify_image, ClaimedIdentity, ContentDigest, Metadata};
//!
//! let signer = Ed25519Signer::from_secret_bytes(&[42u8; 32]);
//! let identity = ClaimedIdentity::parse("example.com/app")?;
//! let digest = ContentDigest::sha256_of(b"manifest bytes");
//!
//! let signed = sign_image(&signer, &identity, &digest, Metadata::new())?;
//! let metadata = verify_image(
//!     &signer.verifier(),
//!     signed.payload(),
//!     signed.signature(),
//!     &identity,
//!     &digest,
//! )?;
//! assert!(metadata.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
#![deny(missing_docs)]

/// Signing and verification capability traits.
pub mod capability;
/// Error types for core operations.
pub mod errors;
/// Built-in signing capabilities.
pub mod keys;
/// Sign orchestration.
pub mod sign;
/// Payload bytes paired with their detached signature.
pub mod signed;
/// Verify orchestration.
pub mod verify;

pub use capability::{CapabilityError, SignMessage, SignerVerifier, VerifySignature};
pub use errors::CoreError;
pub use sign::sign_image;
pub use signed::SignedPayload;
pub use simplesign_payload::{
    ClaimedIdentity, ContentDigest, DecodeOptions, Metadata, Number, PayloadError,
    SigningPayload, Value, MAX_METADATA_DEPTH, MAX_PAYLOAD_SIZE, PAYLOAD_TYPE,
};
pub use verify::{verify_image, ImageVerifier};
