//! Signing payloads that bind a claimed container image identity to a
//! manifest digest.
//!
//! The wire format is the "simple signing" JSON document: a closed `critical`
//! section holding the payload type, the claimed identity and the manifest
//! digest, plus an open `optional` section of free-form metadata.
//!
//! Encoding is a plain serializer. Decoding is the trust boundary and is strict:
//! duplicate members, unknown critical members, missing fields, a wrong type
//! string and empty identity/digest values are all rejected with a distinct
//! [`PayloadError`].
//!
#![deny(missing_docs)]

#[macro_use]
mod newtype;

/// Encode and strict decode of the wire format.
pub mod codec;
/// Digest primitives.
pub mod digest;
/// Error types for payload construction and decoding.
pub mod errors;
/// Claimed identity newtype.
pub mod identity;
/// Decode limits.
pub mod options;
/// The signing payload value.
pub mod payload;
/// Metadata value type.
pub mod value;

mod node;
mod path;

pub use codec::{decode, decode_with_options, encode};
pub use digest::ContentDigest;
pub use errors::PayloadError;
pub use identity::ClaimedIdentity;
pub use options::{DecodeOptions, MAX_METADATA_DEPTH, MAX_PAYLOAD_SIZE};
pub use payload::{SigningPayload, PAYLOAD_TYPE};
pub use value::{Metadata, Number, Value};
