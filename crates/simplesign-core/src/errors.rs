use simplesign_payload::{ClaimedIdentity, ContentDigest, PayloadError};
use thiserror::Error;

use crate::capability::CapabilityError;

/// Core error types.
///
/// Decode and binding failures are permanent. Downstream policy must treat
/// every variant as "verification failed".
#[derive(Error, Debug)]
pub enum CoreError {
    /// Payload construction, encoding or strict decoding failed.
    #[error("payload rejected: {0}")]
    Payload(#[from] PayloadError),
    /// The signing capability refused or failed to sign.
    #[error("signing failed: {0}")]
    SigningFailed(#[source] CapabilityError),
    /// The verification capability rejected the signature.
    #[error("signature invalid: {0}")]
    SignatureInvalid(#[source] CapabilityError),
    /// A transported signature was not valid base64.
    #[error("signature is not valid base64: {0}")]
    SignatureEncoding(#[from] base64::DecodeError),
    /// The signed identity is not the one the caller asked for.
    #[error("identity mismatch: expected {expected}, payload claims {found}")]
    IdentityMismatch {
        /// Identity the caller expected.
        expected: ClaimedIdentity,
        /// Identity found in the signed payload.
        found: ClaimedIdentity,
    },
    /// The signed digest is not the one the caller asked for.
    #[error("digest mismatch: expected {expected}, payload claims {found}")]
    DigestMismatch {
        /// Digest the caller expected.
        expected: ContentDigest,
        /// Digest found in the signed payload.
        found: ContentDigest,
    },
}
