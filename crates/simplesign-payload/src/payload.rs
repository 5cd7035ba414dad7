use crate::digest::ContentDigest;
use crate::errors::PayloadError;
use crate::identity::ClaimedIdentity;
use crate::value::Metadata;

/// Value of `critical.type` in every payload this crate produces or accepts.
pub const PAYLOAD_TYPE: &str = "cosign container image signature";

/// The unit that gets signed: a claimed identity bound to a manifest digest,
/// plus metadata that is not part of the binding.
///
/// Immutable once built. Only its encoded bytes are meant to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SigningPayload {
    identity: ClaimedIdentity,
    digest: ContentDigest,
    metadata: Metadata,
}

impl SigningPayload {
    /// Builds a payload; identity and digest must be non-empty.
    pub fn new(
        identity: ClaimedIdentity,
        digest: ContentDigest,
        metadata: Metadata,
    ) -> Result<Self, PayloadError> {
        if identity.is_empty() {
            return Err(PayloadError::EmptyField(
                "critical.identity.docker-reference".to_string(),
            ));
        }
        if digest.is_empty() {
            return Err(PayloadError::EmptyField(
                "critical.image.docker-manifest-digest".to_string(),
            ));
        }
        Ok(Self {
            identity,
            digest,
            metadata,
        })
    }

    /// Payload type discriminator; always [`PAYLOAD_TYPE`].
    pub fn payload_type(&self) -> &'static str {
        PAYLOAD_TYPE
    }

    /// Identity the signer claims the image to be.
    pub fn identity(&self) -> &ClaimedIdentity {
        &self.identity
    }

    /// Manifest digest being signed.
    pub fn digest(&self) -> &ContentDigest {
        &self.digest
    }

    /// Free-form metadata from the `optional` section.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Consumes the payload, returning its metadata.
    pub fn into_metadata(self) -> Metadata {
        self.metadata
    }

    /// Shorthand for [`crate::encode`].
    pub fn encode(&self) -> Result<Vec<u8>, PayloadError> {
        crate::codec::encode(self)
    }
}
