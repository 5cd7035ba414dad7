use simplesign_payload::{
    decode_with_options, ClaimedIdentity, ContentDigest, DecodeOptions, Metadata,
};
use tracing::{debug, warn};

use crate::capability::VerifySignature;
use crate::errors::CoreError;
use crate::signed::SignedPayload;

/// Verifies signed image payloads against what the caller asked for.
///
/// Each call runs three steps and stops at the first failure:
/// 1. authenticity: the capability checks the signature over the raw bytes
/// 2. strict decode of those same bytes
/// 3. binding: exact string equality of identity and digest with the
///    caller's expectations
///
/// The binding step cannot be turned off.
#[derive(Debug, Clone)]
pub struct ImageVerifier<V> {
    verifier: V,
    options: DecodeOptions,
}

impl<V: VerifySignature> ImageVerifier<V> {
    /// Creates a verifier with default decode options.
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            options: DecodeOptions::default(),
        }
    }

    /// Replaces the decode options.
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Decode options in effect.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Verifies `signature` over `payload` and binds the payload to the
    /// expected identity and digest. Returns the payload metadata, which is
    /// informational only.
    ///
    /// # Errors
    ///
    /// - [`CoreError::SignatureInvalid`] if the capability rejects the signature
    /// - [`CoreError::Payload`] if the bytes fail strict decoding
    /// - [`CoreError::IdentityMismatch`] / [`CoreError::DigestMismatch`] if the
    ///   payload claims something other than what was expected
    pub fn verify(
        &self,
        payload: &[u8],
        signature: &[u8],
        expected_identity: &ClaimedIdentity,
        expected_digest: &ContentDigest,
    ) -> Result<Metadata, CoreError> {
        verify_with(
            &self.verifier,
            &self.options,
            payload,
            signature,
            expected_identity,
            expected_digest,
        )
    }

    /// [`verify`](Self::verify) over a [`SignedPayload`].
    pub fn verify_signed(
        &self,
        signed: &SignedPayload,
        expected_identity: &ClaimedIdentity,
        expected_digest: &ContentDigest,
    ) -> Result<Metadata, CoreError> {
        self.verify(
            signed.payload(),
            signed.signature(),
            expected_identity,
            expected_digest,
        )
    }
}

/// One-shot verification with default decode options.
///
/// See [`ImageVerifier::verify`].
pub fn verify_image<V: VerifySignature + ?Sized>(
    verifier: &V,
    payload: &[u8],
    signature: &[u8],
    expected_identity: &ClaimedIdentity,
    expected_digest: &ContentDigest,
) -> Result<Metadata, CoreError> {
    verify_with(
        verifier,
        &DecodeOptions::default(),
        payload,
        signature,
        expected_identity,
        expected_digest,
    )
}

fn verify_with<V: VerifySignature + ?Sized>(
    verifier: &V,
    options: &DecodeOptions,
    payload: &[u8],
    signature: &[u8],
    expected_identity: &ClaimedIdentity,
    expected_digest: &ContentDigest,
) -> Result<Metadata, CoreError> {
    verifier
        .verify_signature(signature, payload)
        .map_err(|err| {
            warn!(expected_identity = %expected_identity, error = %err, "payload signature rejected");
            CoreError::SignatureInvalid(err)
        })?;

    // An authentic but ambiguous payload still cannot be bound to a claim.
    let decoded = decode_with_options(payload, options).map_err(|err| {
        warn!(expected_identity = %expected_identity, error = %err, "signed payload failed strict decode");
        CoreError::from(err)
    })?;

    if decoded.identity() != expected_identity {
        warn!(
            expected = %expected_identity,
            found = %decoded.identity(),
            "signed identity does not match"
        );
        return Err(CoreError::IdentityMismatch {
            expected: expected_identity.clone(),
            found: decoded.identity().clone(),
        });
    }
    if decoded.digest() != expected_digest {
        warn!(
            expected = %expected_digest,
            found = %decoded.digest(),
            "signed digest does not match"
        );
        return Err(CoreError::DigestMismatch {
            expected: expected_digest.clone(),
            found: decoded.digest().clone(),
        });
    }

    debug!(
        identity = %expected_identity,
        digest = %expected_digest,
        metadata_entries = decoded.metadata().len(),
        "image signature verified"
    );
    Ok(decoded.into_metadata())
}
