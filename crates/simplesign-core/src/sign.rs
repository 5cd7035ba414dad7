use simplesign_payload::{ClaimedIdentity, ContentDigest, Metadata, SigningPayload};
use tracing::{debug, warn};

use crate::capability::SignMessage;
use crate::errors::CoreError;
use crate::signed::SignedPayload;

/// Signs a claim that `digest` is the manifest for `identity`.
///
/// Builds a [`SigningPayload`], encodes it, and calls `signer` exactly once on
/// the encoded bytes. The returned signature covers exactly the returned
/// payload bytes. On failure nothing is returned.
///
/// # Errors
///
/// - [`CoreError::Payload`] if the payload cannot be built or encoded
/// - [`CoreError::SigningFailed`] if the capability fails
pub fn sign_image<S: SignMessage + ?Sized>(
    signer: &S,
    identity: &ClaimedIdentity,
    digest: &ContentDigest,
    metadata: Metadata,
) -> Result<SignedPayload, CoreError> {
    let payload = SigningPayload::new(identity.clone(), digest.clone(), metadata)?;
    let bytes = payload.encode()?;

    let signature = signer.sign_message(&bytes).map_err(|err| {
        warn!(identity = %identity, digest = %digest, error = %err, "signing capability failed");
        CoreError::SigningFailed(err)
    })?;

    debug!(
        identity = %identity,
        digest = %digest,
        payload_len = bytes.len(),
        signature_len = signature.len(),
        "signed image payload"
    );
    Ok(SignedPayload::new(bytes, signature))
}
