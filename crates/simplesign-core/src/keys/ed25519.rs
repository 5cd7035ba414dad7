use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};

use crate::capability::{CapabilityError, SignMessage, VerifySignature};

/// Ed25519 signer; signatures are the raw 64-byte encoding.
#[derive(Clone)]
pub struct Ed25519Signer {
    signing_key: SigningKey,
}

impl Ed25519Signer {
    /// Wraps an existing signing key.
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Creates a signer from a 32-byte secret seed.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Self {
        Self::new(SigningKey::from_bytes(bytes))
    }

    /// Verification half of this key.
    pub fn verifier(&self) -> Ed25519Verifier {
        Ed25519Verifier::new(self.signing_key.verifying_key())
    }
}

impl SignMessage for Ed25519Signer {
    fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, CapabilityError> {
        let signature = self.signing_key.try_sign(message)?;
        Ok(signature.to_bytes().to_vec())
    }
}

impl VerifySignature for Ed25519Signer {
    fn verify_signature(&self, signature: &[u8], message: &[u8]) -> Result<(), CapabilityError> {
        self.verifier().verify_signature(signature, message)
    }
}

impl std::fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Signer")
            .field("verifying_key", &self.signing_key.verifying_key())
            .finish_non_exhaustive()
    }
}

/// Verifies Ed25519 signatures with strict (non-malleable) checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Verifier {
    verifying_key: VerifyingKey,
}

impl Ed25519Verifier {
    /// Wraps an existing verifying key.
    pub fn new(verifying_key: VerifyingKey) -> Self {
        Self { verifying_key }
    }

    /// Loads a verifier from a raw 32-byte public key.
    pub fn from_public_key_bytes(bytes: &[u8]) -> Result<Self, CapabilityError> {
        let bytes: &[u8; 32] = bytes
            .try_into()
            .map_err(|_| format!("ed25519 public key must be 32 bytes, got {}", bytes.len()))?;
        Ok(Self::new(VerifyingKey::from_bytes(bytes)?))
    }

    /// Raw 32-byte public key.
    pub fn to_public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }
}

impl VerifySignature for Ed25519Verifier {
    fn verify_signature(&self, signature: &[u8], message: &[u8]) -> Result<(), CapabilityError> {
        let signature = Signature::from_slice(signature)?;
        self.verifying_key.verify_strict(message, &signature)?;
        Ok(())
    }
}
