use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePublicKey, EncodePublicKey};

use crate::capability::{CapabilityError, SignMessage, VerifySignature};

/// ECDSA over NIST P-256 with SHA-256; signatures are ASN.1 DER.
#[derive(Clone)]
pub struct EcdsaP256Signer {
    signing_key: SigningKey,
}

impl EcdsaP256Signer {
    /// Wraps an existing signing key.
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Loads a signer from a 32-byte big-endian secret scalar.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, CapabilityError> {
        Ok(Self::new(SigningKey::from_slice(bytes)?))
    }

    /// Verification half of this key.
    pub fn verifier(&self) -> EcdsaP256Verifier {
        EcdsaP256Verifier::new(VerifyingKey::from(&self.signing_key))
    }
}

impl SignMessage for EcdsaP256Signer {
    fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, CapabilityError> {
        let signature: Signature = self.signing_key.try_sign(message)?;
        Ok(signature.to_der().as_bytes().to_vec())
    }
}

impl VerifySignature for EcdsaP256Signer {
    fn verify_signature(&self, signature: &[u8], message: &[u8]) -> Result<(), CapabilityError> {
        self.verifier().verify_signature(signature, message)
    }
}

impl std::fmt::Debug for EcdsaP256Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcdsaP256Signer")
            .field("verifying_key", &self.verifier())
            .finish_non_exhaustive()
    }
}

/// Verifies DER-encoded ECDSA P-256/SHA-256 signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaP256Verifier {
    verifying_key: VerifyingKey,
}

impl EcdsaP256Verifier {
    /// Wraps an existing verifying key.
    pub fn new(verifying_key: VerifyingKey) -> Self {
        Self { verifying_key }
    }

    /// Loads a verifier from a DER-encoded SubjectPublicKeyInfo.
    pub fn from_public_key_der(der: &[u8]) -> Result<Self, CapabilityError> {
        Ok(Self::new(VerifyingKey::from_public_key_der(der)?))
    }

    /// DER-encoded SubjectPublicKeyInfo for this key.
    pub fn to_public_key_der(&self) -> Result<Vec<u8>, CapabilityError> {
        Ok(self.verifying_key.to_public_key_der()?.as_bytes().to_vec())
    }
}

impl VerifySignature for EcdsaP256Verifier {
    fn verify_signature(&self, signature: &[u8], message: &[u8]) -> Result<(), CapabilityError> {
        let signature = Signature::from_der(signature)?;
        self.verifying_key.verify(message, &signature)?;
        Ok(())
    }
}
