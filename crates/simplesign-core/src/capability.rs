use std::sync::Arc;

/// Error reported by a signing or verification backend.
pub type CapabilityError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Produces a detached signature over exactly the bytes given.
pub trait SignMessage {
    /// Signs `message`, returning the encoded signature.
    fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, CapabilityError>;
}

/// Checks a detached signature against a message.
pub trait VerifySignature {
    /// Returns `Ok(())` only if `signature` is valid for `message`.
    fn verify_signature(&self, signature: &[u8], message: &[u8]) -> Result<(), CapabilityError>;
}

/// A backend that can both sign and verify.
pub trait SignerVerifier: SignMessage + VerifySignature {}

impl<T: SignMessage + VerifySignature + ?Sized> SignerVerifier for T {}

macro_rules! forward_capabilities {
    ($($wrapper:ty),*) => {
        $(
            impl<T: SignMessage + ?Sized> SignMessage for $wrapper {
                fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, CapabilityError> {
                    (**self).sign_message(message)
                }
            }

            impl<T: VerifySignature + ?Sized> VerifySignature for $wrapper {
                fn verify_signature(
                    &self,
                    signature: &[u8],
                    message: &[u8],
                ) -> Result<(), CapabilityError> {
                    (**self).verify_signature(signature, message)
                }
            }
        )*
    };
}

forward_capabilities!(&T, Box<T>, Arc<T>);
