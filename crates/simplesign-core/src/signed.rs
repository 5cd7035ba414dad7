use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::CoreError;

/// Encoded payload bytes and the detached signature computed over them.
///
/// Produced by [`sign_image`](crate::sign_image) and handed to transport as a
/// pair. The payload bytes are the ones that were signed; never re-encode them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    payload: Vec<u8>,
    signature: Vec<u8>,
}

impl SignedPayload {
    /// Pairs payload bytes with their signature.
    pub fn new(payload: Vec<u8>, signature: Vec<u8>) -> Self {
        Self { payload, signature }
    }

    /// Rebuilds a pair whose signature travelled as standard base64.
    pub fn from_base64(payload: Vec<u8>, signature_b64: &str) -> Result<Self, CoreError> {
        let signature = STANDARD.decode(signature_b64.trim())?;
        Ok(Self { payload, signature })
    }

    /// The signed payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The detached signature.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Signature as standard base64, the usual form for annotations.
    pub fn signature_base64(&self) -> String {
        STANDARD.encode(&self.signature)
    }

    /// Splits into `(payload, signature)`.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.payload, self.signature)
    }
}
