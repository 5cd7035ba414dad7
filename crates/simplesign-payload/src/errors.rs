use thiserror::Error;

/// Errors raised while building, encoding or decoding a signing payload.
///
/// Every decode-time variant is a permanent rejection. Callers must treat each
/// of them as "verification failed".
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload could not be serialized.
    #[error("cannot encode payload: {0}")]
    Encoding(String),
    /// The bytes are not a well-formed JSON document of the expected shape.
    #[error("malformed payload: {0}")]
    Malformed(String),
    /// A mandatory field is absent.
    #[error("missing field {0}")]
    MissingField(String),
    /// A member name appears more than once in the same object.
    #[error("duplicate field {0}")]
    DuplicateField(String),
    /// A member outside the closed set of known fields.
    #[error("unrecognized field {0}")]
    UnrecognizedField(String),
    /// `critical.type` is not the recognized payload type.
    #[error("unexpected payload type {found}")]
    TypeMismatch {
        /// JSON rendering of the value that was found.
        found: String,
    },
    /// The identity or digest is an empty string.
    #[error("field {0} is empty")]
    EmptyField(String),
    /// Input exceeds the configured size limit.
    #[error("payload size {size} exceeds maximum {max}")]
    PayloadTooLarge {
        /// Actual payload size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max: usize,
    },
    /// A value rejected by a newtype's `parse` pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
