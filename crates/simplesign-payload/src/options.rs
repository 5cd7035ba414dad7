/// Maximum accepted payload size: 16 MiB.
pub const MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Maximum container nesting inside a single metadata value.
///
/// A scalar is depth 0 and `[[1]]` is depth 2. Both `encode` and `decode`
/// enforce it, well inside the JSON parser's own recursion limit.
pub const MAX_METADATA_DEPTH: usize = 64;

/// Limits applied by [`decode_with_options`](crate::decode_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Inputs longer than this many bytes are rejected before parsing.
    pub max_payload_size: usize,
}

impl DecodeOptions {
    /// Returns options with a custom size limit.
    pub fn with_max_payload_size(max_payload_size: usize) -> Self {
        Self { max_payload_size }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD_SIZE,
        }
    }
}
