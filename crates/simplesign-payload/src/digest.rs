use regex::Regex;
use sha2::{Digest as Sha2Digest, Sha256};

use crate::errors::PayloadError;

newtype!(
    ContentDigest,
    "Manifest digest in `algorithm:hex` form (e.g. `sha256:d34d...`).\n\n\
     It must match the signed manifest exactly. The codec carries it as-is and \
     never checks it against any artifact.",
    r"^[a-z0-9]+([.+_-][a-z0-9]+)*:[a-f0-9]{32,}$"
);

impl ContentDigest {
    /// Computes the `sha256:<hex>` digest of `bytes`.
    pub fn sha256_of(bytes: &[u8]) -> Self {
        let hash = Sha256::digest(bytes);
        Self(format!("sha256:{}", hex::encode(hash)))
    }

    /// Algorithm component (`sha256` in `sha256:abcd`), if the value has one.
    pub fn algorithm(&self) -> Option<&str> {
        self.0.split_once(':').map(|(alg, _)| alg)
    }

    /// Encoded hash component (`abcd` in `sha256:abcd`), if the value has one.
    pub fn encoded(&self) -> Option<&str> {
        self.0.split_once(':').map(|(_, encoded)| encoded)
    }
}
