use regex::Regex;

use crate::errors::PayloadError;

newtype!(
    ClaimedIdentity,
    "What the signer claims the image to be, e.g. `registry.example/repo/app:1.2`.\n\n\
     The string is taken as already canonical. It is compared byte-for-byte and is \
     never case-folded or trimmed.",
    r"^[^\s/]+(/[^\s/]+)*$"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_tag_and_digest_references() {
        for reference in [
            "example.com/repo",
            "example.com:5000/team/app:v1",
            "example.com/app@sha256:d34db33fd34db33fd34db33fd34db33fd34db33fd34db33fd34db33fd34db33f",
        ] {
            assert!(ClaimedIdentity::parse(reference).is_ok(), "{reference}");
        }
    }

    #[test]
    fn parse_rejects_slash_and_whitespace_variants() {
        for reference in ["", "example.com/repo/", "/repo", "example.com//repo", "example.com/ repo"] {
            assert!(
                matches!(
                    ClaimedIdentity::parse(reference),
                    Err(PayloadError::PatternMismatch { field: "ClaimedIdentity", .. })
                ),
                "{reference:?}"
            );
        }
    }

    #[test]
    fn new_keeps_value_verbatim() {
        let identity = ClaimedIdentity::new("Example.COM/Repo");
        assert_eq!(identity.as_str(), "Example.COM/Repo");
        assert_eq!(identity.to_string(), "Example.COM/Repo");
    }
}
