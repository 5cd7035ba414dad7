use std::collections::BTreeMap;

use serde_json::json;
use simplesign_payload::{
    decode, encode, ClaimedIdentity, ContentDigest, Metadata, Number, SigningPayload, Value,
    PAYLOAD_TYPE,
};

const DIGEST: &str = "sha256:d34db33fd34db33fd34db33fd34db33fd34db33fd34db33fd34db33fd34db33f";

fn make_payload(metadata: Metadata) -> SigningPayload {
    SigningPayload::new(
        ClaimedIdentity::parse("example.com/ecdsa").unwrap(),
        ContentDigest::parse(DIGEST).unwrap(),
        metadata,
    )
    .unwrap()
}

#[test]
fn encoded_payload_matches_wire_layout() {
    let mut metadata = Metadata::new();
    metadata.insert("creator".into(), Value::from("ECDSA"));

    let bytes = encode(&make_payload(metadata)).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        parsed,
        json!({
            "critical": {
                "identity": { "docker-reference": "example.com/ecdsa" },
                "image": { "docker-manifest-digest": DIGEST },
                "type": "cosign container image signature"
            },
            "optional": { "creator": "ECDSA" }
        })
    );
}

#[test]
fn encoding_is_stable_for_equal_payloads() {
    let mut a = Metadata::new();
    a.insert("b".into(), Value::from(1_i64));
    a.insert("a".into(), Value::from(true));
    let mut b = Metadata::new();
    b.insert("a".into(), Value::from(true));
    b.insert("b".into(), Value::from(1_i64));

    assert_eq!(encode(&make_payload(a)).unwrap(), encode(&make_payload(b)).unwrap());
}

#[test]
fn metadata_survives_roundtrip_unchanged() {
    let mut nested = BTreeMap::new();
    nested.insert("list".to_string(), Value::from(vec![Value::Null, Value::from(-3_i64)]));
    nested.insert("whole".to_string(), Value::from(2.0));

    let mut metadata = Metadata::new();
    metadata.insert("creator".into(), Value::from("x"));
    metadata.insert("n".into(), Value::from(6.022e23));
    metadata.insert("Floaty McFloatface".into(), Value::from(6.022e23));
    metadata.insert("nested".into(), Value::Object(nested));
    metadata.insert("unicode".into(), Value::from("caf\u{e9} \u{1f980}"));

    let payload = make_payload(metadata.clone());
    let decoded = decode(&encode(&payload).unwrap()).unwrap();

    assert_eq!(decoded, payload);
    assert_eq!(decoded.payload_type(), PAYLOAD_TYPE);
    assert_eq!(decoded.metadata(), &metadata);
    assert_eq!(
        decoded.metadata()["n"],
        Value::Number(Number::Float(6.022e23))
    );
}

#[test]
fn payload_from_reference_producer_decodes() {
    // `optional: null` is what producers emit for absent annotations.
    let bytes = format!(
        r#"{{"critical":{{"identity":{{"docker-reference":"example.com/rsa"}},"image":{{"docker-manifest-digest":"{DIGEST}"}},"type":"cosign container image signature"}},"optional":null}}"#
    );
    let decoded = decode(bytes.as_bytes()).unwrap();
    assert_eq!(decoded.identity().as_str(), "example.com/rsa");
    assert_eq!(decoded.digest().as_str(), DIGEST);
    assert!(decoded.metadata().is_empty());
}

#[test]
fn decode_keeps_identity_verbatim() {
    let bytes = br#"{"critical":{"identity":{"docker-reference":" Example.com/Repo "},"image":{"docker-manifest-digest":"SHA256:ABC"},"type":"cosign container image signature"}}"#;
    let decoded = decode(bytes).unwrap();
    assert_eq!(decoded.identity().as_str(), " Example.com/Repo ");
    assert_eq!(decoded.digest().as_str(), "SHA256:ABC");
}
