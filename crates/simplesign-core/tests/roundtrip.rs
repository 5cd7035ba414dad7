use simplesign_core::keys::{EcdsaP256Signer, Ed25519Signer};
use simplesign_core::{
    sign_image, verify_image, ClaimedIdentity, ContentDigest, CoreError, Metadata, SignerVerifier,
    Value,
};

const VALID_DIGEST: &str =
    "sha256:d34db33fd34db33fd34db33fd34db33fd34db33fd34db33fd34db33fd34db33f";

struct Case {
    desc: &'static str,
    signer: Box<dyn SignerVerifier>,
    identity: &'static str,
    claims: Metadata,
}

fn cases() -> Vec<Case> {
    let mut ecdsa_claims = Metadata::new();
    ecdsa_claims.insert("creator".into(), Value::from("ECDSA"));
    ecdsa_claims.insert("optional".into(), Value::from("extras"));

    let mut ed25519_claims = Metadata::new();
    ed25519_claims.insert("creator".into(), Value::from("Ed25519"));
    ed25519_claims.insert("Floaty McFloatface".into(), Value::from(6.022e23));

    vec![
        Case {
            desc: "ECDSA",
            signer: Box::new(EcdsaP256Signer::from_secret_bytes(&[7u8; 32]).unwrap()),
            identity: "example.com/ecdsa",
            claims: ecdsa_claims,
        },
        Case {
            desc: "Ed25519",
            signer: Box::new(Ed25519Signer::from_secret_bytes(&[42u8; 32])),
            identity: "example.com/ed25519",
            claims: ed25519_claims,
        },
    ]
}

#[test]
fn test_provider_roundtrip() {
    let digest = ContentDigest::parse(VALID_DIGEST).unwrap();

    for case in cases() {
        let identity = ClaimedIdentity::parse(case.identity).unwrap();
        let signed = sign_image(&case.signer, &identity, &digest, case.claims.clone())
            .unwrap_or_else(|e| panic!("{}: sign_image failed: {e}", case.desc));

        let metadata = verify_image(
            &case.signer,
            signed.payload(),
            signed.signature(),
            &identity,
            &digest,
        )
        .unwrap_or_else(|e| panic!("{}: verification failed: {e}", case.desc));

        assert_eq!(metadata, case.claims, "{}: claims altered in roundtrip", case.desc);
    }
}

#[test]
fn test_ecdsa_end_to_end_returns_metadata() {
    let signer = EcdsaP256Signer::from_secret_bytes(&[7u8; 32]).unwrap();
    let identity = ClaimedIdentity::parse("example.com/ecdsa").unwrap();
    let digest = ContentDigest::parse(VALID_DIGEST).unwrap();
    let mut claims = Metadata::new();
    claims.insert("creator".into(), Value::from("ECDSA"));

    let signed = sign_image(&signer, &identity, &digest, claims).unwrap();
    let metadata = verify_image(
        &signer.verifier(),
        signed.payload(),
        signed.signature(),
        &identity,
        &digest,
    )
    .unwrap();

    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata["creator"].as_str(), Some("ECDSA"));
}

#[test]
fn test_every_single_byte_flip_fails_verification() {
    for case in cases() {
        let identity = ClaimedIdentity::parse(case.identity).unwrap();
        let digest = ContentDigest::parse(VALID_DIGEST).unwrap();
        let signed = sign_image(&case.signer, &identity, &digest, case.claims).unwrap();

        for idx in 0..signed.payload().len() {
            let mut tampered = signed.payload().to_vec();
            tampered[idx] ^= 0x01;

            let result = verify_image(
                &case.signer,
                &tampered,
                signed.signature(),
                &identity,
                &digest,
            );
            assert!(
                matches!(result, Err(CoreError::SignatureInvalid(_))),
                "{}: flipping byte {idx} was not rejected: {result:?}",
                case.desc
            );
        }
    }
}

#[test]
fn test_signature_from_another_key_is_rejected() {
    let signer = Ed25519Signer::from_secret_bytes(&[42u8; 32]);
    let other = Ed25519Signer::from_secret_bytes(&[43u8; 32]);
    let identity = ClaimedIdentity::parse("example.com/repo").unwrap();
    let digest = ContentDigest::parse(VALID_DIGEST).unwrap();

    let signed = sign_image(&signer, &identity, &digest, Metadata::new()).unwrap();
    let result = verify_image(
        &other.verifier(),
        signed.payload(),
        signed.signature(),
        &identity,
        &digest,
    );
    assert!(matches!(result, Err(CoreError::SignatureInvalid(_))));
}

#[test]
fn test_base64_transport_roundtrip() {
    let signer = EcdsaP256Signer::from_secret_bytes(&[11u8; 32]).unwrap();
    let identity = ClaimedIdentity::parse("example.com/repo:v1").unwrap();
    let digest = ContentDigest::sha256_of(b"manifest");

    let signed = sign_image(&signer, &identity, &digest, Metadata::new()).unwrap();
    let restored = simplesign_core::SignedPayload::from_base64(
        signed.payload().to_vec(),
        &signed.signature_base64(),
    )
    .unwrap();

    let verifier = simplesign_core::ImageVerifier::new(signer.verifier());
    assert!(verifier.verify_signed(&restored, &identity, &digest).unwrap().is_empty());
}
