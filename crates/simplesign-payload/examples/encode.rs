use simplesign_payload::{encode, ClaimedIdentity, ContentDigest, Metadata, SigningPayload, Value};

fn main() {
    let identity = ClaimedIdentity::parse("example.com/app").expect("valid identity");
    let digest = ContentDigest::sha256_of(b"{\"schemaVersion\":2}");
    let mut metadata = Metadata::new();
    metadata.insert("creator".into(), Value::from("encode-example"));

    let payload = match SigningPayload::new(identity, digest, metadata) {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("invalid payload: {}", err);
            std::process::exit(1);
        }
    };

    match encode(&payload) {
        Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
        Err(err) => {
            eprintln!("encoding failed: {}", err);
            std::process::exit(1);
        }
    }
}
