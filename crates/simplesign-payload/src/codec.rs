use serde::Serialize;

use crate::digest::ContentDigest;
use crate::errors::PayloadError;
use crate::identity::ClaimedIdentity;
use crate::node::{members_into_map, reject_duplicates, Node};
use crate::options::{DecodeOptions, MAX_PAYLOAD_SIZE};
use crate::path::Path;
use crate::payload::{SigningPayload, PAYLOAD_TYPE};
use crate::value::Metadata;

const CRITICAL: &str = "critical";
const OPTIONAL: &str = "optional";
const TYPE: &str = "type";
const IDENTITY: &str = "identity";
const IMAGE: &str = "image";
const DOCKER_REFERENCE: &str = "docker-reference";
const DOCKER_MANIFEST_DIGEST: &str = "docker-manifest-digest";

#[derive(Serialize)]
struct WirePayload<'a> {
    critical: WireCritical<'a>,
    optional: Option<&'a Metadata>,
}

#[derive(Serialize)]
struct WireCritical<'a> {
    identity: WireIdentity<'a>,
    image: WireImage<'a>,
    #[serde(rename = "type")]
    payload_type: &'a str,
}

#[derive(Serialize)]
struct WireIdentity<'a> {
    #[serde(rename = "docker-reference")]
    docker_reference: &'a str,
}

#[derive(Serialize)]
struct WireImage<'a> {
    #[serde(rename = "docker-manifest-digest")]
    docker_manifest_digest: &'a str,
}

/// Serializes a payload to its JSON wire form.
///
/// Empty metadata is written as `"optional": null`. Byte output is stable for a
/// given payload but verifiers must never re-encode and compare; they check the
/// bytes that were actually signed.
///
/// Anything this returns is accepted by [`decode`] with default options: the
/// same metadata nesting and size limits apply on both sides.
///
/// # Errors
///
/// [`PayloadError::Encoding`] if the metadata holds a non-finite number or is
/// nested deeper than [`MAX_METADATA_DEPTH`](crate::MAX_METADATA_DEPTH), or
/// if the encoded payload exceeds [`MAX_PAYLOAD_SIZE`].
pub fn encode(payload: &SigningPayload) -> Result<Vec<u8>, PayloadError> {
    let optional_path = Path::root().push_field(OPTIONAL);
    for (key, value) in payload.metadata() {
        value.check_encodable(&optional_path.push_field(key))?;
    }

    let metadata = payload.metadata();
    let wire = WirePayload {
        critical: WireCritical {
            identity: WireIdentity {
                docker_reference: payload.identity().as_str(),
            },
            image: WireImage {
                docker_manifest_digest: payload.digest().as_str(),
            },
            payload_type: PAYLOAD_TYPE,
        },
        optional: if metadata.is_empty() {
            None
        } else {
            Some(metadata)
        },
    };

    let bytes =
        serde_json::to_vec(&wire).map_err(|err| PayloadError::Encoding(err.to_string()))?;
    if bytes.len() > MAX_PAYLOAD_SIZE {
        return Err(PayloadError::Encoding(format!(
            "encoded payload size {} exceeds maximum {}",
            bytes.len(),
            MAX_PAYLOAD_SIZE
        )));
    }
    Ok(bytes)
}

/// Strictly decodes untrusted bytes with [`DecodeOptions::default`].
pub fn decode(bytes: &[u8]) -> Result<SigningPayload, PayloadError> {
    decode_with_options(bytes, &DecodeOptions::default())
}

/// Strictly decodes untrusted bytes into a [`SigningPayload`].
///
/// Rejections, checked per object level in this order: duplicate members,
/// unrecognized members, missing members, then value checks. `critical` and
/// the objects inside it are closed sets; `optional` accepts any member names
/// but still rejects duplicates at every depth. Nothing is trimmed or
/// case-folded.
///
/// # Errors
///
/// - [`PayloadError::PayloadTooLarge`] when `bytes` exceeds the size limit
/// - [`PayloadError::Malformed`] for invalid JSON, a wrongly shaped document or
///   metadata nested deeper than [`MAX_METADATA_DEPTH`](crate::MAX_METADATA_DEPTH)
/// - [`PayloadError::DuplicateField`], [`PayloadError::UnrecognizedField`],
///   [`PayloadError::MissingField`], [`PayloadError::TypeMismatch`],
///   [`PayloadError::EmptyField`] as described on each variant
pub fn decode_with_options(
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<SigningPayload, PayloadError> {
    if bytes.len() > options.max_payload_size {
        return Err(PayloadError::PayloadTooLarge {
            size: bytes.len(),
            max: options.max_payload_size,
        });
    }

    let root: Node =
        serde_json::from_slice(bytes).map_err(|err| PayloadError::Malformed(err.to_string()))?;
    let root_path = Path::root();
    let members = expect_object(root, &root_path)?;
    reject_duplicates(&members, &root_path)?;

    let mut critical = None;
    let mut optional = None;
    for (key, node) in members {
        match key.as_str() {
            CRITICAL => critical = Some(node),
            OPTIONAL => optional = Some(node),
            _ => {
                return Err(PayloadError::UnrecognizedField(
                    root_path.push_field(&key).to_string(),
                ))
            }
        }
    }

    let critical_path = root_path.push_field(CRITICAL);
    let critical = critical
        .ok_or_else(|| PayloadError::MissingField(critical_path.to_string()))?;
    let (identity, digest) = decode_critical(critical, &critical_path)?;

    let optional_path = root_path.push_field(OPTIONAL);
    let metadata = match optional {
        None | Some(Node::Null) => Metadata::new(),
        Some(Node::Object(members)) => members_into_map(members, &optional_path, 0)?,
        Some(other) => return Err(wrong_kind(&optional_path, "object or null", &other)),
    };

    SigningPayload::new(identity, digest, metadata)
}

fn decode_critical(
    node: Node,
    path: &Path,
) -> Result<(ClaimedIdentity, ContentDigest), PayloadError> {
    let members = expect_object(node, path)?;
    reject_duplicates(&members, path)?;

    let mut payload_type = None;
    let mut identity = None;
    let mut image = None;
    for (key, child) in members {
        match key.as_str() {
            TYPE => payload_type = Some(child),
            IDENTITY => identity = Some(child),
            IMAGE => image = Some(child),
            _ => return Err(PayloadError::UnrecognizedField(path.push_field(&key).to_string())),
        }
    }

    let type_path = path.push_field(TYPE);
    let identity_path = path.push_field(IDENTITY);
    let image_path = path.push_field(IMAGE);
    let payload_type =
        payload_type.ok_or_else(|| PayloadError::MissingField(type_path.to_string()))?;
    let identity =
        identity.ok_or_else(|| PayloadError::MissingField(identity_path.to_string()))?;
    let image = image.ok_or_else(|| PayloadError::MissingField(image_path.to_string()))?;

    match payload_type {
        Node::String(s) if s == PAYLOAD_TYPE => {}
        Node::String(s) => return Err(PayloadError::TypeMismatch { found: format!("{:?}", s) }),
        other => {
            return Err(PayloadError::TypeMismatch {
                found: other.kind().to_string(),
            })
        }
    }

    let reference = single_string_member(identity, &identity_path, DOCKER_REFERENCE)?;
    let digest = single_string_member(image, &image_path, DOCKER_MANIFEST_DIGEST)?;
    Ok((ClaimedIdentity::new(reference), ContentDigest::new(digest)))
}

/// Reads an object that must hold exactly `field` with a non-empty string value.
fn single_string_member(node: Node, path: &Path, field: &str) -> Result<String, PayloadError> {
    let members = expect_object(node, path)?;
    reject_duplicates(&members, path)?;

    let mut found = None;
    for (key, child) in members {
        if key != field {
            return Err(PayloadError::UnrecognizedField(path.push_field(&key).to_string()));
        }
        found = Some(child);
    }

    let field_path = path.push_field(field);
    match found {
        None => Err(PayloadError::MissingField(field_path.to_string())),
        Some(Node::String(s)) if s.is_empty() => {
            Err(PayloadError::EmptyField(field_path.to_string()))
        }
        Some(Node::String(s)) => Ok(s),
        Some(other) => Err(wrong_kind(&field_path, "string", &other)),
    }
}

fn expect_object(node: Node, path: &Path) -> Result<Vec<(String, Node)>, PayloadError> {
    match node {
        Node::Object(members) => Ok(members),
        other => Err(wrong_kind(path, "object", &other)),
    }
}

fn wrong_kind(path: &Path, expected: &str, found: &Node) -> PayloadError {
    PayloadError::Malformed(format!(
        "{}: expected {}, found {}",
        path,
        expected,
        found.kind()
    ))
}
