//! Parse tree that keeps every object member, duplicates included.
//!
//! `serde_json::Value` collapses repeated keys (last one wins), which is the
//! exact ambiguity the strict decoder must detect. [`Node`] records members in
//! document order so the decoder can see them all.

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::errors::PayloadError;
use crate::path::Path;
use crate::value::{enter_container, Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl Node {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }

    /// Converts into a metadata value found at nesting `depth`, rejecting
    /// duplicate members and excessive nesting.
    pub(crate) fn into_value(self, path: &Path, depth: usize) -> Result<Value, PayloadError> {
        match self {
            Node::Null => Ok(Value::Null),
            Node::Bool(b) => Ok(Value::Bool(b)),
            Node::Number(n) => Ok(Value::Number(n)),
            Node::String(s) => Ok(Value::String(s)),
            Node::Array(items) => {
                let depth = enter_container(depth, path).map_err(PayloadError::Malformed)?;
                items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| item.into_value(&path.push_index(idx), depth))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }
            Node::Object(members) => {
                let depth = enter_container(depth, path).map_err(PayloadError::Malformed)?;
                members_into_map(members, path, depth).map(Value::Object)
            }
        }
    }
}

/// Ensures every member name in `members` is unique.
pub(crate) fn reject_duplicates(
    members: &[(String, Node)],
    path: &Path,
) -> Result<(), PayloadError> {
    let mut seen = HashSet::with_capacity(members.len());
    for (key, _) in members {
        if !seen.insert(key.as_str()) {
            return Err(PayloadError::DuplicateField(path.push_field(key).to_string()));
        }
    }
    Ok(())
}

/// Converts the members of an object at nesting `depth` into a map.
pub(crate) fn members_into_map(
    members: Vec<(String, Node)>,
    path: &Path,
    depth: usize,
) -> Result<BTreeMap<String, Value>, PayloadError> {
    reject_duplicates(&members, path)?;
    let mut map = BTreeMap::new();
    for (key, child) in members {
        let value = child.into_value(&path.push_field(&key), depth)?;
        map.insert(key, value);
    }
    Ok(map)
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Number(Number::Int(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Node, E> {
        Ok(Node::Number(match i64::try_from(v) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::Float(v as f64),
        }))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Node, E> {
        Ok(Node::Number(Number::Float(v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Node, E> {
        Ok(Node::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Node, E> {
        Ok(Node::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Node>()? {
            items.push(item);
        }
        Ok(Node::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut members = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, Node>()? {
            members.push((key, value));
        }
        Ok(Node::Object(members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_duplicate_members_in_order() {
        let node: Node = serde_json::from_str(r#"{"a":1,"b":true,"a":"x"}"#).unwrap();
        assert_eq!(
            node,
            Node::Object(vec![
                ("a".to_string(), Node::Number(Number::Int(1))),
                ("b".to_string(), Node::Bool(true)),
                ("a".to_string(), Node::String("x".to_string())),
            ])
        );
    }

    #[test]
    fn escaped_keys_collide_after_unescaping() {
        let node: Node = serde_json::from_str(r#"{"type":1,"\u0074ype":2}"#).unwrap();
        let Node::Object(members) = node else {
            panic!("expected object");
        };
        let err = reject_duplicates(&members, &Path::root().push_field("critical")).unwrap_err();
        assert!(matches!(err, PayloadError::DuplicateField(p) if p == "critical.type"));
    }

    #[test]
    fn deep_metadata_is_rejected_after_parsing() {
        let json = format!("{}1{}", "[".repeat(65), "]".repeat(65));
        let node: Node = serde_json::from_str(&json).unwrap();
        let err = node
            .into_value(&Path::root().push_field("optional").push_field("deep"), 0)
            .unwrap_err();
        assert!(matches!(err, PayloadError::Malformed(msg) if msg.contains("optional.deep")));
    }

    #[test]
    fn large_unsigned_becomes_float() {
        let node: Node = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(node, Node::Number(Number::Float(_))));
    }
}
