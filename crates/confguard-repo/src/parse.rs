use anyhow::Context;
use camino::Utf8Path;
use confguard_domain::{Document, Node, Number};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Parse YAML text into a document. Empty text is a null document.
pub fn parse_document(text: &str) -> anyhow::Result<Document> {
    if text.trim().is_empty() {
        return Ok(Document::new(Node::Null));
    }
    let mut value: Value = serde_yaml::from_str(text).context("parse YAML")?;
    value.apply_merge().context("resolve YAML merge keys")?;
    Ok(Document::new(to_node(value)))
}

pub fn read_document(path: &Utf8Path) -> anyhow::Result<Document> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    parse_document(&text).with_context(|| format!("parse {path}"))
}

fn to_node(value: Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => Node::Number(match n.as_i64() {
            Some(i) => Number::Integer(i),
            None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::String(s) => Node::String(s),
        Value::Sequence(items) => Node::Sequence(items.into_iter().map(to_node).collect()),
        Value::Mapping(map) => {
            let entries: BTreeMap<String, Node> = map
                .into_iter()
                .map(|(k, v)| (key_text(k), to_node(v)))
                .collect();
            Node::Mapping(entries)
        }
        Value::Tagged(tagged) => to_node(tagged.value),
    }
}

/// Mapping keys become strings: scalars by their canonical text, compounds as compact JSON.
fn key_text(key: Value) -> String {
    match key {
        Value::String(s) => s,
        Value::Tagged(tagged) => key_text(tagged.value),
        other => to_node(other).canonical_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_scalars_and_collections() {
        let doc = parse_document(
            r#"
server:
  port: 8080
  ratio: 0.5
  tls: true
  name: api
  empty: ~
routes:
  - name: a
  - name: b
"#,
        )
        .expect("parse");
        assert_eq!(doc.get_number("server.port"), Some(8080.0));
        assert_eq!(
            doc.resolve("server.port"),
            Some(&Node::Number(Number::Integer(8080)))
        );
        assert_eq!(doc.get_number("server.ratio"), Some(0.5));
        assert_eq!(doc.get_bool("server.tls"), Some(true));
        assert_eq!(doc.get_string("server.name"), Some("api"));
        assert_eq!(doc.resolve("server.empty"), Some(&Node::Null));
        assert_eq!(doc.get_string("routes[1].name"), Some("b"));
    }

    #[test]
    fn normalizes_non_string_keys() {
        let doc = parse_document("1: one\ntrue: yes\nnull: nothing\n1.5: x\n").expect("parse");
        let map = doc.root().as_mapping().expect("mapping");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["1", "1.5", "null", "true"]);
    }

    #[test]
    fn drops_tags_and_applies_merge_keys() {
        let doc = parse_document(
            r#"
base: &base
  timeout: 30
service:
  <<: *base
  name: !custom api
"#,
        )
        .expect("parse");
        assert_eq!(doc.get_number("service.timeout"), Some(30.0));
        assert_eq!(doc.get_string("service.name"), Some("api"));
    }

    #[test]
    fn empty_text_is_null_document() {
        assert_eq!(parse_document("").expect("parse").root(), &Node::Null);
        assert_eq!(parse_document("  \n").expect("parse").root(), &Node::Null);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(parse_document("a: [1, 2").is_err());
        assert!(parse_document("- a\nb: c\n").is_err());
    }
}
