//! Duplicate detection over sequences of mappings.

use std::collections::HashMap;

use crate::model::Node;

const KEY_SEPARATOR: char = '\u{1f}';

/// Elements of one sequence sharing the same derived key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub key_fields: Vec<String>,
    /// Field values joined with `|`.
    pub derived_value: String,
    /// Ascending element indices, always more than one.
    pub indices: Vec<usize>,
}

/// Group mapping elements by the values of `fields`.
///
/// Each field is a direct key of the element. Elements that are not mappings, or miss any of the
/// fields, are skipped. Groups come back in first-seen order.
pub fn find_duplicates<S: AsRef<str>>(sequence: &[Node], fields: &[S]) -> Vec<DuplicateGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, (String, Vec<usize>)> = HashMap::new();

    for (i, element) in sequence.iter().enumerate() {
        let Some(values) = key_values(element, fields) else {
            continue;
        };
        let key = values.join(&KEY_SEPARATOR.to_string());
        match groups.get_mut(&key) {
            Some((_, indices)) => indices.push(i),
            None => {
                order.push(key.clone());
                groups.insert(key, (values.join("|"), vec![i]));
            }
        }
    }

    let key_fields: Vec<String> = fields.iter().map(|f| f.as_ref().to_string()).collect();
    order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .filter(|(_, indices)| indices.len() > 1)
        .map(|(derived_value, indices)| DuplicateGroup {
            key_fields: key_fields.clone(),
            derived_value,
            indices,
        })
        .collect()
}

fn key_values<S: AsRef<str>>(element: &Node, fields: &[S]) -> Option<Vec<String>> {
    element.as_mapping()?;
    fields
        .iter()
        .map(|field| element.get(field.as_ref()).map(Node::canonical_text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seq(value: serde_json::Value) -> Vec<Node> {
        match Node::from(value) {
            Node::Sequence(items) => items,
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    #[test]
    fn single_field_group() {
        let items = seq(json!([{"n": "a"}, {"n": "b"}, {"n": "a"}]));
        let groups = find_duplicates(&items, &["n"]);
        assert_eq!(
            groups,
            vec![DuplicateGroup {
                key_fields: vec!["n".to_string()],
                derived_value: "a".to_string(),
                indices: vec![0, 2],
            }]
        );
    }

    #[test]
    fn multi_field_key_and_first_seen_order() {
        let items = seq(json!([
            {"m": "GET", "p": "/b"},
            {"m": "GET", "p": "/a"},
            {"m": "GET", "p": "/b"},
            {"m": "POST", "p": "/a"},
            {"m": "GET", "p": "/a"}
        ]));
        let groups = find_duplicates(&items, &["m", "p"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].derived_value, "GET|/b");
        assert_eq!(groups[0].indices, vec![0, 2]);
        assert_eq!(groups[1].derived_value, "GET|/a");
        assert_eq!(groups[1].indices, vec![1, 4]);
    }

    #[test]
    fn skips_non_mappings_and_missing_fields() {
        let items = seq(json!(["a", {"n": "a"}, {"other": 1}, {"n": "a", "m": 1}, 3]));
        let groups = find_duplicates(&items, &["n"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].indices, vec![1, 3]);
    }

    #[test]
    fn separator_prevents_key_collisions() {
        let items = seq(json!([{"a": "x|y", "b": "z"}, {"a": "x", "b": "y|z"}]));
        assert!(find_duplicates(&items, &["a", "b"]).is_empty());
    }

    #[test]
    fn field_names_are_literal_keys() {
        let items = seq(json!([
            {"app.kubernetes.io/name": "web"},
            {"app.kubernetes.io/name": "web"},
            {"app": {"kubernetes": {"io/name": "web"}}}
        ]));
        let groups = find_duplicates(&items, &["app.kubernetes.io/name"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].indices, vec![0, 1]);
    }

    #[test]
    fn numbers_and_strings_share_canonical_text() {
        let items = seq(json!([{"id": 1}, {"id": "1"}, {"id": 2}]));
        let groups = find_duplicates(&items, &["id"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].indices, vec![0, 1]);
    }
}
