//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Path expression parsing and canonical form
//! - Query determinism and wildcard fan-out order
//! - Duplicate grouping

use crate::duplicates::find_duplicates;
use crate::model::{Document, Node, Number};
use crate::path::{PathExpr, Segment};
use crate::query::{resolve, resolve_all};
use crate::test_support::rule;
use crate::engine::evaluate_document;
use confguard_types::RepoPath;
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

// ============================================================================
// Strategies
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,7}").expect("valid regex")
}

fn arb_segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        arb_name().prop_map(Segment::Field),
        (arb_name(), 0usize..20).prop_map(|(n, i)| Segment::Index(n, i)),
        arb_name().prop_map(Segment::Wildcard),
    ]
}

fn arb_expr() -> impl Strategy<Value = PathExpr> {
    prop::collection::vec(arb_segment(), 0..6).prop_map(PathExpr::from_segments)
}

fn arb_scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        any::<i64>().prop_map(|i| Node::Number(Number::Integer(i))),
        (-1.0e6f64..1.0e6).prop_map(|f| Node::Number(Number::Float(f))),
        "[a-c ]{0,4}".prop_map(Node::String),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Node::Sequence),
            prop::collection::btree_map("[a-d]", inner, 0..5).prop_map(Node::Mapping),
        ]
    })
}

/// Raw path strings, mostly over the same small key alphabet as `arb_node`.
fn arb_path_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"([a-d](\[[0-3*]\])?)(\.[a-d](\[[0-3*]\])?){0,3}|[a-d.\[\]*0-9]{0,8}")
        .expect("valid regex")
}

/// Build `{a: [{a: [...]}, ...]}` nested `depth` levels with the given lengths per level.
fn nested_arrays(lengths: &[usize]) -> Node {
    match lengths.split_first() {
        None => Node::String("leaf".to_string()),
        Some((len, rest)) => {
            let items = (0..*len).map(|_| nested_arrays(rest)).collect();
            let mut map = BTreeMap::new();
            map.insert("a".to_string(), Node::Sequence(items));
            Node::Mapping(map)
        }
    }
}

fn wildcard_path(depth: usize) -> String {
    vec!["a[*]"; depth].join(".")
}

// ============================================================================
// Path expressions
// ============================================================================

proptest! {
    #[test]
    fn canonical_form_parses_back(expr in arb_expr()) {
        let text = expr.to_string();
        let parsed = PathExpr::parse(&text).expect("canonical form parses");
        prop_assert_eq!(parsed, expr);
    }

    #[test]
    fn parsing_is_idempotent(text in arb_path_text()) {
        if let Ok(expr) = PathExpr::parse(&text) {
            let again = PathExpr::parse(&expr.to_string()).expect("canonical form parses");
            prop_assert_eq!(again, expr);
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

proptest! {
    #[test]
    fn resolve_is_deterministic(node in arb_node(), path in arb_path_text()) {
        let first = resolve(&node, &path);
        let second = resolve(&node, &path);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn resolve_all_agrees_with_resolve_without_wildcards(node in arb_node(), path in arb_path_text()) {
        prop_assume!(!path.contains('*'));
        let single = resolve(&node, &path);
        let all = resolve_all(&node, &path);
        match single {
            Some(value) => {
                prop_assert_eq!(all.len(), 1);
                prop_assert_eq!(all[0].value, value);
            }
            None => prop_assert!(all.is_empty()),
        }
    }

    #[test]
    fn concrete_paths_resolve_to_their_values(node in arb_node(), path in arb_path_text()) {
        for r in resolve_all(&node, &path) {
            prop_assert_eq!(resolve(&node, &r.path), Some(r.value));
        }
    }

    #[test]
    fn chained_wildcards_fan_out_in_nested_order(lengths in prop::collection::vec(1usize..4, 1..4)) {
        let node = nested_arrays(&lengths);
        let results = resolve_all(&node, &wildcard_path(lengths.len()));

        prop_assert_eq!(results.len(), lengths.iter().product::<usize>());

        let index_tuples: Vec<Vec<usize>> = results
            .iter()
            .map(|r| {
                r.path
                    .split('.')
                    .map(|seg| {
                        seg.trim_start_matches("a[")
                            .trim_end_matches(']')
                            .parse::<usize>()
                            .expect("index")
                    })
                    .collect()
            })
            .collect();
        let mut sorted = index_tuples.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(index_tuples, sorted);
    }

    #[test]
    fn empty_intermediate_array_yields_nothing(
        lengths in prop::collection::vec(1usize..4, 2..4),
        empty_at in 0usize..3,
    ) {
        let mut lengths = lengths;
        let at = empty_at % lengths.len();
        lengths[at] = 0;
        let node = nested_arrays(&lengths);
        prop_assert!(resolve_all(&node, &wildcard_path(lengths.len())).is_empty());
    }
}

// ============================================================================
// Duplicates and evaluation
// ============================================================================

proptest! {
    #[test]
    fn duplicate_groups_partition_repeated_keys(values in prop::collection::vec(0u8..5, 0..12)) {
        let items: Vec<Node> = values
            .iter()
            .map(|v| Node::from(json!({"id": v})))
            .collect();
        let groups = find_duplicates(&items, &["id"]);

        let mut seen = std::collections::BTreeSet::new();
        for group in &groups {
            prop_assert!(group.indices.len() > 1);
            prop_assert!(group.indices.windows(2).all(|w| w[0] < w[1]));
            let first = values[group.indices[0]];
            prop_assert!(group.indices.iter().all(|&i| values[i] == first));
            prop_assert!(seen.insert(first));
        }

        let repeated = values
            .iter()
            .filter(|v| values.iter().filter(|w| w == v).count() > 1)
            .count();
        let grouped: usize = groups.iter().map(|g| g.indices.len()).sum();
        prop_assert_eq!(grouped, repeated);
    }

    #[test]
    fn evaluation_is_deterministic(node in arb_node(), path in arb_path_text()) {
        let document = Document::new(node);
        let rules = vec![
            rule("P-1", "required_field", json!({"path": path.clone()})),
            rule("P-2", "field_type", json!({"path": path.clone(), "expected_type": "string"})),
            rule("P-3", "array_no_duplicates", json!({"path": path, "field": "a"})),
            rule("P-4", "no_trailing_whitespace", json!({})),
        ];
        let file = RepoPath::new("config.yaml");
        let first = evaluate_document(&document, &file, &rules);
        let second = evaluate_document(&document, &file, &rules);
        prop_assert_eq!(first, second);
    }
}
