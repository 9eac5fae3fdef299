//! Integration tests for property matching: filter_where, find_where, pluck.

use std::collections::BTreeMap;

use consfold::algebra::{PropertyAccess, PropertySpec};
use consfold::sequence::Sequence;
use rstest::rstest;

fn record(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

fn shapes() -> Sequence<BTreeMap<String, String>> {
    Sequence::from_slice(&[
        record(&[("color", "purple"), ("shape", "circle")]),
        record(&[("color", "red"), ("shape", "triangle")]),
        record(&[("color", "blue"), ("shape", "circle")]),
    ])
}

fn spec(pairs: &[(&str, &str)]) -> PropertySpec<String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

// =============================================================================
// filter_where
// =============================================================================

#[rstest]
fn test_filter_where_returns_matches_in_original_order() {
    let circles = shapes().filter_where(&spec(&[("shape", "circle")]));
    assert_eq!(circles.len(), 2);
    assert_eq!(
        circles.get(0),
        Some(&record(&[("color", "purple"), ("shape", "circle")]))
    );
    assert_eq!(
        circles.get(1),
        Some(&record(&[("color", "blue"), ("shape", "circle")]))
    );
}

#[rstest]
fn test_filter_where_is_conjunctive() {
    let purple_circles = shapes().filter_where(&spec(&[
        ("shape", "circle"),
        ("color", "purple"),
    ]));
    assert_eq!(purple_circles.len(), 1);
    assert_eq!(
        purple_circles.head(),
        Some(&record(&[("color", "purple"), ("shape", "circle")]))
    );
}

#[rstest]
fn test_filter_where_empty_spec_matches_everything() {
    let all = shapes().filter_where(&PropertySpec::new());
    assert_eq!(all, shapes());
}

#[rstest]
fn test_filter_where_missing_property_matches_nothing() {
    let none = shapes().filter_where(&spec(&[("size", "large")]));
    assert!(none.is_empty());
}

// =============================================================================
// find_where
// =============================================================================

#[rstest]
fn test_find_where_returns_first_match_only() {
    let shapes = shapes();
    let first_circle = shapes.find_where(&spec(&[("shape", "circle")]));
    assert_eq!(
        first_circle,
        Some(&record(&[("color", "purple"), ("shape", "circle")]))
    );
}

#[rstest]
fn test_find_where_no_match_is_none() {
    assert_eq!(shapes().find_where(&spec(&[("shape", "square")])), None);
}

// =============================================================================
// pluck
// =============================================================================

#[rstest]
fn test_pluck_reads_the_named_property() {
    let colors = shapes().pluck("color");
    assert_eq!(
        colors,
        Sequence::from_slice(&[
            Some("purple".to_string()),
            Some("red".to_string()),
            Some("blue".to_string()),
        ])
    );
}

#[rstest]
fn test_pluck_absent_property_is_none_per_element() {
    let sizes = shapes().pluck("size");
    assert_eq!(sizes.len(), shapes().len());
    assert!(sizes.every(|size| size.is_none()));
}

// =============================================================================
// Custom PropertyAccess implementations
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    name: &'static str,
    role: &'static str,
}

impl PropertyAccess for Person {
    type Value = &'static str;

    fn property(&self, key: &str) -> Option<&Self::Value> {
        match key {
            "name" => Some(&self.name),
            "role" => Some(&self.role),
            _ => None,
        }
    }
}

#[rstest]
fn test_filter_where_over_a_record_type() {
    let people = Sequence::from_slice(&[
        Person { name: "moe", role: "maintainer" },
        Person { name: "larry", role: "contributor" },
        Person { name: "curly", role: "maintainer" },
    ]);

    let maintainers = people.filter_where(&PropertySpec::new().with("role", "maintainer"));
    assert_eq!(maintainers.len(), 2);
    assert_eq!(maintainers.pluck("name").get(0), Some(&Some("moe")));
    assert_eq!(maintainers.pluck("name").get(1), Some(&Some("curly")));
}
