//! Property-based tests - pragmatic approach testing core rendering guarantees
//!
//! These tests complement the integration tests by verifying properties
//! across a wide range of generated value graphs. Focus is on totality,
//! determinism, and the bounding guarantees.

use ocular::{
    inspect, inspect_with_options, remove_colors, InspectOptions, Sorted, Value,
};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::Number(n as f64)),
        any::<f64>().prop_map(Value::Number),
        "[ -~]{0,12}".prop_map(Value::String),
    ]
}

fn value_tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::array),
            prop::collection::vec(("[a-z_]{1,8}", inner.clone()), 0..6)
                .prop_map(Value::object),
            prop::collection::vec(inner, 0..4).prop_map(Value::set),
        ]
    })
}

proptest! {
    // Inspection is total: every graph renders to something.
    #[test]
    fn prop_output_never_empty(v in value_tree()) {
        prop_assert!(!inspect(&v).is_empty());
    }

    #[test]
    fn prop_deterministic(v in value_tree()) {
        prop_assert_eq!(inspect(&v), inspect(&v));
    }

    // Stripping ANSI codes from colored output recovers the plain rendering.
    #[test]
    fn prop_colors_are_presentation_only(v in value_tree()) {
        let colored = InspectOptions::new().with_colors(true);
        prop_assert_eq!(
            remove_colors(&inspect_with_options(&v, &colored)),
            inspect(&v)
        );
    }

    // With depth 0 and short leaves, nothing nests and nothing wraps.
    #[test]
    fn prop_depth_zero_is_single_line(v in value_tree()) {
        let wrapped = Value::object([("a", v)]);
        let shallow = InspectOptions::new().with_depth(Some(0));
        prop_assert!(!inspect_with_options(&wrapped, &shallow).contains('\n'));
    }

    #[test]
    fn prop_array_truncation_counts(len in 4..60usize) {
        let v = Value::array((0..len).map(|i| Value::Number(i as f64)).collect());
        let opts = InspectOptions::new().with_max_array_length(Some(3));
        let out = inspect_with_options(&v, &opts);
        let marker = format!("... {} more items", len - 3);
        prop_assert!(out.contains(&marker));
    }

    // Strings without embedded quotes always prefer single quotes.
    #[test]
    fn prop_single_quote_preference(s in "[a-zA-Z0-9 .]{0,20}") {
        let out = inspect(&Value::String(s));
        prop_assert!(out.starts_with('\'') && out.ends_with('\''));
    }

    // Lexicographic sorting makes output independent of insertion order.
    #[test]
    fn prop_sorted_ignores_insertion_order(
        entries in prop::collection::hash_map("[a-z]{1,6}", any::<i32>(), 1..8)
    ) {
        let shuffled: Vec<(String, Value)> = entries
            .iter()
            .map(|(k, n)| (k.clone(), Value::Number(f64::from(*n))))
            .collect();
        let mut ordered = shuffled.clone();
        ordered.sort_by(|a, b| a.0.cmp(&b.0));

        let opts = InspectOptions::new().with_sorted(Sorted::Lexicographic);
        prop_assert_eq!(
            inspect_with_options(&Value::object(shuffled), &opts),
            inspect_with_options(&Value::object(ordered), &opts)
        );
    }

    // A self-referencing object is labeled instead of recursed into.
    #[test]
    fn prop_cycles_are_labeled(v in value_tree()) {
        let holder = Value::object([("child", v)]);
        if let Value::Object(handle) = &holder {
            handle.set("me", holder.clone());
        }
        let out = inspect(&holder);
        prop_assert!(out.contains("<ref *1>"));
        prop_assert!(out.contains("[Circular *1]"));
    }
}
