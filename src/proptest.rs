//! Proptest support
//!
//! Generate arbitrary element trees to test properties of code that
//! compares XML.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xmldiff = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::{Content, Element};

const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "x:d"];
const ATTRIBUTE_NAMES: &[&str] = &["p", "q", "r", "x:s"];
// short and long values, around the abbreviation threshold
const ATTRIBUTE_VALUE: &str = "[a-z0-9]{0,6}";
const TEXT: &str = "[ \n]{0,2}[a-z]{0,5}[ \n]{0,2}";

fn arb_attribute() -> impl Strategy<Value = (String, String)> {
    (prop::sample::select(ATTRIBUTE_NAMES), ATTRIBUTE_VALUE)
        .prop_map(|(name, value)| (name.to_string(), value))
}

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(arb_attribute(), 0..4).prop_map(|attributes| unduplicate(&attributes))
}

fn unduplicate(attributes: &[(String, String)]) -> Vec<(String, String)> {
    let mut seen = HashSet::default();
    attributes
        .iter()
        .filter(|(name, _)| seen.insert(name.clone()))
        .cloned()
        .collect()
}

fn arb_leaf() -> impl Strategy<Value = Element> {
    (prop::sample::select(ELEMENT_NAMES), arb_attributes()).prop_map(|(name, attributes)| Element {
        name: name.to_string(),
        attributes,
        children: vec![],
    })
}

/// Generate an arbitrary element with nested content.
///
/// Use [`Element::to_tree`] to turn it into a [`Tree`](crate::Tree).
///
/// ```notrust
/// use proptest::prelude::*;
/// use xmldiff::proptest::arb_element;
///
/// proptest! {
///   #[test]
///   fn test_reflexive(element in arb_element()) {
///     let tree = element.to_tree();
///     prop_assert!(xmldiff::compare_trees(&tree, &tree).is_none());
///   }
/// }
/// ```
pub fn arb_element() -> impl Strategy<Value = Element> {
    arb_leaf().prop_recursive(
        6,  // levels deep
        64, // maximum size of 64 nodes
        6,  // up to 6 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                arb_attributes(),
                prop::collection::vec(
                    prop_oneof![
                        TEXT.prop_map(Content::Text),
                        inner.prop_map(Content::Element),
                    ],
                    0..6,
                ),
            )
                .prop_map(|(name, attributes, children)| Element {
                    name: name.to_string(),
                    attributes,
                    children,
                })
        },
    )
}
