//! The comparison walk.
//!
//! These functions walk two element trees in lock-step and describe the
//! differences through a [`DiffWriter`]. Children are paired up by
//! position only: an inserted or removed child shifts every later sibling
//! out of alignment, and each shifted pair is reported as its own change.
//!
//! The walk never fails: it assumes two well-formed trees, and every
//! structural mismatch becomes part of the diff.
//!
//! Most users want [`compare`](crate::compare()) instead; these are exposed
//! to allow writing the diff of several element pairs into one writer.

use std::collections::BTreeSet;

use tracing::trace;

use crate::access::ElementRef;
use crate::writer::DiffWriter;
use crate::xmlvalue::Attributes;

/// Attribute values longer than this many characters are shown as `...`
/// unless they are the value that changed.
const ABBREVIATE_ABOVE: usize = 4;

/// Compare two elements, then the text that follows each of them.
pub fn compare_element_with_trailer(
    writer: &mut DiffWriter,
    left: ElementRef<'_>,
    right: ElementRef<'_>,
) {
    compare_element(writer, left, right);
    compare_text(writer, left.tail(), right.tail());
}

/// Compare two elements: tag, attributes and content.
pub fn compare_element(writer: &mut DiffWriter, left: ElementRef<'_>, right: ElementRef<'_>) {
    let tag = left.tag();
    if tag != right.tag() {
        trace!(left = tag, right = right.tag(), "tag mismatch");
        writer.write_diff(Some(tag_only(left).as_str()), Some(tag_only(right).as_str()));
        return;
    }

    let has_content =
        left.has_children() || right.has_children() || left.has_text() || right.has_text();

    let attributes = compare_attributes(left.attributes(), right.attributes());

    if attributes.has_diff() {
        if attributes.shared.is_empty() {
            writer.write_same(&format!("<{}", tag));
        } else {
            writer.write_same(&format!("<{} {}", tag, attributes.shared.join(" ")));
        }

        writer.indented(|inner| {
            for attribute in &attributes.left_only {
                inner.write_diff(Some(attribute.as_str()), None);
            }
            for (left_attribute, right_attribute) in &attributes.changed {
                inner.write_diff(Some(left_attribute.as_str()), Some(right_attribute.as_str()));
            }
            for attribute in &attributes.right_only {
                inner.write_diff(None, Some(attribute.as_str()));
            }
        });

        if !has_content {
            writer.write_same("/>");
            return;
        }
        writer.write_same(">");
    } else if has_content {
        if attributes.shared.is_empty() {
            writer.write_same(&format!("<{}>", tag));
        } else {
            writer.write_same(&format!("<{} ...>", tag));
        }
    } else {
        if attributes.shared.is_empty() {
            writer.write_same(&format!("<{}/>", tag));
        } else {
            writer.write_same(&format!("<{} .../>", tag));
        }
        return;
    }

    writer.only_show_if_diff(true, |inner| compare_content(inner, left, right));

    writer.write_same(&format!("</{}>", tag));
}

/// The outcome of comparing two attribute maps.
///
/// Each bucket holds rendered `name="value"` strings in sorted name order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributeComparison {
    /// Same name and value on both sides, abbreviated.
    pub shared: Vec<String>,
    /// Only on the left side, abbreviated.
    pub left_only: Vec<String>,
    /// Same name, different value: left and right, never abbreviated.
    pub changed: Vec<(String, String)>,
    /// Only on the right side, abbreviated.
    pub right_only: Vec<String>,
}

impl AttributeComparison {
    /// Whether any attribute is missing on one side or has a different value.
    pub fn has_diff(&self) -> bool {
        !(self.left_only.is_empty() && self.changed.is_empty() && self.right_only.is_empty())
    }
}

/// Sort the attributes of both sides into shared, left only, changed and
/// right only.
///
/// ```rust
/// use xmldiff::compare::compare_attributes;
/// use xmldiff::Attributes;
///
/// let mut left = Attributes::default();
/// left.insert("id".to_string(), "x".to_string());
/// left.insert("class".to_string(), "wide".to_string());
/// let mut right = Attributes::default();
/// right.insert("id".to_string(), "y".to_string());
///
/// let comparison = compare_attributes(&left, &right);
/// assert_eq!(comparison.left_only, vec![r#"class="wide""#]);
/// assert_eq!(
///     comparison.changed,
///     vec![(r#"id="x""#.to_string(), r#"id="y""#.to_string())]
/// );
/// ```
pub fn compare_attributes(left: &Attributes, right: &Attributes) -> AttributeComparison {
    let mut comparison = AttributeComparison::default();

    let names: BTreeSet<&str> = left.keys().chain(right.keys()).map(String::as_str).collect();

    for name in names {
        match (left.get(name), right.get(name)) {
            (None, Some(right_value)) => comparison
                .right_only
                .push(abbreviate_attribute(name, right_value)),
            (Some(left_value), None) => comparison
                .left_only
                .push(abbreviate_attribute(name, left_value)),
            (Some(left_value), Some(right_value)) if left_value == right_value => comparison
                .shared
                .push(abbreviate_attribute(name, left_value)),
            (Some(left_value), Some(right_value)) => comparison.changed.push((
                format!(r#"{}="{}""#, name, left_value),
                format!(r#"{}="{}""#, name, right_value),
            )),
            // every name comes from one of the two maps
            (None, None) => unreachable!(),
        }
    }

    comparison
}

/// Render an attribute, replacing values over four characters with `...`.
pub fn abbreviate_attribute(name: &str, value: &str) -> String {
    if value.chars().count() > ABBREVIATE_ABOVE {
        format!(r#"{}="...""#, name)
    } else {
        format!(r#"{}="{}""#, name, value)
    }
}

/// Compare the text and the child elements of two elements.
///
/// Children are paired by position; a child without a counterpart is
/// reported in its abbreviated form.
pub fn compare_content(writer: &mut DiffWriter, left: ElementRef<'_>, right: ElementRef<'_>) {
    compare_text(writer, left.text(), right.text());

    let mut left_children = left.children();
    let mut right_children = right.children();
    loop {
        match (left_children.next(), right_children.next()) {
            (None, None) => break,
            (None, Some(right_child)) => {
                writer.write_diff(None, Some(tag_only(right_child).as_str()))
            }
            (Some(left_child), None) => {
                writer.write_diff(Some(tag_only(left_child).as_str()), None)
            }
            (Some(left_child), Some(right_child)) => {
                compare_element_with_trailer(writer, left_child, right_child)
            }
        }
    }
}

/// Compare two texts, ignoring leading and trailing whitespace.
///
/// Equal text is written as a single `...` line; the text itself is only
/// shown when it differs.
pub fn compare_text(writer: &mut DiffWriter, left: Option<&str>, right: Option<&str>) {
    let left = left.unwrap_or_default().trim();
    let right = right.unwrap_or_default().trim();

    if left.is_empty() && right.is_empty() {
        return;
    }

    if left == right {
        writer.write_same("...");
    } else {
        writer.write_diff(non_empty(left), non_empty(right));
    }
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// A one-line summary of an element: its tag, `...` for attributes when
/// it has any, and `...` for content when it has any.
pub fn tag_only(element: ElementRef<'_>) -> String {
    let tag = element.tag();
    let mut abbreviated = format!("<{}", tag);
    if !element.attributes().is_empty() {
        abbreviated.push_str(" ...");
    }
    if element.has_children() || element.has_text() {
        abbreviated.push_str(">...</");
        abbreviated.push_str(tag);
        abbreviated.push('>');
    } else {
        abbreviated.push_str("/>");
    }
    abbreviated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::tree::Tree;

    fn diff(left: &str, right: &str) -> Option<String> {
        let left = Tree::parse(left).unwrap();
        let right = Tree::parse(right).unwrap();
        let mut writer = DiffWriter::new();
        compare_element_with_trailer(
            &mut writer,
            left.document_element_ref(),
            right.document_element_ref(),
        );
        writer.into_diff()
    }

    fn attributes(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[rstest]
    #[case("", r#"a="""#)]
    #[case("abcd", r#"a="abcd""#)]
    #[case("abcde", r#"a="...""#)]
    #[case("äöüß", r#"a="äöüß""#)]
    fn test_abbreviate_attribute(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(abbreviate_attribute("a", value), expected);
    }

    #[rstest]
    #[case("<a/>", "<a/>")]
    #[case("<a></a>", "<a/>")]
    #[case(r#"<a x="1"/>"#, "<a .../>")]
    #[case("<a>text</a>", "<a>...</a>")]
    #[case("<a><b/></a>", "<a>...</a>")]
    #[case(r#"<a x="1"><b/></a>"#, "<a ...>...</a>")]
    fn test_tag_only(#[case] xml: &str, #[case] expected: &str) {
        let tree = Tree::parse(xml).unwrap();
        assert_eq!(tag_only(tree.document_element_ref()), expected);
    }

    #[test]
    fn test_compare_attributes_buckets_in_sorted_order() {
        let left = attributes(&[("z", "9"), ("c", "1"), ("b", "1"), ("long", "abcdef")]);
        let right = attributes(&[("long", "abcdef"), ("c", "2"), ("a", "0"), ("z", "9")]);

        let comparison = compare_attributes(&left, &right);

        assert_eq!(
            comparison,
            AttributeComparison {
                shared: vec![r#"long="...""#.to_string(), r#"z="9""#.to_string()],
                left_only: vec![r#"b="1""#.to_string()],
                changed: vec![(r#"c="1""#.to_string(), r#"c="2""#.to_string())],
                right_only: vec![r#"a="0""#.to_string()],
            }
        );
        assert!(comparison.has_diff());
    }

    #[test]
    fn test_compare_attributes_changed_not_abbreviated() {
        let left = attributes(&[("x", "abcde")]);
        let right = attributes(&[("x", "abcdf")]);
        let comparison = compare_attributes(&left, &right);
        assert_eq!(
            comparison.changed,
            vec![(r#"x="abcde""#.to_string(), r#"x="abcdf""#.to_string())]
        );
    }

    #[test]
    fn test_compare_attributes_same() {
        let left = attributes(&[("x", "1"), ("y", "2")]);
        let right = attributes(&[("y", "2"), ("x", "1")]);
        assert!(!compare_attributes(&left, &right).has_diff());
    }

    #[rstest]
    #[case(None, None, "", false)]
    #[case(Some("  \n "), None, "", false)]
    #[case(Some(" a "), Some("a"), "  ...", false)]
    #[case(Some("a"), Some("b"), "- a\n+ b", true)]
    #[case(None, Some(" b "), "+ b", true)]
    #[case(Some("a"), Some("   "), "- a", true)]
    fn test_compare_text(
        #[case] left: Option<&str>,
        #[case] right: Option<&str>,
        #[case] expected: &str,
        #[case] has_diff: bool,
    ) {
        let mut writer = DiffWriter::new();
        compare_text(&mut writer, left, right);
        assert_eq!(writer.to_string(), expected);
        assert_eq!(writer.has_diff(), has_diff);
    }

    #[test]
    fn test_tag_mismatch_stops() {
        assert_eq!(
            diff("<a><x/></a>", r#"<b y="1"/>"#).unwrap(),
            "- <a>...</a>\n+ <b .../>"
        );
    }

    #[test]
    fn test_attribute_diff_self_closing() {
        assert_eq!(
            diff(r#"<a id="abcd" x="1"/>"#, r#"<a id="abcd" x="2"/>"#).unwrap(),
            "  <a id=\"abcd\"\n-   x=\"1\"\n+   x=\"2\"\n  />"
        );
    }

    #[test]
    fn test_attribute_diff_with_content() {
        assert_eq!(
            diff(r#"<a x="1">t</a>"#, r#"<a>t</a>"#).unwrap(),
            "  <a\n-   x=\"1\"\n  >\n  ...\n  </a>"
        );
    }

    #[test]
    fn test_attribute_groups_in_fixed_order() {
        assert_eq!(
            diff(
                r#"<a b="1" c="1" z="9"/>"#,
                r#"<a a="0" c="2" z="9"/>"#
            )
            .unwrap(),
            "  <a z=\"9\"\n-   b=\"1\"\n-   c=\"1\"\n+   c=\"2\"\n+   a=\"0\"\n  />"
        );
    }

    #[test]
    fn test_tail_is_compared_after_element() {
        assert_eq!(
            diff("<r><a/>one</r>", "<r><a/>two</r>").unwrap(),
            "  <r>\n    <a/>\n-   one\n+   two\n  </r>"
        );
    }

    #[test]
    fn test_whitespace_only_text_is_content() {
        // no change, but the element is not rendered self-closing
        let mut writer = DiffWriter::new();
        let left = Tree::parse("<a> </a>").unwrap();
        let right = Tree::parse("<a/>").unwrap();
        compare_element(
            &mut writer,
            left.document_element_ref(),
            right.document_element_ref(),
        );
        assert_eq!(writer.to_string(), "  <a>\n  </a>");
        assert!(!writer.has_diff());
    }

    #[test]
    fn test_shared_attributes_without_diff() {
        let mut writer = DiffWriter::new();
        let left = Tree::parse(r#"<a x="1"><b y="2"/></a>"#).unwrap();
        compare_element(
            &mut writer,
            left.document_element_ref(),
            left.document_element_ref(),
        );
        assert_eq!(writer.to_string(), "  <a ...>\n  ...\n  </a>");
    }
}
