use insta::assert_snapshot;
use rstest::rstest;
use xmldiff::{compare, compare_elements, compare_trees, Tree};

fn diff(left: &str, right: &str) -> Option<String> {
    compare(left, right).unwrap()
}

#[rstest]
#[case("<a/>")]
#[case(r#"<a x="1" y="abcdef"/>"#)]
#[case("<a>text<b>more</b>tail<c/></a>")]
#[case(r#"<x:a xmlns:x="http://example.com"><x:b q="1"/></x:a>"#)]
fn test_reflexive(#[case] xml: &str) {
    assert_eq!(diff(xml, xml), None);
    let tree = Tree::parse(xml).unwrap();
    assert_eq!(compare_trees(&tree, &tree), None);
}

#[rstest]
#[case("<a/>", "<a></a>")]
#[case("<a>  hello  </a>", "<a>hello</a>")]
#[case(r#"<a x="1" y="2"/>"#, r#"<a y="2" x="1"/>"#)]
#[case("<a>\n  <b/>\n</a>", "<a><b/></a>")]
#[case("<a><![CDATA[x < y]]></a>", "<a>x &lt; y</a>")]
#[case("<?xml version=\"1.0\"?><!-- c --><a/>", "<a/>")]
#[case(r#"<a xmlns="http://example.com"/>"#, "<a/>")]
fn test_equal(#[case] left: &str, #[case] right: &str) {
    assert_eq!(diff(left, right), None);
    assert_eq!(diff(right, left), None);
}

#[test]
fn test_tag_mismatch_short_circuits() {
    assert_eq!(diff("<a/>", "<b/>").unwrap(), "- <a/>\n+ <b/>");
    assert_eq!(
        diff("<a><x/><y/></a>", "<b><x/><y/></b>").unwrap(),
        "- <a>...</a>\n+ <b>...</b>"
    );
}

#[test]
fn test_abbreviation_threshold_unchanged() {
    assert_eq!(
        diff(r#"<a id="abcd" x="1"/>"#, r#"<a id="abcd" x="2"/>"#).unwrap(),
        "  <a id=\"abcd\"\n-   x=\"1\"\n+   x=\"2\"\n  />"
    );
    assert_eq!(
        diff(r#"<a id="abcde" x="1"/>"#, r#"<a id="abcde" x="2"/>"#).unwrap(),
        "  <a id=\"...\"\n-   x=\"1\"\n+   x=\"2\"\n  />"
    );
}

#[test]
fn test_abbreviation_threshold_changed() {
    assert_eq!(
        diff(r#"<a x="abcde"/>"#, r#"<a x="abcdf"/>"#).unwrap(),
        "  <a\n-   x=\"abcde\"\n+   x=\"abcdf\"\n  />"
    );
}

#[test]
fn test_added_attribute_abbreviated() {
    assert_eq!(
        diff("<a/>", r#"<a href="http://example.com"/>"#).unwrap(),
        "  <a\n+   href=\"...\"\n  />"
    );
}

#[test]
fn test_children_positional_removal() {
    assert_eq!(
        diff("<a><x/><y/></a>", "<a><x/></a>").unwrap(),
        "  <a>\n    <x/>\n-   <y/>\n  </a>"
    );
}

#[test]
fn test_children_positional_cascade() {
    // removing the first child misaligns the rest
    assert_eq!(
        diff("<a><x/><y/></a>", "<a><y/></a>").unwrap(),
        "  <a>\n-   <x/>\n+   <y/>\n-   <y/>\n  </a>"
    );
}

#[test]
fn test_added_child_with_content() {
    assert_eq!(
        diff("<a></a>", r#"<a><b c="1">t</b></a>"#).unwrap(),
        "  <a>\n+   <b ...>...</b>\n  </a>"
    );
}

#[test]
fn test_text_added_and_removed() {
    assert_eq!(diff("<a></a>", "<a>hi</a>").unwrap(), "  <a>\n+   hi\n  </a>");
    assert_eq!(diff("<a>hi</a>", "<a/>").unwrap(), "  <a>\n-   hi\n  </a>");
}

#[test]
fn test_multiline_text_marks_every_line() {
    assert_eq!(
        diff("<a>x\ny</a>", "<a>z</a>").unwrap(),
        "  <a>\n-   x\n-   y\n+   z\n  </a>"
    );
    assert_eq!(diff("<b/>", "<b>a\na</b>").unwrap(), "  <b>\n+   a\n+   a\n  </b>");
}

#[test]
fn test_end_to_end() {
    let result = diff("<a><b>1</b></a>", "<a><b>2</b></a>").unwrap();
    assert_snapshot!(result, @r"
  <a>
    <b>
-     1
+     2
    </b>
  </a>
");
}

#[test]
fn test_unchanged_subtree_is_elided() {
    let result = diff(
        "<r><same><deep>x</deep></same><c>1</c></r>",
        "<r><same><deep>x</deep></same><c>2</c></r>",
    )
    .unwrap();
    assert_snapshot!(result, @r"
  <r>
    <same>
    ...
    </same>
    <c>
-     1
+     2
    </c>
  </r>
");
}

#[test]
fn test_nested_attribute_change() {
    let result = diff(
        r#"<doc><head title="x"/><body><p class="intro">Hello</p></body></doc>"#,
        r#"<doc><head title="x"/><body><p class="outro">Hello</p></body></doc>"#,
    )
    .unwrap();
    assert_snapshot!(result, @r#"
  <doc>
    <head .../>
    <body>
      <p
-       class="intro"
+       class="outro"
      >
      ...
      </p>
    </body>
  </doc>
"#);
}

#[test]
fn test_tail_change() {
    assert_eq!(
        diff("<r><a/>one</r>", "<r><a/>two</r>").unwrap(),
        "  <r>\n    <a/>\n-   one\n+   two\n  </r>"
    );
}

#[test]
fn test_detection_is_symmetric() {
    let pairs = [
        ("<a/>", "<b/>"),
        ("<a><x/><y/></a>", "<a><x/></a>"),
        (r#"<a x="1"/>"#, "<a/>"),
        ("<a>1</a>", "<a>1</a>"),
    ];
    for (left, right) in pairs {
        assert_eq!(diff(left, right).is_none(), diff(right, left).is_none());
    }
}

#[test]
fn test_mixed_inputs() {
    let tree = Tree::parse("<a><b/></a>").unwrap();
    assert_eq!(compare(&tree, "<a><b/></a>").unwrap(), None);
    assert_eq!(compare(b"<a><b/></a>", &tree).unwrap(), None);
    let owned = String::from("<a><c/></a>");
    assert_eq!(
        compare(&tree, &owned).unwrap().unwrap(),
        "  <a>\n-   <b/>\n+   <c/>\n  </a>"
    );
}

#[test]
fn test_parse_error_is_returned() {
    assert!(matches!(
        compare("<a>", "<a/>"),
        Err(xmldiff::Error::UnclosedTag(_))
    ));
}

#[test]
fn test_compare_subelements_includes_tail() {
    let left = Tree::parse("<r><a>1</a>x</r>").unwrap();
    let right = Tree::parse("<r><a>1</a>y</r>").unwrap();
    let left_a = left.document_element_ref().children().next().unwrap();
    let right_a = right.document_element_ref().children().next().unwrap();
    assert_eq!(
        compare_elements(left_a, right_a).unwrap(),
        "  <a>\n  ...\n  </a>\n- x\n+ y"
    );
}

#[test]
fn test_assert_xml_eq_passes() {
    xmldiff::assert_xml_eq!("<a> x </a>", "<a>x</a>");
}

#[test]
#[should_panic(expected = "XML documents differ")]
fn test_assert_xml_eq_fails() {
    xmldiff::assert_xml_eq!("<a>x</a>", "<a>y</a>");
}

#[test]
#[should_panic(expected = "cannot compare XML documents")]
fn test_assert_xml_eq_parse_error() {
    xmldiff::assert_xml_eq!("<a>", "<a/>");
}
