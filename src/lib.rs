//! Readable diffs between XML documents.
//!
//! [`compare()`] takes two documents, either as XML text or as an already
//! built [`Tree`], and returns `None` when they are equal, or a line
//! oriented description of what differs. Unchanged parts of the tree are
//! collapsed into `...` lines, so the diff stays focused on the changes.
//!
//! ```rust
//! let diff = xmldiff::compare("<a><b>1</b></a>", "<a><b>2</b></a>")?;
//! assert_eq!(
//!     diff.as_deref(),
//!     Some("  <a>\n    <b>\n-     1\n+     2\n    </b>\n  </a>")
//! );
//!
//! assert_eq!(xmldiff::compare("<a>  hello </a>", "<a>hello</a>")?, None);
//! # Ok::<(), xmldiff::Error>(())
//! ```
//!
//! Text is compared with leading and trailing whitespace removed. Children
//! are compared by position, and attributes by name regardless of order.
//! Namespace prefixes are compared as written.
#![forbid(unsafe_code)]

mod access;
pub mod compare;
mod creation;
mod encoding;
mod entity;
mod error;
pub mod fixed;
mod manipulation;
mod parse;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;
mod tree;
mod writer;
mod xmlvalue;

use std::borrow::Cow;

use tracing::debug;

pub use access::ElementRef;
pub use error::Error;
pub use tree::{Node, Tree};
pub use writer::DiffWriter;
pub use xmlvalue::{Attributes, Element, Text, Value, ValueType};

/// A document to compare: XML text, XML bytes, or a tree.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// XML text, parsed with [`Tree::parse`].
    Text(&'a str),
    /// XML bytes, parsed with [`Tree::parse_bytes`].
    Bytes(&'a [u8]),
    /// An already built tree.
    Tree(&'a Tree),
}

impl<'a> Input<'a> {
    fn into_tree(self) -> Result<Cow<'a, Tree>, Error> {
        match self {
            Input::Text(xml) => Tree::parse(xml).map(Cow::Owned),
            Input::Bytes(data) => Tree::parse_bytes(data).map(Cow::Owned),
            Input::Tree(tree) => Ok(Cow::Borrowed(tree)),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(xml: &'a str) -> Self {
        Input::Text(xml)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(xml: &'a String) -> Self {
        Input::Text(xml)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(data: &'a [u8]) -> Self {
        Input::Bytes(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Input::Bytes(data)
    }
}

impl<'a> From<&'a Tree> for Input<'a> {
    fn from(tree: &'a Tree) -> Self {
        Input::Tree(tree)
    }
}

/// Compare two XML documents.
///
/// Text and byte inputs are parsed first; a parse failure is the only
/// error. Returns `None` if both documents are equal, the diff otherwise.
pub fn compare<'l, 'r>(
    left: impl Into<Input<'l>>,
    right: impl Into<Input<'r>>,
) -> Result<Option<String>, Error> {
    let left: Input<'l> = left.into();
    let right: Input<'r> = right.into();
    let left = left.into_tree()?;
    let right = right.into_tree()?;
    Ok(compare_trees(&left, &right))
}

/// Compare the document elements of two trees.
pub fn compare_trees(left: &Tree, right: &Tree) -> Option<String> {
    compare_elements(left.document_element_ref(), right.document_element_ref())
}

/// Compare two elements, including the text that follows each of them.
///
/// The elements can come from anywhere in their trees.
pub fn compare_elements(left: ElementRef<'_>, right: ElementRef<'_>) -> Option<String> {
    let mut writer = DiffWriter::new();
    compare::compare_element_with_trailer(&mut writer, left, right);
    debug!(
        left = left.tag(),
        right = right.tag(),
        has_diff = writer.has_diff(),
        "compared XML elements"
    );
    writer.into_diff()
}

/// Assert that two XML documents are equal.
///
/// Accepts anything [`compare()`] accepts. On failure the panic message
/// holds the diff, or the parse error if an input is not well-formed.
///
/// ```rust
/// xmldiff::assert_xml_eq!(r#"<a x="1" y="2"/>"#, r#"<a y="2" x="1"></a>"#);
/// ```
#[macro_export]
macro_rules! assert_xml_eq {
    ($left:expr, $right:expr $(,)?) => {
        match $crate::compare($left, $right) {
            ::std::result::Result::Ok(::std::option::Option::None) => {}
            ::std::result::Result::Ok(::std::option::Option::Some(diff)) => {
                panic!("XML documents differ:\n{}", diff)
            }
            ::std::result::Result::Err(err) => {
                panic!("cannot compare XML documents: {}", err)
            }
        }
    };
}
