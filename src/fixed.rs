//! A plain-data representation of an element tree.
//!
//! Trees are built node by node, but it is often easier to describe an
//! element as a value and turn it into a [`Tree`] in one go.
//!
//! ```rust
//! use xmldiff::fixed;
//!
//! let element = fixed::Element {
//!     name: "doc".to_string(),
//!     attributes: vec![("id".to_string(), "1".to_string())],
//!     children: vec![fixed::Content::Text("Example".to_string())],
//! };
//!
//! let tree = element.to_tree();
//! assert!(xmldiff::compare(&tree, r#"<doc id="1">Example</doc>"#)?.is_none());
//! # Ok::<(), xmldiff::Error>(())
//! ```

use crate::tree::{Node, Tree};

/// A fixed representation of an XML element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes; a later duplicate name overrides an earlier one
    pub attributes: Vec<(String, String)>,
    /// Children
    pub children: Vec<Content>,
}

/// A fixed representation of element content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    /// A text node
    Text(String),
    /// An element node
    Element(Element),
}

impl Element {
    /// Create a tree with this element as its document element.
    pub fn to_tree(&self) -> Tree {
        let mut tree = Tree::new(&self.name);
        let node = tree.document_element();
        self.fill(&mut tree, node);
        tree
    }

    fn fill(&self, tree: &mut Tree, node: Node) {
        if let Some(element) = tree.element_mut(node) {
            for (name, value) in &self.attributes {
                element.set_attribute(name.as_str(), value.as_str());
            }
        }
        for child in &self.children {
            match child {
                Content::Text(text) => {
                    let text_node = tree.new_text(text);
                    tree.append_child(node, text_node);
                }
                Content::Element(element) => {
                    let element_node = tree.new_element(&element.name);
                    tree.append_child(node, element_node);
                    element.fill(tree, element_node);
                }
            }
        }
    }
}
