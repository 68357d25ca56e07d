use indextree::{Arena, NodeId};

use crate::xmlvalue::{Element, Value};

pub(crate) type XmlArena = Arena<Value>;

/// A node in a [`Tree`].
/// This is a lightweight value and can be copied.
///
/// A node is only meaningful for the tree that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// An XML document tree.
///
/// A tree always has exactly one document element, created along with
/// the tree. Text and further elements are added below it. Adjacent text
/// nodes are merged, so every element has at most one leading text and one
/// trailing text (its tail).
///
/// ```rust
/// use xmldiff::Tree;
///
/// let mut tree = Tree::new("doc");
/// let doc = tree.document_element();
/// let p = tree.new_element("p");
/// tree.append(doc, p)?;
/// tree.append_text(p, "Hello")?;
/// tree.append_text(doc, "tail")?;
///
/// let p = tree.element_ref(p).unwrap();
/// assert_eq!(p.text(), Some("Hello"));
/// assert_eq!(p.tail(), Some("tail"));
/// # Ok::<(), xmldiff::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) arena: XmlArena,
    pub(crate) root: Node,
    pub(crate) document_element: Node,
}

impl Tree {
    /// Create a new tree whose document element has the given tag name.
    pub fn new(tag: &str) -> Self {
        Self::with_element(Element::new(tag.to_string()))
    }

    pub(crate) fn with_element(element: Element) -> Self {
        let mut arena = XmlArena::new();
        let root = arena.new_node(Value::Root);
        let document_element = arena.new_node(Value::Element(element));
        root.append(document_element, &mut arena);
        Tree {
            arena,
            root: Node::new(root),
            document_element: Node::new(document_element),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }
}
