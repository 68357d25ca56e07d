use crate::tree::{Node, Tree};
use crate::xmlvalue::{Attributes, Element, Text, Value, ValueType};

/// ## Read-only access
impl Tree {
    /// The root node. It holds the document element.
    pub fn root(&self) -> Node {
        self.root
    }

    /// The document element (the outermost element).
    pub fn document_element(&self) -> Node {
        self.document_element
    }

    /// Whether this node is a live node of this tree.
    ///
    /// Nodes are only meaningful for the tree that created them; a node
    /// from another tree may or may not be found here.
    pub fn contains(&self, node: Node) -> bool {
        self.arena()
            .get(node.get())
            .map_or(false, |entry| !entry.is_removed())
    }

    /// Access to the XML value for this node.
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    pub(crate) fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena_mut()[node.get()].get_mut()
    }

    /// The type of the value of this node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// If this node is an element, return it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node is an element, return it mutably.
    ///
    /// ```rust
    /// let mut tree = xmldiff::Tree::new("doc");
    /// let doc = tree.document_element();
    /// tree.element_mut(doc).unwrap().set_attribute("a", "A");
    ///
    /// assert!(xmldiff::compare(&tree, r#"<doc a="A"/>"#)?.is_none());
    /// # Ok::<(), xmldiff::Error>(())
    /// ```
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node is a text node, return it mutably.
    ///
    /// ```rust
    /// let mut tree = xmldiff::Tree::parse("<doc>before</doc>")?;
    /// let text = tree.first_child(tree.document_element()).unwrap();
    /// tree.text_mut(text).unwrap().set("after");
    ///
    /// assert!(xmldiff::compare(&tree, "<doc>after</doc>")?.is_none());
    /// # Ok::<(), xmldiff::Error>(())
    /// ```
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        match self.value_mut(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// If this node is a text node, return its text.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        match self.value(node) {
            Value::Text(text) => Some(text.get()),
            _ => None,
        }
    }

    /// Get parent node, or [`None`] for the root and unattached nodes.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Iterator over the child nodes of this node, text included.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// An element view of this node, if it is an element.
    pub fn element_ref(&self, node: Node) -> Option<ElementRef<'_>> {
        self.element(node).map(|_| ElementRef { tree: self, node })
    }

    /// An element view of the document element.
    pub fn document_element_ref(&self) -> ElementRef<'_> {
        ElementRef {
            tree: self,
            node: self.document_element,
        }
    }
}

/// A read-only view on an element in a [`Tree`].
///
/// This presents an element the way the comparison sees it: a tag,
/// attributes, the text before its first child element, the tail text
/// after its end tag, and its child elements.
///
/// ```rust
/// let tree = xmldiff::Tree::parse("<p>Hello <em>world</em>!</p>")?;
/// let p = tree.document_element_ref();
/// let em = p.children().next().unwrap();
///
/// assert_eq!(p.text(), Some("Hello "));
/// assert_eq!(em.tag(), "em");
/// assert_eq!(em.text(), Some("world"));
/// assert_eq!(em.tail(), Some("!"));
/// # Ok::<(), xmldiff::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    tree: &'a Tree,
    node: Node,
}

impl<'a> ElementRef<'a> {
    /// The tree this element belongs to.
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    /// The node of this element.
    pub fn node(&self) -> Node {
        self.node
    }

    fn element(&self) -> &'a Element {
        match self.tree.value(self.node) {
            Value::Element(element) => element,
            // only constructed for element nodes
            _ => unreachable!(),
        }
    }

    /// The tag name.
    pub fn tag(&self) -> &'a str {
        self.element().name()
    }

    /// The attributes.
    pub fn attributes(&self) -> &'a Attributes {
        self.element().attributes()
    }

    /// Text directly inside the start tag, before any child element.
    pub fn text(&self) -> Option<&'a str> {
        let tree = self.tree;
        tree.first_child(self.node).and_then(|node| tree.text_str(node))
    }

    /// Text directly after the end tag, before the next sibling.
    pub fn tail(&self) -> Option<&'a str> {
        let tree = self.tree;
        tree.next_sibling(self.node).and_then(|node| tree.text_str(node))
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let tree = self.tree;
        tree.children(self.node).filter_map(move |node| tree.element_ref(node))
    }

    /// Whether there is at least one child element.
    pub fn has_children(&self) -> bool {
        self.children().next().is_some()
    }

    /// Whether there is non-empty text before the first child element.
    ///
    /// Whitespace-only text counts.
    pub fn has_text(&self) -> bool {
        self.text().map_or(false, |text| !text.is_empty())
    }
}
