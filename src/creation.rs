use crate::tree::{Node, Tree};
use crate::xmlvalue::{Element, Text, Value};

/// ## Creation
///
/// New nodes are unattached until you add them with [`Tree::append`].
impl Tree {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(value))
    }

    /// Create a new, unattached text node.
    pub fn new_text(&mut self, text: &str) -> Node {
        let text_node = Value::Text(Text::new(text.to_string()));
        self.new_node(text_node)
    }

    /// Create a new, unattached element node with the given tag name.
    pub fn new_element(&mut self, tag: &str) -> Node {
        let element_node = Value::Element(Element::new(tag.to_string()));
        self.new_node(element_node)
    }
}
