use crate::error::Error;
use crate::tree::{Node, Tree};
use crate::xmlvalue::{Value, ValueType};

/// ## Manipulation
///
/// This maintains the structure the comparison relies on:
/// - The root holds the document element and nothing else.
/// - Only elements can have children.
/// - Two text nodes never appear consecutively. Appending text after
///   text extends the existing text node instead.
impl Tree {
    /// Append a child to the end of the children of the given parent.
    ///
    /// The child must be an unattached node of this tree, and the parent an
    /// element of this tree that is not inside the child.
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        self.append_child(parent, child);
        Ok(())
    }

    /// Append a text node to a parent element given text.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<(), Error> {
        let text_node = self.new_text(text);
        self.append(parent, text_node)
    }

    /// Append a new element to a parent element given a tag name, and
    /// return it.
    pub fn append_element(&mut self, parent: Node, tag: &str) -> Result<Node, Error> {
        let element_node = self.new_element(tag);
        self.append(parent, element_node)?;
        Ok(element_node)
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(Error::InvalidAppend);
        }
        if self.value_type(parent) != ValueType::Element {
            return Err(Error::InvalidAppend);
        }
        if self.value_type(child) == ValueType::Root
            || self.parent(child).is_some()
            || child == self.document_element
            || child == parent
        {
            return Err(Error::InvalidAppend);
        }
        // a detached child can still have descendants
        if parent
            .get()
            .ancestors(self.arena())
            .any(|ancestor| ancestor == child.get())
        {
            return Err(Error::InvalidAppend);
        }
        Ok(())
    }

    /// Append without structure checks; text is still consolidated.
    pub(crate) fn append_child(&mut self, parent: Node, child: Node) {
        if self.consolidate_text(parent, child) {
            return;
        }
        parent.get().append(child.get(), self.arena_mut());
    }

    fn consolidate_text(&mut self, parent: Node, child: Node) -> bool {
        let added = match self.value(child) {
            Value::Text(text) => text.get().to_string(),
            _ => return false,
        };
        let last_child = match self.last_child(parent) {
            Some(last_child) => last_child,
            None => return false,
        };
        match self.value_mut(last_child) {
            Value::Text(existing) => existing.text.push_str(&added),
            _ => return false,
        }
        child.get().remove(self.arena_mut());
        true
    }
}
