use ahash::HashMap;

/// The type of the XML node.
///
/// Access it using [`Value::value_type`] or
/// [`Tree::value_type`](crate::Tree::value_type).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document root that holds the document element.
    Root,
    /// Element; it has a name and attributes.
    Element,
    /// Text.
    Text,
}

/// An XML value.
///
/// Access it using [`Tree::value`](crate::Tree::value).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Document root that holds everything. Note that this not the same as
    /// the document element.
    Root,
    /// Element; it has a name and attributes.
    Element(Element),
    /// Text.
    Text(Text),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Root => ValueType::Root,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
        }
    }
}

/// Attributes of an element, by qualified name.
///
/// Order carries no meaning; comparison iterates keys in sorted order.
pub type Attributes = HashMap<String, String>;

/// XML element value.
///
/// Example: `<foo/>` or `<foo bar="baz"/>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
}

impl Element {
    pub(crate) fn new(name: String) -> Self {
        Element {
            name,
            attributes: Attributes::default(),
        }
    }

    /// The name of the element, including its prefix if it had one.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    ///
    /// ```rust
    /// let tree = xmldiff::Tree::parse(r#"<doc a="A" />"#)?;
    /// let element = tree.element(tree.document_element()).unwrap();
    ///
    /// assert_eq!(element.get_attribute("a"), Some("A"));
    /// assert_eq!(element.get_attribute("b"), None);
    /// # Ok::<(), xmldiff::Error>(())
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Set an attribute value, replacing any previous value.
    pub fn set_attribute<N: Into<String>, S: Into<String>>(&mut self, name: N, value: S) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

/// XML text value.
///
/// Example: `Bar` in `<foo>Bar</foo>`, or `hello` and `world` in
/// `<greeting>hello<sep/>world</greeting>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}
