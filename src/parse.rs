use tracing::debug;
use xmlparser::{ElementEnd, StrSpan, Token, Tokenizer};

use crate::encoding::detect_encoding;
use crate::entity::parse_entities;
use crate::error::Error;
use crate::tree::{Node, Tree};
use crate::xmlvalue::{Element, Value};

fn qualified_name(prefix: StrSpan, local: StrSpan) -> String {
    if prefix.as_str().is_empty() {
        local.as_str().to_string()
    } else {
        format!("{}:{}", prefix.as_str(), local.as_str())
    }
}

fn is_namespace_declaration(prefix: StrSpan, local: StrSpan) -> bool {
    prefix.as_str() == "xmlns" || (prefix.as_str().is_empty() && local.as_str() == "xmlns")
}

struct TreeBuilder {
    tree: Option<Tree>,
    // open element, `None` outside the document element
    current: Option<Node>,
    // element whose start tag is still being read
    pending: Option<Element>,
    element_count: usize,
}

impl TreeBuilder {
    fn new() -> Self {
        TreeBuilder {
            tree: None,
            current: None,
            pending: None,
            element_count: 0,
        }
    }

    fn element_start(&mut self, name: String) -> Result<(), Error> {
        if self.tree.is_some() && self.current.is_none() {
            return Err(Error::MultipleDocumentElements);
        }
        self.pending = Some(Element::new(name));
        Ok(())
    }

    fn attribute(&mut self, name: String, value: &str) -> Result<(), Error> {
        // the tokenizer only produces attributes inside a start tag
        let element = match self.pending.as_mut() {
            Some(element) => element,
            None => return Ok(()),
        };
        if element.attributes.contains_key(&name) {
            return Err(Error::DuplicateAttribute(name));
        }
        let value = parse_entities(value)?;
        element.attributes.insert(name, value.into_owned());
        Ok(())
    }

    fn open_element(&mut self) {
        let element = match self.pending.take() {
            Some(element) => element,
            None => return,
        };
        self.element_count += 1;
        let node = match (self.tree.as_mut(), self.current) {
            (Some(tree), Some(current)) => {
                let node = tree.new_node(Value::Element(element));
                tree.append_child(current, node);
                node
            }
            _ => {
                let tree = Tree::with_element(element);
                let node = tree.document_element();
                self.tree = Some(tree);
                node
            }
        };
        self.current = Some(node);
    }

    fn close_element(&mut self, name: Option<String>) -> Result<(), Error> {
        let (tree, current) = match (self.tree.as_ref(), self.current) {
            (Some(tree), Some(current)) => (tree, current),
            _ => {
                return Err(Error::InvalidCloseTag {
                    expected: String::new(),
                    found: name.unwrap_or_default(),
                })
            }
        };
        if let Some(name) = name {
            let expected = tree.element(current).map(|e| e.name()).unwrap_or_default();
            if expected != name {
                return Err(Error::InvalidCloseTag {
                    expected: expected.to_string(),
                    found: name,
                });
            }
        }
        self.current = tree
            .parent(current)
            .filter(|parent| tree.element(*parent).is_some());
        Ok(())
    }

    fn text(&mut self, text: &str, resolve_entities: bool) -> Result<(), Error> {
        let (tree, current) = match (self.tree.as_mut(), self.current) {
            (Some(tree), Some(current)) => (tree, current),
            _ => {
                if text.trim().is_empty() {
                    return Ok(());
                }
                return Err(Error::TextOutsideDocumentElement);
            }
        };
        let node = if resolve_entities {
            tree.new_text(&parse_entities(text)?)
        } else {
            tree.new_text(text)
        };
        tree.append_child(current, node);
        Ok(())
    }

    fn build(self) -> Result<Tree, Error> {
        let tree = self.tree.ok_or(Error::NoDocumentElement)?;
        if let Some(current) = self.current {
            let name = tree
                .element(current)
                .map(|e| e.name().to_string())
                .unwrap_or_default();
            return Err(Error::UnclosedTag(name));
        }
        debug!(
            document_element = tree.document_element_ref().tag(),
            elements = self.element_count,
            "parsed XML document"
        );
        Ok(tree)
    }
}

/// ## Parsing
impl Tree {
    /// Parse a string containing XML into a tree.
    ///
    /// The XML declaration, comments and processing instructions are
    /// skipped. Namespace declarations are not kept as attributes;
    /// tags and attribute names keep the prefix they were written with.
    ///
    /// ```rust
    /// let tree = xmldiff::Tree::parse(r#"<doc a="1">Hello &amp; welcome</doc>"#)?;
    /// let doc = tree.document_element_ref();
    ///
    /// assert_eq!(doc.tag(), "doc");
    /// assert_eq!(doc.text(), Some("Hello & welcome"));
    /// # Ok::<(), xmldiff::Error>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Tree, Error> {
        let mut builder = TreeBuilder::new();

        for token in Tokenizer::from(xml) {
            match token? {
                Token::Declaration { .. }
                | Token::ProcessingInstruction { .. }
                | Token::Comment { .. } => {}
                Token::DtdStart { .. }
                | Token::EmptyDtd { .. }
                | Token::EntityDeclaration { .. }
                | Token::DtdEnd { .. } => {
                    return Err(Error::DtdUnsupported);
                }
                Token::ElementStart { prefix, local, .. } => {
                    builder.element_start(qualified_name(prefix, local))?;
                }
                Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                } => {
                    if !is_namespace_declaration(prefix, local) {
                        builder.attribute(qualified_name(prefix, local), value.as_str())?;
                    }
                }
                Token::ElementEnd { end, .. } => match end {
                    ElementEnd::Open => builder.open_element(),
                    ElementEnd::Empty => {
                        builder.open_element();
                        builder.close_element(None)?;
                    }
                    ElementEnd::Close(prefix, local) => {
                        builder.close_element(Some(qualified_name(prefix, local)))?;
                    }
                },
                Token::Text { text } => builder.text(text.as_str(), true)?,
                Token::Cdata { text, .. } => builder.text(text.as_str(), false)?,
            }
        }

        builder.build()
    }

    /// Parse bytes containing XML into a tree.
    ///
    /// The encoding is detected from a byte order mark or the XML
    /// declaration, defaulting to UTF-8.
    pub fn parse_bytes(data: &[u8]) -> Result<Tree, Error> {
        let encoding = detect_encoding(data);
        let (xml, _, had_errors) = encoding.decode(data);
        if had_errors {
            return Err(Error::Encoding(encoding.name().to_string()));
        }
        Tree::parse(&xml)
    }
}
