use std::fmt;

/// Errors that can occur while turning XML input into a [`Tree`](crate::Tree).
///
/// Comparing two trees never fails; only parsing and tree construction can.
#[derive(Debug)]
pub enum Error {
    /// An entity reference was opened with `&` but not closed with `;`.
    UnclosedEntity(String),
    /// An entity reference that is not predefined or a valid character
    /// reference.
    InvalidEntity(String),
    /// A close tag that does not match the open element.
    InvalidCloseTag {
        /// The name of the element that is open.
        expected: String,
        /// The name found in the close tag.
        found: String,
    },
    /// The input ended while this element was still open.
    UnclosedTag(String),
    /// The same attribute appears twice on one element.
    DuplicateAttribute(String),
    /// Document type declarations are not supported.
    DtdUnsupported,
    /// The input contains no element at all.
    NoDocumentElement,
    /// More than one element at the top level.
    MultipleDocumentElements,
    /// Non-whitespace text before or after the document element.
    TextOutsideDocumentElement,
    /// The byte input could not be decoded with the detected encoding.
    Encoding(String),
    /// Append target is a text node, or the node belongs to another position
    /// in the tree.
    InvalidAppend,
    /// Error from the underlying tokenizer.
    Parser(xmlparser::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnclosedEntity(entity) => write!(f, "unclosed entity: &{}", entity),
            Error::InvalidEntity(entity) => write!(f, "invalid entity: &{};", entity),
            Error::InvalidCloseTag { expected, found } => {
                write!(f, "expected </{}>, found </{}>", expected, found)
            }
            Error::UnclosedTag(name) => write!(f, "unclosed tag: <{}>", name),
            Error::DuplicateAttribute(name) => write!(f, "duplicate attribute: {}", name),
            Error::DtdUnsupported => write!(f, "DTD is not supported"),
            Error::NoDocumentElement => write!(f, "no document element"),
            Error::MultipleDocumentElements => write!(f, "more than one document element"),
            Error::TextOutsideDocumentElement => write!(f, "text outside document element"),
            Error::Encoding(label) => write!(f, "cannot decode input as {}", label),
            Error::InvalidAppend => write!(f, "cannot append node here"),
            Error::Parser(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parser(e) => Some(e),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for Error {
    #[inline]
    fn from(e: xmlparser::Error) -> Self {
        Error::Parser(e)
    }
}
