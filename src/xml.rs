//! A minimal owned XML node tree.
//!
//! Every parser in this crate consumes an [`XmlElement`] tree rather than a
//! raw event stream. The tree is built once per document from bytes via
//! `quick-xml` and holds local names, attributes, ordered children and the
//! element's direct text content.

use quick_xml::Reader;
use quick_xml::events::{BytesRef, Event};
use std::borrow::Cow;

/// Alias for `Result<T, XmlError>`.
pub type XmlResult<T> = Result<T, XmlError>;

/// Possible errors while building an [`XmlElement`] tree.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum XmlError {
    /// The underlying tokenizer rejected the document.
    #[error(transparent)]
    Malformed(#[from] quick_xml::Error),

    /// The document contains no root element.
    #[error("Document contains no root element")]
    NoRootElement,

    /// An end tag appeared without a matching start tag.
    #[error("Unbalanced end tag: </{0}>")]
    UnbalancedEndTag(String),
}

/// A single attribute as written in the document, name unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: String,
    pub value: String,
}

/// An owned element node: name, attributes, children and direct text.
///
/// `text` holds the concatenated, trimmed text nodes that are *immediate*
/// children of this element; nested element text is not included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<XmlAttribute>,
    children: Vec<XmlElement>,
    text: String,
    /// Document-order layout of text runs and child elements; every
    /// `Piece::Child` corresponds to the next entry of `children`.
    flow: Vec<Piece>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Text(String),
    Child,
}

impl XmlElement {
    /// Builds the tree for the root element of `data`.
    ///
    /// Leading UTF-8 BOMs are skipped; comments, processing instructions and
    /// doctype declarations are ignored. Text that cannot be decoded is
    /// taken verbatim with lossy UTF-8 conversion.
    pub fn parse(data: &[u8]) -> XmlResult<XmlElement> {
        let data = data.strip_prefix(b"\xef\xbb\xbf").unwrap_or(data);
        let mut reader = Reader::from_reader(data);
        reader.config_mut().trim_text(true);

        let mut root: Option<XmlElement> = None;
        // Open elements, outermost first.
        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(el) => stack.push(Self::from_start(&el)),
                Event::Empty(el) => {
                    Self::attach(&mut stack, &mut root, Self::from_start(&el));
                }
                Event::End(el) => {
                    let Some(open) = stack.pop() else {
                        return Err(XmlError::UnbalancedEndTag(
                            String::from_utf8_lossy(el.local_name().as_ref()).into_owned(),
                        ));
                    };
                    Self::attach(&mut stack, &mut root, open);
                }
                Event::Text(text) => {
                    if let Some(open) = stack.last_mut() {
                        let value = text
                            .xml_content()
                            .unwrap_or_else(|_| String::from_utf8_lossy(text.as_ref()));
                        open.push_text(&value);
                    }
                }
                // The tokenizer reports entity and character references as
                // separate events; resolved ones become text.
                Event::GeneralRef(reference) => {
                    if let Some(open) = stack.last_mut()
                        && let Some(ch) = Self::resolve_reference(&reference)?
                    {
                        open.push_text(ch.encode_utf8(&mut [0; 4]));
                    }
                }
                Event::CData(cdata) => {
                    if let Some(open) = stack.last_mut() {
                        let value = cdata
                            .decode()
                            .unwrap_or_else(|_| String::from_utf8_lossy(cdata.as_ref()));
                        open.push_text(&value);
                    }
                }
                Event::Eof => break,
                _ => {}
            }

            if root.is_some() && stack.is_empty() {
                break;
            }
        }

        root.ok_or(XmlError::NoRootElement)
    }

    /// Creates a childless element, mainly useful for tests.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn from_start(el: &quick_xml::events::BytesStart) -> XmlElement {
        let attributes = el
            .attributes()
            .filter_map(Result::ok)
            .map(|attribute| XmlAttribute {
                name: String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
                value: attribute
                    .unescape_value()
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| {
                        String::from_utf8_lossy(attribute.value.as_ref()).into_owned()
                    }),
            })
            .collect();

        XmlElement {
            name: String::from_utf8_lossy(el.name().as_ref()).into_owned(),
            attributes,
            ..Self::default()
        }
    }

    /// Character references and the five predefined XML entities resolve to
    /// their character; references to undeclared entities are dropped.
    fn resolve_reference(reference: &BytesRef) -> XmlResult<Option<char>> {
        if let Some(ch) = reference.resolve_char_ref()? {
            return Ok(Some(ch));
        }
        Ok(match &**reference {
            b"amp" => Some('&'),
            b"lt" => Some('<'),
            b"gt" => Some('>'),
            b"apos" => Some('\''),
            b"quot" => Some('"'),
            _ => None,
        })
    }

    fn attach(stack: &mut Vec<XmlElement>, root: &mut Option<XmlElement>, el: XmlElement) {
        match stack.last_mut() {
            Some(parent) => {
                parent.children.push(el);
                parent.flow.push(Piece::Child);
            }
            None if root.is_none() => *root = Some(el),
            // Additional top-level elements are dropped.
            None => {}
        }
    }

    fn push_text(&mut self, value: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(trimmed);

        if let Some(Piece::Text(run)) = self.flow.last_mut() {
            run.push(' ');
            run.push_str(trimmed);
        } else {
            self.flow.push(Piece::Text(trimmed.to_owned()));
        }
    }

    /// The element name as written, including any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name with any namespace prefix removed.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Case-insensitive comparison against the local name.
    pub fn is_named(&self, local_name: &str) -> bool {
        self.local_name().eq_ignore_ascii_case(local_name)
    }

    /// The element's direct text content, trimmed and whitespace-collapsed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text of this element and every nested element in document order,
    /// runs joined by single spaces.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        let mut children = self.children.iter();
        for piece in &self.flow {
            match piece {
                Piece::Text(run) => {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(run);
                }
                Piece::Child => {
                    if let Some(child) = children.next() {
                        child.collect_text(out);
                    }
                }
            }
        }
    }

    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    /// The value of the attribute whose full name matches `name`,
    /// compared case-insensitively.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name.eq_ignore_ascii_case(name))
            .map(|attribute| attribute.value.as_str())
    }

    /// The first value among the given attribute names, in order.
    pub fn attr_any<'a>(&'a self, names: &[&str]) -> Option<&'a str> {
        names.iter().find_map(|name| self.attr(name))
    }

    /// `true` if the attribute is present, regardless of its value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|attribute| attribute.name.eq_ignore_ascii_case(name))
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// All direct children matching the given local name.
    pub fn children_named<'a, 'b>(
        &'a self,
        local_name: &'b str,
    ) -> impl Iterator<Item = &'a XmlElement> + use<'a, 'b> {
        self.children.iter().filter(move |el| el.is_named(local_name))
    }

    /// The first direct child matching the given local name.
    pub fn first_child(&self, local_name: &str) -> Option<&XmlElement> {
        self.children_named(local_name).next()
    }
}
