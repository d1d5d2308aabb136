// SPDX-License-Identifier: BUSL-1.1
//! Minimal XML element tree built from `quick-xml` events.
//!
//! XML-RPC documents are small and the decoder needs random access to child
//! elements by name, so the whole body is materialized once. Attributes,
//! comments, processing instructions and the doctype are dropped; text and
//! CDATA are kept verbatim (entity references resolved).

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::RpcError;

/// A node inside an element.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its ordered children.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Element {
    pub name: String,
    pub children: Vec<Node>,
}

impl Element {
    fn new(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            children: Vec::new(),
        }
    }

    /// Child elements in document order, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// First child element, whatever its name.
    pub fn first_element(&self) -> Option<&Element> {
        self.elements().next()
    }

    /// First child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|el| el.name == name)
    }

    /// All child elements named `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |el| el.name == name)
    }

    /// Concatenated text of this element and all descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }
}

fn invalid(detail: impl Into<String>) -> RpcError {
    RpcError::InvalidXml {
        detail: detail.into(),
    }
}

/// Parse a complete document and return its root element.
pub(crate) fn parse(bytes: &[u8]) -> Result<Element, RpcError> {
    let source = std::str::from_utf8(bytes).map_err(|e| invalid(format!("not UTF-8: {e}")))?;
    let mut reader = Reader::from_str(source);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(invalid("multiple root elements"));
                }
                stack.push(Element::new(&start));
            }
            Ok(Event::Empty(start)) => attach(&mut stack, &mut root, Element::new(&start))?,
            Ok(Event::End(_)) => {
                let closed = stack.pop().ok_or_else(|| invalid("unmatched end tag"))?;
                attach(&mut stack, &mut root, closed)?;
            }
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| invalid(format!("bad entity: {e}")))?;
                push_text(&mut stack, text.into_owned())?;
            }
            Ok(Event::CData(cdata)) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                push_text(&mut stack, text)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(invalid(format!(
                    "at byte {}: {e}",
                    reader.error_position()
                )))
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(invalid(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| invalid("document has no root element"))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) -> Result<(), RpcError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(el)),
        None if root.is_some() => return Err(invalid("multiple root elements")),
        None => *root = Some(el),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: String) -> Result<(), RpcError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Text(text)),
        None if text.trim().is_empty() => {}
        None => return Err(invalid("text outside the root element")),
    }
    Ok(())
}
