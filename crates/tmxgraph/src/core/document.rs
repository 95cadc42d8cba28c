//! Parsed document tree
//!
//! The export is loaded once into an owned tree of [`RawElement`]s and is
//! read-only afterwards. Tree construction and iteration both use explicit
//! stacks, so document depth never translates into native recursion.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::{debug, span, Level};

use super::error::ExtractError;
use super::namespace::{clark, declared_prefix, is_stray_content, NamespaceMap, XML_NAMESPACE};
use super::vocabulary::{XMI_ID_LOCAL, XMI_PREFIX, XMI_TYPE_LOCAL};

/// One parsed XML element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawElement {
    /// Fully qualified tag, in Clark notation when namespaced
    pub tag: String,
    /// Tag without namespace or prefix
    pub local: String,
    /// Attributes keyed by plain name (unprefixed) or Clark notation (prefixed)
    pub attributes: HashMap<String, String>,
    pub children: Vec<RawElement>,
}

impl RawElement {
    pub fn new(local: &str) -> Self {
        Self {
            tag: local.to_string(),
            local: local.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: RawElement) -> Self {
        self.children.push(child);
        self
    }

    /// Raw attribute value
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attribute value, trimmed, treating empty as absent
    pub fn non_empty_attr(&self, key: &str) -> Option<&str> {
        self.attr(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Direct children with the given local tag
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a RawElement> + 'a {
        self.children.iter().filter(move |c| c.local == local)
    }

    /// First direct child with the given local tag
    pub fn first_child(&self, local: &str) -> Option<&RawElement> {
        self.children.iter().find(|c| c.local == local)
    }

    /// Pre-order iterator over this element and all its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Document-order pre-order traversal backed by an explicit stack
pub struct Descendants<'a> {
    stack: Vec<&'a RawElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a RawElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Keys of the identity and declared-type attributes for one document.
///
/// An element's `xmi:` attributes are stored under the URI in scope at that
/// element, so one candidate key is kept per URI the prefix was ever bound
/// to, plus the raw qualified name for undeclared use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeKeys {
    pub id: Vec<String>,
    pub declared_type: Vec<String>,
}

impl AttributeKeys {
    pub fn from_namespaces(namespaces: &NamespaceMap) -> Self {
        let candidates = |local: &str| -> Vec<String> {
            namespaces
                .uris(XMI_PREFIX)
                .filter(|uri| !uri.is_empty())
                .map(|uri| clark(uri, local))
                .chain(std::iter::once(format!("{XMI_PREFIX}:{local}")))
                .collect()
        };
        Self {
            id: candidates(XMI_ID_LOCAL),
            declared_type: candidates(XMI_TYPE_LOCAL),
        }
    }

    /// Identity attribute of an element
    pub fn id_of<'e>(&self, element: &'e RawElement) -> Option<&'e str> {
        first_present(element, &self.id)
    }

    /// Declared element-type of an element (raw, possibly prefixed value)
    pub fn type_of<'e>(&self, element: &'e RawElement) -> Option<&'e str> {
        first_present(element, &self.declared_type)
    }
}

fn first_present<'e>(element: &'e RawElement, keys: &[String]) -> Option<&'e str> {
    keys.iter().find_map(|key| element.non_empty_attr(key))
}

/// A fully parsed export: namespace map plus element tree
#[derive(Debug, Clone)]
pub struct Document {
    pub namespaces: NamespaceMap,
    pub keys: AttributeKeys,
    pub root: RawElement,
}

impl Document {
    /// Parse a UTF-8 XML document.
    ///
    /// Fails with [`ExtractError::MalformedDocument`] on any well-formedness
    /// problem; no partial tree is returned.
    pub fn parse(input: &str) -> Result<Self, ExtractError> {
        let parse_span = span!(Level::DEBUG, "parse_document", input_len = input.len());
        let _enter = parse_span.enter();

        let namespaces = NamespaceMap::from_document(input)?;
        let root = build_tree(input)?;
        let keys = AttributeKeys::from_namespaces(&namespaces);
        debug!(root = root.local.as_str(), "Document parsed");

        Ok(Self {
            namespaces,
            keys,
            root,
        })
    }

    /// Build a document from an already constructed tree
    pub fn from_root(namespaces: NamespaceMap, root: RawElement) -> Self {
        let keys = AttributeKeys::from_namespaces(&namespaces);
        Self {
            namespaces,
            keys,
            root,
        }
    }

    /// All elements in document order
    pub fn iter(&self) -> Descendants<'_> {
        self.root.descendants()
    }
}

type Scope = Vec<(String, String)>;

fn build_tree(input: &str) -> Result<RawElement, ExtractError> {
    let mut reader = Reader::from_str(input);
    let mut open: Vec<(RawElement, Scope)> = Vec::new();
    let mut root: Option<RawElement> = None;

    loop {
        let position = reader.buffer_position() as u64;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (element, scope) = open_element(&e, &open, position)?;
                if root.is_some() && open.is_empty() {
                    return Err(ExtractError::malformed("multiple root elements", position));
                }
                open.push((element, scope));
            }
            Ok(Event::Empty(e)) => {
                let (element, _) = open_element(&e, &open, position)?;
                match open.last_mut() {
                    Some((parent, _)) => parent.children.push(element),
                    None if root.is_none() => root = Some(element),
                    None => {
                        return Err(ExtractError::malformed("multiple root elements", position))
                    }
                }
            }
            Ok(Event::End(_)) => {
                let Some((element, _)) = open.pop() else {
                    return Err(ExtractError::malformed("unexpected closing tag", position));
                };
                match open.last_mut() {
                    Some((parent, _)) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Eof) => break,
            Ok(event) if open.is_empty() && is_stray_content(&event) => {
                return Err(ExtractError::malformed("content outside root element", position));
            }
            Ok(_) => {}
            Err(e) => return Err(ExtractError::malformed(e.to_string(), position)),
        }
    }

    if !open.is_empty() {
        return Err(ExtractError::malformed(
            format!("{} element(s) left unclosed", open.len()),
            input.len() as u64,
        ));
    }
    root.ok_or_else(|| ExtractError::malformed("document has no root element", 0))
}

fn open_element(
    start: &BytesStart,
    open: &[(RawElement, Scope)],
    position: u64,
) -> Result<(RawElement, Scope), ExtractError> {
    let qname = utf8(start.name().as_ref(), position)?.to_string();

    let mut scope = Scope::new();
    let mut raw_attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ExtractError::malformed(e.to_string(), position))?;
        let key = utf8(attr.key.as_ref(), position)?.to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| ExtractError::malformed(e.to_string(), position))?
            .into_owned();
        match declared_prefix(&key) {
            Some(prefix) => scope.push((prefix.to_string(), value)),
            None => raw_attrs.push((key, value)),
        }
    }

    let lookup = |prefix: &str| -> Option<String> {
        if prefix == "xml" {
            return Some(XML_NAMESPACE.to_string());
        }
        scope
            .iter()
            .rev()
            .chain(open.iter().rev().flat_map(|(_, s)| s.iter().rev()))
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.clone())
            .filter(|uri| !uri.is_empty())
    };

    let (tag, local) = match qname.split_once(':') {
        Some((prefix, local)) => match lookup(prefix) {
            Some(uri) => (clark(&uri, local), local.to_string()),
            None => (qname.clone(), local.to_string()),
        },
        None => match lookup("") {
            Some(uri) => (clark(&uri, &qname), qname.clone()),
            None => (qname.clone(), qname.clone()),
        },
    };

    let mut attributes = HashMap::with_capacity(raw_attrs.len());
    for (key, value) in raw_attrs {
        let key = match key.split_once(':') {
            Some((prefix, local)) => match lookup(prefix) {
                Some(uri) => clark(&uri, local),
                None => key,
            },
            None => key,
        };
        attributes.insert(key, value);
    }

    Ok((
        RawElement {
            tag,
            local,
            attributes,
            children: Vec::new(),
        },
        scope,
    ))
}

fn utf8(bytes: &[u8], position: u64) -> Result<&str, ExtractError> {
    std::str::from_utf8(bytes).map_err(|e| ExtractError::malformed(e.to_string(), position))
}
