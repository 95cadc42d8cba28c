//! Namespace resolution
//!
//! Collects every `xmlns` / `xmlns:prefix` declaration in the document, at any
//! depth, into a prefix → URI map. Every URI a prefix was ever bound to is
//! kept as well, since element attributes resolve against the declaration in
//! scope rather than the last one.

use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::{debug, trace};

use super::error::ExtractError;

/// Key under which the default (unprefixed) namespace is stored
pub const DEFAULT_NAMESPACE_KEY: &str = "#default";

/// Namespace URI bound to the reserved `xml` prefix
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Prefix → URI map, built once per document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    prefixes: BTreeMap<String, String>,
    bound: BTreeMap<String, Vec<String>>,
}

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the raw document and collect all namespace declarations.
    ///
    /// A prefix declared more than once keeps the URI of its last declaration
    /// in document order.
    pub fn from_document(input: &str) -> Result<Self, ExtractError> {
        let mut reader = Reader::from_str(input);
        let mut map = Self::new();
        let mut open = 0usize;
        let mut seen_root = false;

        loop {
            let position = reader.buffer_position() as u64;
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    map.collect(&e)?;
                    open += 1;
                    seen_root = true;
                }
                Ok(Event::Empty(e)) => {
                    map.collect(&e)?;
                    seen_root = true;
                }
                Ok(Event::End(_)) => open = open.saturating_sub(1),
                Ok(Event::Eof) => break,
                Ok(event) if open == 0 && is_stray_content(&event) => {
                    return Err(ExtractError::malformed("content outside root element", position));
                }
                Ok(_) => {}
                Err(e) => return Err(ExtractError::malformed(e.to_string(), position)),
            }
        }

        if !seen_root {
            return Err(ExtractError::malformed("document has no root element", 0));
        }
        if open != 0 {
            return Err(ExtractError::malformed(
                format!("{open} element(s) left unclosed"),
                input.len() as u64,
            ));
        }

        debug!(count = map.len(), "Collected namespace declarations");
        Ok(map)
    }

    fn collect(&mut self, start: &BytesStart) -> Result<(), ExtractError> {
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| ExtractError::malformed(e.to_string(), 0))?;
            if let Some(prefix) = declared_prefix(key) {
                let uri = attr
                    .unescape_value()
                    .map_err(|e| ExtractError::malformed(e.to_string(), 0))?
                    .into_owned();
                trace!(prefix, uri = uri.as_str(), "Namespace declaration");
                self.insert(prefix, uri);
            }
        }
        Ok(())
    }

    /// Bind a prefix; an empty prefix is the default namespace.
    pub fn insert(&mut self, prefix: &str, uri: impl Into<String>) {
        let key = if prefix.is_empty() {
            DEFAULT_NAMESPACE_KEY
        } else {
            prefix
        };
        let uri = uri.into();
        let history = self.bound.entry(key.to_string()).or_default();
        if !history.contains(&uri) {
            history.push(uri.clone());
        }
        self.prefixes.insert(key.to_string(), uri);
    }

    /// Look up the URI bound to a prefix
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// URI of the default namespace, if one was declared
    pub fn default_namespace(&self) -> Option<&str> {
        self.get(DEFAULT_NAMESPACE_KEY)
    }

    /// Every URI the prefix was bound to, in first-declaration order
    pub fn uris(&self, prefix: &str) -> impl Iterator<Item = &str> {
        self.bound
            .get(prefix)
            .into_iter()
            .flat_map(|uris| uris.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Character data or a reference, which may only appear inside the root
/// element. Whitespace between prolog items is allowed.
pub(crate) fn is_stray_content(event: &Event) -> bool {
    match event {
        Event::Text(text) => !text.iter().all(u8::is_ascii_whitespace),
        Event::CData(_) | Event::GeneralRef(_) => true,
        _ => false,
    }
}

/// Prefix declared by an attribute key, `""` for the default namespace
pub(crate) fn declared_prefix(key: &str) -> Option<&str> {
    if key == "xmlns" {
        Some("")
    } else {
        key.strip_prefix("xmlns:")
    }
}

/// Clark notation for a namespaced name
pub fn clark(uri: &str, local: &str) -> String {
    format!("{{{uri}}}{local}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_nested_declarations() {
        let xml = r#"<root xmlns:xmi="http://www.omg.org/XMI">
            <a xmlns:trufun="http://www.trufun.net/">
                <b xmlns="urn:default"/>
            </a>
        </root>"#;
        let map = NamespaceMap::from_document(xml).unwrap();
        assert_eq!(map.get("xmi"), Some("http://www.omg.org/XMI"));
        assert_eq!(map.get("trufun"), Some("http://www.trufun.net/"));
        assert_eq!(map.default_namespace(), Some("urn:default"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_last_declaration_wins() {
        let xml = r#"<r xmlns:p="urn:one"><c xmlns:p="urn:two"/></r>"#;
        let map = NamespaceMap::from_document(xml).unwrap();
        assert_eq!(map.get("p"), Some("urn:two"));
    }

    #[test]
    fn test_redeclared_prefix_keeps_every_uri() {
        let xml = r#"<r xmlns:p="urn:one"><c xmlns:p="urn:two"/><d xmlns:p="urn:one"/></r>"#;
        let map = NamespaceMap::from_document(xml).unwrap();
        assert_eq!(map.uris("p").collect::<Vec<_>>(), vec!["urn:one", "urn:two"]);
        assert_eq!(map.uris("q").count(), 0);
    }

    #[test]
    fn test_default_prefix_does_not_shadow_default_namespace() {
        let xml = r#"<r xmlns="urn:plain" xmlns:default="urn:prefixed"/>"#;
        let map = NamespaceMap::from_document(xml).unwrap();
        assert_eq!(map.default_namespace(), Some("urn:plain"));
        assert_eq!(map.get("default"), Some("urn:prefixed"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_text_outside_root_fails() {
        for bad in ["<a/>junk", "junk<a/>", "<a/><![CDATA[x]]>", "<a/>&amp;"] {
            let err = NamespaceMap::from_document(bad).unwrap_err();
            assert!(matches!(err, ExtractError::MalformedDocument { .. }), "{bad:?}");
        }
        assert!(NamespaceMap::from_document("\n<a/>\n  ").is_ok());
    }

    #[test]
    fn test_malformed_input_fails() {
        let err = NamespaceMap::from_document("<a><b></a>").unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, ExtractError::MalformedDocument { .. }));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(NamespaceMap::from_document("").is_err());
        assert!(NamespaceMap::from_document("   ").is_err());
    }
}
