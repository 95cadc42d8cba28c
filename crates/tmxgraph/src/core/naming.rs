//! Shared naming helpers
//!
//! String cleanup used by the identity index and every extractor: prefix
//! stripping, stereotype decoration removal, label casing and the fixed
//! placeholder formats.

use super::document::RawElement;
use super::vocabulary::{ALIAS_ATTR, NAME_ATTR, STEREOTYPE_NODES_TAG, SUB_LABEL_TAG};

/// Suffix marking a name derived from a declared type rather than a real name
pub const TYPE_SUFFIX: &str = " (type)";

/// Placeholder for a connection endpoint missing from the naming table
pub fn unknown_node(id: &str) -> String {
    format!("unknown node (id: {id})")
}

/// Placeholder for an identified element with no usable name at all
pub fn unknown_element(id: &str) -> String {
    format!("unknown-element (id: {id})")
}

/// Whether a resolved name is a real name rather than a type descriptor or
/// a placeholder
pub fn is_meaningful(name: &str) -> bool {
    !name.is_empty() && !name.ends_with(TYPE_SUFFIX) && !name.starts_with("unknown-element (")
}

/// Strip a namespace (`{uri}local`) or prefix (`trufun:TNode`) from a name
pub fn strip_prefix(value: &str) -> &str {
    let value = value.rsplit('}').next().unwrap_or(value);
    value.rsplit(':').next().unwrap_or(value).trim()
}

/// Clean a declared element-type: drop the prefix and the vendor `T` marker.
///
/// `trufun:TUseCaseNode` becomes `UseCaseNode`.
pub fn clean_type(declared: &str) -> &str {
    let local = strip_prefix(declared);
    let mut chars = local.chars();
    match (chars.next(), chars.next()) {
        (Some('T'), Some(next)) if next.is_ascii_uppercase() => &local[1..],
        _ => local,
    }
}

/// Clean a declared connection type into a relation label.
///
/// `trufun:TGeneralizeConnection` becomes `Generalize`,
/// `trufun:TMessageConnection_SD` becomes `Message`.
pub fn clean_connection_type(declared: &str) -> String {
    let cleaned = clean_type(declared);
    let cleaned = cleaned.strip_suffix("_SD").unwrap_or(cleaned);
    let cleaned = cleaned.strip_suffix("Connection").unwrap_or(cleaned);
    if cleaned.is_empty() {
        clean_type(declared).to_string()
    } else {
        cleaned.to_string()
    }
}

/// Type-descriptor name used when an element has nothing better
pub fn type_descriptor(declared: &str) -> String {
    format!("{}{}", clean_type(declared), TYPE_SUFFIX)
}

/// Remove stereotype decoration: `<<derive>>` becomes `derive`
pub fn strip_stereotype(value: &str) -> &str {
    value
        .trim()
        .trim_start_matches(&['<', '«'][..])
        .trim_end_matches(&['>', '»'][..])
        .trim()
}

/// Upper-case the first letter of every word, leaving the rest untouched
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last dotted segment: `SysML.IBD.Connector` becomes `Connector`
pub fn last_segment(value: &str) -> &str {
    value.rsplit('.').next().unwrap_or(value).trim()
}

/// Split a camel-case identifier into words: `PackageImport` becomes
/// `Package Import`
pub fn split_camel(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut prev_lower = false;
    for c in value.chars() {
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.push(c);
    }
    out
}

/// Name with decorative colons and tildes removed (ports, pins)
pub fn strip_port_decoration(value: &str) -> String {
    value
        .replace(|c: char| c == ':' || c == '~', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name with the leading `: ` of an anonymous typed property removed
pub fn strip_leading_colon(value: &str) -> &str {
    value.trim_start_matches(&[':', ' '][..]).trim()
}

/// Name part of a typed declaration: `p1 : Real` becomes `p1`
pub fn name_before_type(value: &str) -> &str {
    value.split(':').next().unwrap_or(value).trim()
}

/// Name of the first direct sub-label with the given alias
pub fn sub_label<'e>(element: &'e RawElement, alias: &str) -> Option<&'e str> {
    element
        .children_named(SUB_LABEL_TAG)
        .find(|label| label.attr(ALIAS_ATTR) == Some(alias))
        .and_then(|label| label.non_empty_attr(NAME_ATTR))
}

/// Name carried by a nested decorative stereotype label, undecorated
pub fn stereotype_label(element: &RawElement) -> Option<&str> {
    element
        .first_child(STEREOTYPE_NODES_TAG)
        .and_then(|label| label.non_empty_attr(NAME_ATTR))
        .map(strip_stereotype)
        .filter(|name| !name.is_empty())
}

/// Generic name for nodes without a kind-specific rule
pub fn other_node(declared: &str, name: Option<&str>, id: &str) -> String {
    match name {
        Some(name) => format!("other node ({}): {name}", clean_type(declared)),
        None => format!("other node ({}): id {id}", clean_type(declared)),
    }
}
