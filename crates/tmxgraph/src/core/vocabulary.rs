//! Tag and attribute names of the modeling-tool export format

/// Local tag of a diagram container
pub const CONTAINER_TAG: &str = "contents";
/// Local tag of a graphical node
pub const NODE_TAG: &str = "nodes";
/// Local tag of a graphical connection
pub const CONNECTION_TAG: &str = "connections";
/// Local tag of a decorative text label attached to a node or connection
pub const SUB_LABEL_TAG: &str = "subLabels";
/// Local tag of a decorative stereotype label
pub const STEREOTYPE_NODES_TAG: &str = "stereotypeNodes";
pub const ANNOTATIONS_TAG: &str = "eAnnotations";
pub const DETAILS_TAG: &str = "details";

pub const NAME_ATTR: &str = "name";
pub const STEREOTYPE_ATTR: &str = "stereotype";
pub const TYPE_ATTR: &str = "type";
pub const SOURCE_ATTR: &str = "source";
pub const TARGET_ATTR: &str = "target";
pub const OWNER_ATTR: &str = "owner";
pub const MODEL_ELEMENT_ATTR: &str = "modelElement";
pub const ALIAS_ATTR: &str = "alias";
pub const KEY_ATTR: &str = "key";
pub const VALUE_ATTR: &str = "value";

/// Prefix under which the identity and declared-type attributes live
pub const XMI_PREFIX: &str = "xmi";
pub const XMI_ID_LOCAL: &str = "id";
pub const XMI_TYPE_LOCAL: &str = "type";

/// Sub-label aliases
pub const ALIAS_NAME: &str = "Name";
pub const ALIAS_GUARD: &str = "Guard";
pub const ALIAS_STEREOTYPE: &str = "Stereotype";
pub const ALIAS_FIXED_NAME: &str = "FixedName";

/// Declared type of purely decorative labels
pub const SUB_LABEL_TYPE: &str = "SubLabel";
/// Declared type of table views, which share the container tag with diagrams
pub const TABLE_TYPE: &str = "TTable";

/// `type` of a row inside a list compartment
pub const COMPARTMENT_CHILD_TYPE: &str = "ListCompartmentChild";
/// `type` values of list compartments that group a node's properties
pub const COMPARTMENT_TYPES: &[&str] = &[
    "stereotype_properties",
    "value_properties",
    "part_properties",
    "constraint_properties",
    "attributes",
    "operations",
];

/// Declared type of comment nodes, shared by every diagram kind
pub const COMMENT_NODE_TYPE: &str = "TCommentNode";
/// `type` of a comment node that links to another element
pub const HYPERLINK_TYPE: &str = "HyperLink";
