use serde::Serialize;

use super::{error::XsdError, tree::SchemaNode};

/// Namespace of the schema keywords (XSD 1.1 Part 1, §1.3.1)
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Prefix conventionally bound to the schema's own target namespace.
pub const TARGET_NAMESPACE_PREFIX: &str = "tns";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamespaceBinding {
    pub prefix: String,
    pub uri: String,
}

impl NamespaceBinding {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

pub struct SchemaAndNamespaces<N> {
    pub schema: N,
    pub namespaces: Vec<NamespaceBinding>,
}

/// Locate the `<prefix:schema>` root and collect the namespace bindings declared on it.
///
/// Whatever prefix the document chose for the XSD namespace is accepted, but it has to be a
/// prefix: an unprefixed root element does not qualify.
pub fn detect_schema_and_namespaces<N: SchemaNode>(
    root: N,
) -> Result<SchemaAndNamespaces<N>, XsdError> {
    let name = root.qualified_name();
    match name.split_once(':') {
        Some((prefix, "schema")) if !prefix.is_empty() => Ok(SchemaAndNamespaces {
            schema: root,
            namespaces: root.namespaces(),
        }),
        _ => Err(XsdError::MissingSchemaRoot(name)),
    }
}

/// The prefix bound to [`XSD_NAMESPACE`]. The first binding wins if there are several.
pub fn xsd_prefix(namespaces: &[NamespaceBinding]) -> Result<&str, XsdError> {
    namespaces
        .iter()
        .find(|binding| binding.uri == XSD_NAMESPACE)
        .map(|binding| binding.prefix.as_str())
        .ok_or(XsdError::MissingXsdNamespace)
}

pub fn has_target_namespace(namespaces: &[NamespaceBinding]) -> bool {
    namespaces
        .iter()
        .any(|binding| binding.prefix == TARGET_NAMESPACE_PREFIX)
}
