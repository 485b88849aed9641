//! The small slice of an XML element tree the normalizer needs.
//!
//! Schema keywords are looked up by their prefix-qualified tag name (`xs:sequence`), exactly as
//! written in the source document, so the normalizer never depends on a particular parser's
//! object shape.

use roxmltree::Node;

use super::{error::XsdError, namespaces::NamespaceBinding};

pub trait SchemaNode: Copy {
    /// The tag name including the prefix used in the document, e.g. `xs:element`. Unprefixed
    /// elements yield their bare local name.
    fn qualified_name(&self) -> String;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// The `xmlns:<prefix>` declarations in scope on this element. The reserved `xml` prefix
    /// and the default namespace are not included.
    fn namespaces(&self) -> Vec<NamespaceBinding>;

    /// Element children in document order.
    fn children(&self) -> Vec<Self>;

    /// The serialized element, used to point at the offending node in error messages.
    fn source_text(&self) -> String;

    /// All element children with the given qualified name. Empty when there are none.
    fn children_named(&self, qualified_name: &str) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(|child| child.qualified_name() == qualified_name)
            .collect()
    }

    fn first_child_named(&self, qualified_name: &str) -> Option<Self> {
        self.children()
            .into_iter()
            .find(|child| child.qualified_name() == qualified_name)
    }

    fn required_attribute(&self, name: &'static str) -> Result<&str, XsdError> {
        self.attribute(name).ok_or_else(|| XsdError::MissingAttribute {
            element: self.qualified_name(),
            attribute: name,
        })
    }
}

impl<'a, 'input: 'a> SchemaNode for Node<'a, 'input> {
    fn qualified_name(&self) -> String {
        if !self.is_element() {
            return self.tag_name().name().to_owned();
        }
        // The start tag as written; several prefixes may be bound to the same namespace
        let text = &self.document().input_text()[self.range()];
        let tag = text.strip_prefix('<').unwrap_or(text);
        let end = tag
            .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
            .unwrap_or(tag.len());
        tag[..end].to_owned()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        Node::attribute(self, name)
    }

    fn namespaces(&self) -> Vec<NamespaceBinding> {
        Node::namespaces(self)
            .filter_map(|namespace| {
                let prefix = namespace.name()?;
                // The xml prefix is bound implicitly (Namespaces in XML 1.0, §3)
                (prefix != "xml").then(|| NamespaceBinding::new(prefix, namespace.uri()))
            })
            .collect()
    }

    fn children(&self) -> Vec<Self> {
        Node::children(self)
            .filter(|child| child.is_element())
            .collect()
    }

    fn source_text(&self) -> String {
        self.document().input_text()[self.range()].to_owned()
    }
}
