//! Schema normalizer: turns an XSD document into the flat [`TransformedSchema`].
//!
//! Only the subset of XSD needed for request/response DTOs is understood: named complex types
//! with a sequence of elements, complex content extension, simple type restrictions (optionally
//! enumerated) and top-level elements.

pub mod error;
pub mod namespaces;
pub mod tree;
pub mod types;

mod builtins;
mod complex_type;
mod mapping_context;
mod sequence;
mod simple_type;

pub use builtins::TypeResolver;
pub use error::XsdError;
pub use mapping_context::{ArrayConvention, SimplifyOptions};
pub use tree::SchemaNode;
pub use types::{
    ComplexType, NamedProperty, Property, ScalarKind, SimpleType, TransformedSchema,
};

use tracing::info;

use mapping_context::MappingContext;
use namespaces::{detect_schema_and_namespaces, SchemaAndNamespaces};

/// Normalize the schema rooted at `root`.
pub fn simplify<N: SchemaNode>(
    root: N,
    options: &SimplifyOptions,
) -> Result<TransformedSchema, XsdError> {
    let SchemaAndNamespaces { schema, namespaces } = detect_schema_and_namespaces(root)?;
    let context = MappingContext::new(&namespaces, options)?;

    let mut complex_types = schema
        .children_named(&context.keyword(ComplexType::TAG_NAME))
        .into_iter()
        .map(|declaration| complex_type::transform_named_complex_type(&context, declaration))
        .collect::<Result<Vec<_>, _>>()?;

    let simple_types = schema
        .children_named(&context.keyword(SimpleType::TAG_NAME))
        .into_iter()
        .map(|declaration| simple_type::transform_simple_type(&context, declaration))
        .collect::<Result<Vec<_>, _>>()?;

    // Elements come after the named complex types
    for element in schema.children_named(&context.keyword("element")) {
        complex_types.push(complex_type::transform_element(&context, element)?);
    }

    info!(
        complex_types = complex_types.len(),
        simple_types = simple_types.len(),
        "normalized schema"
    );
    Ok(TransformedSchema {
        complex_types,
        simple_types,
    })
}

/// Parse `text` as XML and normalize it.
pub fn read_schema(
    text: &str,
    allow_dtd: bool,
    options: &SimplifyOptions,
) -> Result<TransformedSchema, XsdError> {
    let parsing_options = roxmltree::ParsingOptions {
        allow_dtd,
        ..roxmltree::ParsingOptions::default()
    };
    let document = roxmltree::Document::parse_with_options(text, parsing_options)?;
    simplify(document.root_element(), options)
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;

    /// Wrap declarations in a schema binding `xs` to XSD and `tns` to a target namespace.
    pub(crate) fn wrap_schema(body: &str) -> String {
        format!(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:tns="urn:test" targetNamespace="urn:test">{body}</xs:schema>"#
        )
    }

    pub(crate) fn simplify_str(xsd: &str) -> Result<TransformedSchema, XsdError> {
        simplify_str_with(xsd, &SimplifyOptions::default())
    }

    pub(crate) fn simplify_str_with(
        xsd: &str,
        options: &SimplifyOptions,
    ) -> Result<TransformedSchema, XsdError> {
        read_schema(xsd, false, options)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::test_util::*;
    use super::*;

    #[test]
    fn complex_types_precede_elements_in_document_order() {
        let xsd = wrap_schema(
            r#"<xs:element name="First"/>
               <xs:complexType name="A"/>
               <xs:simpleType name="S"><xs:restriction base="xs:int"/></xs:simpleType>
               <xs:element name="Second"/>
               <xs:complexType name="B"/>"#,
        );
        let schema = simplify_str(&xsd).unwrap();
        let names: Vec<_> = schema.complex_types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "First", "Second"]);
        assert_eq!(schema.simple_types.len(), 1);
    }

    #[test]
    fn nested_declarations_are_ignored() {
        // Only direct children of the schema root are declarations
        let xsd = wrap_schema(
            r#"<xs:annotation><xs:appinfo><xs:complexType name="Hidden"/></xs:appinfo></xs:annotation>"#,
        );
        assert_eq!(simplify_str(&xsd).unwrap(), TransformedSchema::default());
    }

    #[test]
    fn schema_prefix_comes_from_the_document() {
        let xsd = r#"<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema">
              <xsd:simpleType name="Flag"><xsd:restriction base="xsd:boolean"/></xsd:simpleType>
            </xsd:schema>"#;
        let schema = simplify_str(xsd).unwrap();
        assert_eq!(schema.simple_types[0].type_, Property::Scalar(ScalarKind::Boolean));
    }

    #[test]
    fn default_namespace_bound_to_xsd_as_well() {
        let xsd = r#"<xs:schema xmlns="http://www.w3.org/2001/XMLSchema" xmlns:xs="http://www.w3.org/2001/XMLSchema">
              <xs:simpleType name="Flag"><xs:restriction base="xs:boolean"/></xs:simpleType>
            </xs:schema>"#;
        let schema = simplify_str(xsd).unwrap();
        assert_eq!(
            schema.simple_types,
            [SimpleType {
                name: "Flag".into(),
                type_: Property::Scalar(ScalarKind::Boolean),
                enumeration: None,
            }]
        );
    }

    #[test]
    fn missing_xsd_namespace() {
        let xsd = r#"<x:schema xmlns:x="urn:not-xsd"/>"#;
        assert!(matches!(
            simplify_str(xsd),
            Err(XsdError::MissingXsdNamespace)
        ));
    }

    #[test]
    fn invalid_xml() {
        assert!(matches!(
            simplify_str("<xs:schema"),
            Err(XsdError::Xml(_))
        ));
    }
}
