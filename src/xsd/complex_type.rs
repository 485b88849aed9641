use tracing::debug;

use super::{
    error::XsdError, mapping_context::MappingContext, sequence::transform_sequence,
    tree::SchemaNode, types::ComplexType,
};

/// Map a complex type declaration, either a named top-level `<complexType>` or one nested
/// inline in a top-level `<element>`. `name` comes from whichever of the two carries it.
///
/// Three shapes are understood:
/// - a direct `<sequence>`: its elements become the properties;
/// - `<complexContent><extension base="..">`: the base is recorded and the extension's own
///   `<sequence>`, if any, provides the properties;
/// - anything else: an empty type.
pub(super) fn transform_complex_type<N: SchemaNode>(
    context: &MappingContext,
    name: &str,
    declaration: N,
) -> Result<ComplexType, XsdError> {
    if let Some(sequence) = declaration.first_child_named(&context.keyword("sequence")) {
        return Ok(ComplexType {
            name: name.into(),
            properties: transform_sequence(context, sequence)?,
            base: None,
        });
    }

    let Some(complex_content) = declaration.first_child_named(&context.keyword("complexContent"))
    else {
        return Ok(ComplexType::empty(name));
    };

    let extension = complex_content
        .first_child_named(&context.keyword("extension"))
        .ok_or_else(|| XsdError::MalformedComplexContent {
            node: complex_content.source_text(),
        })?;

    let properties = match extension.first_child_named(&context.keyword("sequence")) {
        Some(sequence) => transform_sequence(context, sequence)?,
        None => Vec::new(),
    };
    let base = context.resolve(extension.required_attribute("base")?);

    Ok(ComplexType {
        name: name.into(),
        properties,
        base: Some(base),
    })
}

pub(super) fn transform_named_complex_type<N: SchemaNode>(
    context: &MappingContext,
    declaration: N,
) -> Result<ComplexType, XsdError> {
    let name = declaration.required_attribute("name")?;
    let complex_type = transform_complex_type(context, name, declaration)?;
    debug!(name, properties = complex_type.properties.len(), "transformed complex type");
    Ok(complex_type)
}

/// Map a top-level `<element>`. Without an inline `<complexType>` the element still yields an
/// empty placeholder type of the same name.
pub(super) fn transform_element<N: SchemaNode>(
    context: &MappingContext,
    element: N,
) -> Result<ComplexType, XsdError> {
    let name = element.required_attribute("name")?;
    let complex_type =
        match element.first_child_named(&context.keyword(ComplexType::TAG_NAME)) {
            Some(declaration) => transform_complex_type(context, name, declaration)?,
            None => ComplexType::empty(name),
        };
    debug!(name, properties = complex_type.properties.len(), "transformed element");
    Ok(complex_type)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::xsd::{
        test_util::{simplify_str, wrap_schema},
        types::{NamedProperty, Property, ScalarKind},
    };

    #[test]
    fn sequence_content() {
        let xsd = wrap_schema(
            r#"<xs:complexType name="Order">
                 <xs:sequence>
                   <xs:element name="id" type="xs:int"/>
                   <xs:element name="items" type="xs:string" maxOccurs="unbounded"/>
                 </xs:sequence>
               </xs:complexType>"#,
        );
        let schema = simplify_str(&xsd).unwrap();
        assert_eq!(
            schema.complex_types,
            vec![ComplexType {
                name: "Order".into(),
                properties: vec![
                    NamedProperty::new("id", Property::Scalar(ScalarKind::Number)),
                    NamedProperty::new(
                        "items",
                        Property::array(Property::Scalar(ScalarKind::String))
                    ),
                ],
                base: None,
            }]
        );
    }

    #[test]
    fn extension_strips_target_namespace() {
        let xsd = wrap_schema(
            r#"<xs:complexType name="Derived">
                 <xs:complexContent>
                   <xs:extension base="tns:Base">
                     <xs:sequence><xs:element name="extra" type="xs:boolean"/></xs:sequence>
                   </xs:extension>
                 </xs:complexContent>
               </xs:complexType>
               <xs:complexType name="Marker">
                 <xs:complexContent><xs:extension base="tns:Base"/></xs:complexContent>
               </xs:complexType>"#,
        );
        let schema = simplify_str(&xsd).unwrap();
        let derived = &schema.complex_types[0];
        assert_eq!(derived.base, Some(Property::Reference("Base".into())));
        assert_eq!(
            derived.properties,
            vec![NamedProperty::new("extra", Property::Scalar(ScalarKind::Boolean))]
        );
        let marker = &schema.complex_types[1];
        assert_eq!(marker.base, Some(Property::Reference("Base".into())));
        assert!(marker.properties.is_empty());
    }

    #[test]
    fn extension_keeps_tns_without_binding() {
        let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
              <xs:complexType name="Derived">
                <xs:complexContent><xs:extension base="tns:Base"/></xs:complexContent>
              </xs:complexType>
            </xs:schema>"#;
        let schema = simplify_str(xsd).unwrap();
        assert_eq!(
            schema.complex_types[0].base,
            Some(Property::Reference("tns:Base".into()))
        );
    }

    #[test]
    fn complex_content_without_extension() {
        let xsd = wrap_schema(
            r#"<xs:complexType name="Restricted">
                 <xs:complexContent><xs:restriction base="tns:Base"/></xs:complexContent>
               </xs:complexType>"#,
        );
        let err = simplify_str(&xsd).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Expected <complexContent> to contain <extension>, got: <xs:complexContent><xs:restriction base="tns:Base"/></xs:complexContent>"#
        );
    }

    #[test]
    fn content_free_types_are_empty() {
        let xsd = wrap_schema(
            r#"<xs:complexType name="Abstract" abstract="true"/>
               <xs:element name="Ping"/>
               <xs:element name="Typed" type="tns:Abstract"/>"#,
        );
        let schema = simplify_str(&xsd).unwrap();
        assert_eq!(
            schema.complex_types,
            vec![
                ComplexType::empty("Abstract"),
                ComplexType::empty("Ping"),
                ComplexType::empty("Typed"),
            ]
        );
    }

    #[test]
    fn inline_element_types_share_the_complex_type_logic() {
        let xsd = wrap_schema(
            r#"<xs:element name="GetOrderRequest">
                 <xs:complexType>
                   <xs:sequence><xs:element name="orderId" type="xs:positiveInteger"/></xs:sequence>
                 </xs:complexType>
               </xs:element>
               <xs:element name="GetOrderResponse">
                 <xs:complexType>
                   <xs:complexContent><xs:extension base="tns:Response"/></xs:complexContent>
                 </xs:complexType>
               </xs:element>"#,
        );
        let schema = simplify_str(&xsd).unwrap();
        assert_eq!(
            schema.complex_types,
            vec![
                ComplexType {
                    name: "GetOrderRequest".into(),
                    properties: vec![NamedProperty::new(
                        "orderId",
                        Property::Scalar(ScalarKind::Number)
                    )],
                    base: None,
                },
                ComplexType {
                    name: "GetOrderResponse".into(),
                    properties: vec![],
                    base: Some(Property::Reference("Response".into())),
                },
            ]
        );
    }
}
