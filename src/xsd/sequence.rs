use tracing::trace;

use super::{
    error::XsdError,
    mapping_context::MappingContext,
    tree::SchemaNode,
    types::{NamedProperty, Property},
};

/// How often an element of a sequence may occur, as far as the generated shape is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Occurrence {
    Single,
    Repeated,
}

impl Occurrence {
    /// `maxOccurs` absent or `1` is a single value; anything else (a larger count, `unbounded`,
    /// or a value we can't read) is treated as a list.
    fn from_max_occurs(max_occurs: Option<&str>) -> Self {
        match max_occurs.map(str::trim) {
            None => Self::Single,
            Some(value) if value.parse::<u64>() == Ok(1) => Self::Single,
            Some(_) => Self::Repeated,
        }
    }
}

fn is_optional(min_occurs: Option<&str>) -> bool {
    min_occurs.is_some_and(|value| value.trim().parse::<u64>() == Ok(0))
}

/// Map the `<element>` children of a `<sequence>` to properties, in declaration order.
pub(super) fn transform_sequence<N: SchemaNode>(
    context: &MappingContext,
    sequence: N,
) -> Result<Vec<NamedProperty>, XsdError> {
    let elements = sequence.children_named(&context.keyword("element"));
    if elements.is_empty() {
        return Err(XsdError::MalformedSequence {
            node: sequence.source_text(),
        });
    }

    elements
        .into_iter()
        .map(|element| transform_sequence_element(context, element))
        .collect()
}

fn transform_sequence_element<N: SchemaNode>(
    context: &MappingContext,
    element: N,
) -> Result<NamedProperty, XsdError> {
    let name = element.required_attribute("name")?;
    let type_ = element.required_attribute("type")?;

    let property = match Occurrence::from_max_occurs(element.attribute("maxOccurs")) {
        Occurrence::Single => {
            let resolved = context.resolve(type_);
            match context.array_item(&resolved) {
                Some(items) => NamedProperty::new(name, Property::array(items)),
                None => NamedProperty::new(name, resolved)
                    .nullable(is_optional(element.attribute("minOccurs"))),
            }
        }
        Occurrence::Repeated => NamedProperty::new(name, Property::array(context.resolve(type_))),
    };
    trace!(name, type_ = property.property.type_name(), "mapped sequence element");
    Ok(property)
}
