use tracing::debug;

use super::{
    error::XsdError, mapping_context::MappingContext, tree::SchemaNode, types::SimpleType,
};

/// Map a top-level `<simpleType>`. Only restrictions are understood; the restriction's
/// enumeration facets, if any, become the allowed literals in document order.
pub(super) fn transform_simple_type<N: SchemaNode>(
    context: &MappingContext,
    declaration: N,
) -> Result<SimpleType, XsdError> {
    let name = declaration.required_attribute("name")?;
    let restriction = declaration
        .first_child_named(&context.keyword("restriction"))
        .ok_or_else(|| XsdError::MissingRestriction { name: name.into() })?;

    let type_ = context.resolve(restriction.required_attribute("base")?);

    let enumeration = restriction
        .children_named(&context.keyword("enumeration"))
        .into_iter()
        .map(|facet| facet.required_attribute("value").map(str::to_owned))
        .collect::<Result<Vec<_>, _>>()?;
    let enumeration = (!enumeration.is_empty()).then_some(enumeration);

    debug!(name, "transformed simple type");
    Ok(SimpleType {
        name: name.into(),
        type_,
        enumeration,
    })
}
