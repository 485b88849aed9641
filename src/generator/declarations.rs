//! Output declaration descriptors, independent of how they are finally printed.

use crate::xsd::{Property, TransformedSchema};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySignature {
    pub name: String,
    pub type_: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub properties: Vec<PropertySignature>,
    pub extends: Vec<String>,
    pub is_exported: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAliasDeclaration {
    pub name: String,
    pub type_: String,
    pub is_exported: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    Interface(InterfaceDeclaration),
    TypeAlias(TypeAliasDeclaration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(interface) => &interface.name,
            Self::TypeAlias(alias) => &alias.name,
        }
    }
}

fn type_expression(property: &Property) -> String {
    match property {
        Property::Array(items) => format!("Array<{}>", type_expression(items)),
        other => other.type_name().to_owned(),
    }
}

fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            literal.push('\\');
        }
        literal.push(c);
    }
    literal.push('"');
    literal
}

/// Build the declarations for `schema`: one exported interface per complex type, followed by
/// one exported type alias per simple type.
pub fn compile(schema: &TransformedSchema) -> Vec<Declaration> {
    let interfaces = schema.complex_types.iter().map(|item| {
        Declaration::Interface(InterfaceDeclaration {
            name: item.name.clone(),
            properties: item
                .properties
                .iter()
                .map(|property| PropertySignature {
                    name: property.name.clone(),
                    type_: type_expression(&property.property),
                })
                .collect(),
            extends: item
                .base
                .iter()
                .map(|base| base.type_name().to_owned())
                .collect(),
            is_exported: true,
        })
    });

    let aliases = schema.simple_types.iter().map(|item| {
        let type_ = match &item.enumeration {
            Some(values) => values
                .iter()
                .map(|value| string_literal(value))
                .collect::<Vec<_>>()
                .join(" | "),
            None => item.type_.type_name().to_owned(),
        };
        Declaration::TypeAlias(TypeAliasDeclaration {
            name: item.name.clone(),
            type_,
            is_exported: true,
        })
    });

    interfaces.chain(aliases).collect()
}
