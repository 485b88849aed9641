//! The flat intermediate model produced by the normalizer. Nothing in here knows about XML or
//! namespaces anymore.

use std::fmt;

use serde::{ser::SerializeMap, Serialize, Serializer};

/// Built-in scalar kinds every XSD builtin we support collapses to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Property {
    Scalar(ScalarKind),
    /// A type that is not a known builtin: another declared type, or an unresolved qualified
    /// name passed through as-is.
    Reference(String),
    Array(Box<Property>),
}

impl Property {
    pub fn array(items: Property) -> Self {
        Self::Array(Box::new(items))
    }

    /// The flat type name of this property; arrays are just `array`.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Scalar(kind) => kind.as_str(),
            Self::Reference(name) => name,
            Self::Array(_) => "array",
        }
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.type_name())?;
        if let Self::Array(items) = self {
            map.serialize_entry("items", items)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedProperty {
    pub name: String,
    #[serde(flatten)]
    pub property: Property,
    /// Set when the element was declared with `minOccurs="0"`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl NamedProperty {
    pub fn new(name: impl Into<String>, property: Property) -> Self {
        Self {
            name: name.into(),
            property,
            nullable: false,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimpleType {
    pub name: String,
    /// The resolved restriction base; always a scalar or a reference.
    #[serde(rename = "type")]
    pub type_: Property,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,
}

impl SimpleType {
    pub const TAG_NAME: &'static str = "simpleType";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComplexType {
    pub name: String,
    pub properties: Vec<NamedProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<Property>,
}

impl ComplexType {
    pub const TAG_NAME: &'static str = "complexType";

    /// A type without content, e.g. an abstract marker or an untyped top-level element.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            base: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedSchema {
    pub complex_types: Vec<ComplexType>,
    pub simple_types: Vec<SimpleType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_like_the_flat_model() {
        let property = NamedProperty::new(
            "items",
            Property::array(Property::Scalar(ScalarKind::String)),
        );
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "items", "type": "array", "items": {"type": "string"}})
        );

        let property = NamedProperty::new("note", Property::Reference("Note".into())).nullable(true);
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "note", "type": "Note", "nullable": true})
        );
    }
}
