use super::{
    builtins::TypeResolver,
    error::XsdError,
    namespaces::{self, NamespaceBinding},
    types::Property,
};

/// How single-occurrence elements whose type is named like a list are treated.
///
/// The schemas this tool targets encode "this named type is really a list of `X`" by calling the
/// type `ArrayOfX`. That is a naming convention, not an XSD feature, hence configurable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayConvention {
    Disabled,
    /// A reference named `<prefix><Inner>`, with `Inner` made of ASCII letters only, becomes an
    /// array of `Inner`.
    Prefix(String),
}

impl Default for ArrayConvention {
    fn default() -> Self {
        Self::Prefix("ArrayOf".into())
    }
}

impl ArrayConvention {
    /// The inner type name if `name` follows the convention.
    pub fn item_name<'n>(&self, name: &'n str) -> Option<&'n str> {
        let Self::Prefix(prefix) = self else {
            return None;
        };
        name.strip_prefix(prefix.as_str())
            .filter(|inner| !inner.is_empty() && inner.chars().all(|c| c.is_ascii_alphabetic()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimplifyOptions {
    pub array_convention: ArrayConvention,
}

/// State shared by all transforms of one schema document.
pub(super) struct MappingContext<'o> {
    xsd_prefix: String,
    resolver: TypeResolver,
    options: &'o SimplifyOptions,
}

impl<'o> MappingContext<'o> {
    pub(super) fn new(
        namespaces: &[NamespaceBinding],
        options: &'o SimplifyOptions,
    ) -> Result<Self, XsdError> {
        let xsd_prefix = namespaces::xsd_prefix(namespaces)?.to_owned();
        let resolver = TypeResolver::new(
            xsd_prefix.clone(),
            namespaces::has_target_namespace(namespaces),
        );
        Ok(Self {
            xsd_prefix,
            resolver,
            options,
        })
    }

    /// Qualified tag name of a schema keyword, e.g. `xs:sequence`.
    pub(super) fn keyword(&self, local_name: &str) -> String {
        format!("{}:{}", self.xsd_prefix, local_name)
    }

    pub(super) fn resolve(&self, name: &str) -> Property {
        self.resolver.resolve(name)
    }

    /// Applies the array naming convention to an already resolved type.
    pub(super) fn array_item(&self, resolved: &Property) -> Option<Property> {
        let Property::Reference(name) = resolved else {
            return None;
        };
        self.options
            .array_convention
            .item_name(name)
            .map(|inner| self.resolve(inner))
    }
}
