use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{namespaces::TARGET_NAMESPACE_PREFIX, types::Property, types::ScalarKind};

lazy_static! {
    /// XSD builtins (by local name) that map onto a scalar kind. Everything else passes through.
    static ref BUILTIN_SCALARS: HashMap<&'static str, ScalarKind> = {
        [
            ("string", ScalarKind::String),
            ("dateTime", ScalarKind::String),
            ("base64Binary", ScalarKind::String),
            ("integer", ScalarKind::Number),
            ("int", ScalarKind::Number),
            ("long", ScalarKind::Number),
            ("short", ScalarKind::Number),
            ("positiveInteger", ScalarKind::Number),
            ("decimal", ScalarKind::Number),
            ("double", ScalarKind::Number),
            ("boolean", ScalarKind::Boolean),
        ]
        .into_iter()
        .collect()
    };
}

/// Resolves the type names found in `type`/`base` attributes.
///
/// This is a plain string lookup: it neither knows nor cares which schema keyword the name came
/// from.
#[derive(Clone, Debug)]
pub struct TypeResolver {
    xsd_prefix: String,
    has_target_namespace: bool,
}

impl TypeResolver {
    pub fn new(xsd_prefix: impl Into<String>, has_target_namespace: bool) -> Self {
        Self {
            xsd_prefix: xsd_prefix.into(),
            has_target_namespace,
        }
    }

    pub fn resolve(&self, name: &str) -> Property {
        if let Some(kind) = self.builtin(name) {
            return Property::Scalar(kind);
        }
        Property::Reference(self.strip_target_namespace(name).to_owned())
    }

    fn builtin(&self, name: &str) -> Option<ScalarKind> {
        let (prefix, local_name) = name.split_once(':')?;
        if prefix != self.xsd_prefix {
            return None;
        }
        BUILTIN_SCALARS.get(local_name).copied()
    }

    /// `tns:Foo` becomes `Foo`, but only if the schema actually binds `tns`. Otherwise the name
    /// is left qualified.
    fn strip_target_namespace<'n>(&self, name: &'n str) -> &'n str {
        match name.split_once(':') {
            Some((TARGET_NAMESPACE_PREFIX, local_name))
                if self.has_target_namespace && !local_name.is_empty() =>
            {
                local_name
            }
            _ => name,
        }
    }
}
