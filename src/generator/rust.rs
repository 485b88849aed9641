use std::collections::HashSet;

use check_keyword::CheckKeyword;
use heck::{ToPascalCase, ToSnakeCase};
use quote::{format_ident, quote};
use syn::{parse_quote, Ident, Item, Type};

use crate::xsd::{ComplexType, Property, ScalarKind, SimpleType, TransformedSchema};

fn name_to_ident(name: &str) -> Ident {
    if ["crate", "self", "super", "Self"].contains(&name) {
        // These are keywords that are not allowed as raw identifiers
        format_ident!("{}_", name)
    } else if name.is_keyword() {
        format_ident!("r#{}", name)
    } else {
        format_ident!("{}", name)
    }
}

/// Case conversion can leave an empty name or one starting with a digit, neither of which is an
/// identifier.
fn with_valid_start(name: String, prefix: &str) -> String {
    match name.chars().next() {
        None => prefix.to_owned(),
        Some(c) if c.is_ascii_digit() => format!("{prefix}{name}"),
        Some(_) => name,
    }
}

fn type_ident(name: &str) -> Ident {
    // Unresolved qualified names keep only their local part
    let local_name = name.rsplit(':').next().unwrap_or(name);
    name_to_ident(&with_valid_start(local_name.to_pascal_case(), "Type"))
}

fn field_ident(name: &str) -> Ident {
    name_to_ident(&with_valid_start(name.to_snake_case(), "field_"))
}

fn variant_idents(values: &[String]) -> Vec<(Ident, &str)> {
    let mut seen = HashSet::new();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let base = with_valid_start(value.to_pascal_case(), "V");
            let mut name = base.clone();
            let mut suffix = i;
            // Suffixed names can collide with other literals too
            while !seen.insert(name.clone()) {
                name = format!("{base}{suffix}");
                suffix += 1;
            }
            (name_to_ident(&name), value.as_str())
        })
        .collect()
}

fn scalar_type(kind: ScalarKind) -> Type {
    match kind {
        ScalarKind::String => parse_quote!(String),
        ScalarKind::Number => parse_quote!(f64),
        ScalarKind::Boolean => parse_quote!(bool),
    }
}

/// `owner` is the struct the type is used in; direct self references are boxed.
fn property_type(property: &Property, owner: Option<&str>) -> Type {
    match property {
        Property::Scalar(kind) => scalar_type(*kind),
        Property::Reference(name) => {
            let ident = type_ident(name);
            if owner == Some(name.as_str()) {
                parse_quote!(Box<#ident>)
            } else {
                parse_quote!(#ident)
            }
        }
        Property::Array(items) => {
            let items = property_type(items, None);
            parse_quote!(Vec<#items>)
        }
    }
}

fn complex_type_item(complex_type: &ComplexType) -> Item {
    let name = type_ident(&complex_type.name);
    let owner = Some(complex_type.name.as_str());

    let base = complex_type.base.as_ref().map(|base| {
        let type_ = property_type(base, owner);
        quote!(pub base: #type_)
    });
    let fields = complex_type.properties.iter().map(|property| {
        let ident = field_ident(&property.name);
        let mut type_ = property_type(&property.property, owner);
        if property.nullable {
            type_ = parse_quote!(Option<#type_>);
        }
        quote!(pub #ident: #type_)
    });
    let fields = base.into_iter().chain(fields);

    parse_quote! {
        #[derive(Clone, Debug, PartialEq)]
        pub struct #name {
            #(#fields,)*
        }
    }
}

fn simple_type_item(simple_type: &SimpleType) -> Item {
    let name = type_ident(&simple_type.name);
    match &simple_type.enumeration {
        Some(values) => {
            let variants = variant_idents(values).into_iter().map(|(ident, value)| {
                if ident == value {
                    quote!(#ident)
                } else {
                    quote!(#[doc = #value] #ident)
                }
            });
            parse_quote! {
                #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
                pub enum #name {
                    #(#variants,)*
                }
            }
        }
        None => {
            let type_ = property_type(&simple_type.type_, None);
            parse_quote!(pub type #name = #type_;)
        }
    }
}

pub fn generate(schema: &TransformedSchema) -> String {
    let items = schema
        .complex_types
        .iter()
        .map(complex_type_item)
        .chain(schema.simple_types.iter().map(simple_type_item))
        .collect();

    let root = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items,
    };
    prettyplease::unparse(&root)
}
