use crate::xsd::TransformedSchema;

use super::declarations::{self, Declaration, InterfaceDeclaration, TypeAliasDeclaration};

const INDENT: &str = "    ";

fn export_keyword(is_exported: bool) -> &'static str {
    if is_exported {
        "export "
    } else {
        ""
    }
}

fn write_interface(out: &mut String, interface: &InterfaceDeclaration) {
    out.push_str(&format!(
        "{}interface {}",
        export_keyword(interface.is_exported),
        interface.name
    ));
    if !interface.extends.is_empty() {
        out.push_str(&format!(" extends {}", interface.extends.join(", ")));
    }
    out.push_str(" {\n");
    for property in &interface.properties {
        out.push_str(&format!("{INDENT}{}: {};\n", property.name, property.type_));
    }
    out.push_str("}\n");
}

fn write_type_alias(out: &mut String, alias: &TypeAliasDeclaration) {
    out.push_str(&format!(
        "{}type {} = {};\n",
        export_keyword(alias.is_exported),
        alias.name,
        alias.type_
    ));
}

/// Print declarations as TypeScript, separated by blank lines.
pub fn render(statements: &[Declaration]) -> String {
    let mut out = String::new();
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match statement {
            Declaration::Interface(interface) => write_interface(&mut out, interface),
            Declaration::TypeAlias(alias) => write_type_alias(&mut out, alias),
        }
    }
    out
}

pub fn generate(schema: &TransformedSchema) -> String {
    render(&declarations::compile(schema))
}
