use thiserror::Error;

/// Structural errors in the input schema. Every one of them aborts the run.
#[derive(Debug, Error)]
pub enum XsdError {
    #[error("Failed to parse XML document")]
    Xml(#[from] roxmltree::Error),

    #[error("Expected a prefixed <schema> root element, got <{0}>")]
    MissingSchemaRoot(String),

    #[error("No namespace prefix is bound to http://www.w3.org/2001/XMLSchema")]
    MissingXsdNamespace,

    #[error("Expect simpleType {name:?} to have <restriction>")]
    MissingRestriction { name: String },

    #[error("Expected sequence to contain <element>, got: {node}")]
    MalformedSequence { node: String },

    #[error("Expected <complexContent> to contain <extension>, got: {node}")]
    MalformedComplexContent { node: String },

    #[error("<{element}> is missing the required attribute {attribute:?}")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
}
