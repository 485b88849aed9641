//! Declaration emitter: renders a [`TransformedSchema`] in one of the supported target
//! languages.

pub mod declarations;
pub mod source_file;

#[cfg(feature = "generator-rust")]
mod rust;
#[cfg(feature = "generator-typescript")]
pub mod typescript;

#[cfg(not(any(feature = "generator-rust", feature = "generator-typescript")))]
compile_error!("At least one generator must be enabled");

use clap::ValueEnum;
use tracing::info;

use crate::xsd::TransformedSchema;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Generator {
    #[cfg(feature = "generator-rust")]
    Rust,
    #[cfg(feature = "generator-typescript")]
    Typescript,
}

impl Default for Generator {
    #[cfg(feature = "generator-typescript")]
    fn default() -> Self {
        Self::Typescript
    }

    #[cfg(not(feature = "generator-typescript"))]
    fn default() -> Self {
        Self::Rust
    }
}

impl Generator {
    pub fn generate(&self, schema: &TransformedSchema) -> String {
        info!(generator = ?self, "emitting declarations");
        match *self {
            #[cfg(feature = "generator-rust")]
            Self::Rust => rust::generate(schema),
            #[cfg(feature = "generator-typescript")]
            Self::Typescript => typescript::generate(schema),
        }
    }
}
