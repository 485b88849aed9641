//! Generates DTO type declarations from XSD schemas.
//!
//! The pipeline runs strictly in sequence: the schema is loaded and parsed, normalized into a
//! flat [`xsd::TransformedSchema`], rendered by a [`generator::Generator`] and finally written
//! out. Any structural problem in the schema aborts the run before anything is written.

pub mod error;
pub mod generator;
pub mod loader;
pub mod xsd;

use std::{io::Write, path::Path};

use tracing::info;

pub use error::{Error, Result};
use generator::{source_file::SourceFile, Generator};
use xsd::SimplifyOptions;

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub generator: Generator,
    /// Allow a Document Type Definition in the schema document.
    pub allow_dtd: bool,
    pub simplify: SimplifyOptions,
    /// Emit the normalized schema as JSON instead of declarations.
    pub dump_model: bool,
}

/// Render the schema text according to `config`.
pub fn render(text: &str, config: &Config) -> Result<String> {
    let schema = xsd::read_schema(text, config.allow_dtd, &config.simplify)?;
    if config.dump_model {
        let mut json = serde_json::to_string_pretty(&schema)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(config.generator.generate(&schema))
    }
}

/// Convert the schema at `input` (a path or URL) and write the result to `output`, or to stdout
/// if no output is given.
pub fn transform(input: &str, output: Option<&Path>, config: &Config) -> Result<()> {
    info!(input, "transforming schema");
    let text = loader::load(input)?;
    let rendered = render(&text, config)?;

    match output {
        Some(path) => SourceFile::new(path, rendered)
            .save()
            .map_err(|source| Error::Write {
                path: path.to_owned(),
                source,
            }),
        None => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(|source| Error::Write {
                path: "<stdout>".into(),
                source,
            }),
    }
}
