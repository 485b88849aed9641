use std::{io, path::PathBuf};

use thiserror::Error;

use crate::xsd::XsdError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid schema")]
    Schema(#[from] XsdError),

    #[error("Failed to serialize the schema model")]
    Model(#[from] serde_json::Error),

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
