use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Read the schema source, either from a local file or from an HTTP(S) URL.
pub fn load(input: &str) -> Result<String> {
    if is_url(input) {
        debug!(url = input, "fetching schema");
        let fetch_error = |source: reqwest::Error| Error::Fetch {
            url: input.to_owned(),
            source,
        };
        reqwest::blocking::get(input)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(fetch_error)
    } else {
        debug!(path = input, "reading schema");
        std::fs::read_to_string(input).map_err(|source| Error::Read {
            path: Path::new(input).to_owned(),
            source,
        })
    }
}
