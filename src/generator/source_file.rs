use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::info;

/// A generated source file waiting to be saved.
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write the file. The contents go to a temporary file next to the destination which is then
    /// renamed over it, so the destination either keeps its old contents or gets the new ones.
    pub fn save(&self) -> io::Result<()> {
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(directory)?;

        let mut file = NamedTempFile::new_in(directory)?;
        file.write_all(self.text.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        info!(path = %self.path.display(), bytes = self.text.len(), "saved source file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_creates_directories_and_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/types.ts");

        SourceFile::new(&path, "export type A = string;\n")
            .save()
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "export type A = string;\n"
        );

        let file = SourceFile::new(&path, "export type B = number;\n");
        assert_eq!(file.path(), path.as_path());
        file.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), file.text());

        let leftovers = std::fs::read_dir(dir.path().join("out")).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
