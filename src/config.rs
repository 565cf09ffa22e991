use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the user overlay, looked up in the home directory.
pub const CUSTOM_FILE_NAME: &str = ".emojis.json";

/// Per-invocation settings handed to the loader and the resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the user overlay lives, if a location could be determined.
    pub custom_path: Option<PathBuf>,
    /// Verbose logging and full error chains.
    pub diagnostics: bool,
}

impl Config {
    pub fn init(custom_override: Option<PathBuf>, diagnostics: bool) -> Result<Self> {
        let custom_path = match custom_override {
            Some(path) => {
                // An explicitly requested file has to exist
                if !path.is_file() {
                    anyhow::bail!("Custom emoji file not found: {:?}", path);
                }
                Some(path)
            }
            None => Self::default_custom_path(),
        };

        tracing::debug!(?custom_path, diagnostics, "configuration resolved");

        Ok(Self {
            custom_path,
            diagnostics,
        })
    }

    fn default_custom_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CUSTOM_FILE_NAME))
    }

    /// The overlay file, only when it is actually present on disk.
    pub fn custom_file(&self) -> Option<&Path> {
        self.custom_path.as_deref().filter(|path| path.is_file())
    }

    /// Reads the overlay file contents, if there is one.
    pub fn read_custom_file(&self) -> Result<Option<String>> {
        let Some(path) = self.custom_file() else {
            return Ok(None);
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read custom emoji file: {:?}", path))?;
        Ok(Some(contents))
    }
}
