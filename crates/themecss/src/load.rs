//! Loading trees, selector maps, and options from JSON or YAML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::render::RenderOptions;
use crate::selectors::BlockSelectorMap;
use crate::tree::{lenient, StyleTree};

/// Error returned when an input document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("document has the wrong shape: {0}")]
    Shape(#[source] serde_json::Error),
    #[error("expected a mapping at the document root, found {found}")]
    NotAMapping { found: &'static str },
    #[error("unsupported input format for {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Serialization format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Picks the format from a file extension.
    ///
    /// ```rust
    /// use std::path::Path;
    /// use themecss::InputFormat;
    ///
    /// assert_eq!(InputFormat::from_path(Path::new("theme.json")).unwrap(), InputFormat::Json);
    /// assert_eq!(InputFormat::from_path(Path::new("theme.yml")).unwrap(), InputFormat::Yaml);
    /// assert!(InputFormat::from_path(Path::new("theme.toml")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parses a document in this format.
    ///
    /// The document root must be a mapping; an empty document counts as an
    /// empty mapping.
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, LoadError> {
        let value: Value = match self {
            InputFormat::Json => serde_json::from_str(text).map_err(LoadError::Json)?,
            InputFormat::Yaml if text.trim().is_empty() => Value::Null,
            InputFormat::Yaml => serde_yaml::from_str(text)?,
        };

        let value = match value {
            Value::Null => Value::Object(Default::default()),
            Value::Object(map) => Value::Object(map),
            other => {
                return Err(LoadError::NotAMapping {
                    found: lenient::kind(&other),
                })
            }
        };
        T::deserialize(value).map_err(LoadError::Shape)
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = InputFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading document");
    format.parse(&text)
}

/// Loads a [`StyleTree`] from a `.json`, `.yaml` or `.yml` file.
pub fn load_tree(path: &Path) -> Result<StyleTree, LoadError> {
    read_document(path)
}

/// Loads a [`BlockSelectorMap`] from a `.json`, `.yaml` or `.yml` file.
pub fn load_selectors(path: &Path) -> Result<BlockSelectorMap, LoadError> {
    read_document(path)
}

/// Loads [`RenderOptions`] from a `.json`, `.yaml` or `.yml` file.
pub fn load_options(path: &Path) -> Result<RenderOptions, LoadError> {
    read_document(path)
}
