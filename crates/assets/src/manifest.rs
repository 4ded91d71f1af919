//! Static asset manifest
//!
//! The manifest is the build-time inventory of bundled image collections.
//! It is emitted alongside the asset folders and embedded into the binary,
//! so the set of available images is fixed before the process starts.

use serde::{Deserialize, Serialize};

/// Embedded manifest JSON describing the bundled asset collections.
const EMBEDDED_MANIFEST: &str = include_str!("../manifest/assets.json");

/// Manifest error types
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest JSON could not be parsed
    #[error("Invalid asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;

/// A named collection of asset files (e.g. `animals`, `culture`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCollection {
    /// Collection name, unique within a manifest
    pub name: String,
    /// File paths relative to the asset root, directory prefix included
    pub files: Vec<String>,
}

/// The complete asset manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Collections in processing order
    ///
    /// Order matters: when two collections contain the same filename, the
    /// later collection wins in the combined registry.
    pub collections: Vec<AssetCollection>,
}

impl AssetManifest {
    /// Parse a manifest from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the manifest embedded at build time
    ///
    /// The embedded manifest is generated from the bundled asset folders,
    /// so a parse failure here means a broken build, not bad user input.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_MANIFEST)
    }

    /// Look up a collection by name
    pub fn collection(&self, name: &str) -> Option<&AssetCollection> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Total number of listed files across all collections
    pub fn file_count(&self) -> usize {
        self.collections.iter().map(|c| c.files.len()).sum()
    }
}
