//! Image registry
//!
//! Built once from the asset manifest before the first card render and
//! immutable afterwards, so it can be shared by reference across every
//! render call without synchronization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::manifest::AssetManifest;

/// File extensions accepted into the registry (lowercase)
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// An opaque, loadable reference to a bundled image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle {
    /// Logical filename, directory prefix stripped (e.g. `cat.png`)
    pub name: String,
    /// Bundle path the image loads from (e.g. `animals/cat.png`)
    pub path: String,
    /// Collection the handle came from
    pub collection: String,
}

/// Immutable filename-to-image index over the bundled asset collections
///
/// The combined map merges every collection in manifest order with
/// last-write-wins on filename collisions. Callers that need to
/// disambiguate a colliding name must go through [`AssetRegistry::collection`]
/// instead of the combined lookup.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    combined: HashMap<String, ImageHandle>,
    by_collection: HashMap<String, HashMap<String, ImageHandle>>,
}

/// Strip any directory prefix, leaving the logical filename.
fn logical_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Check the extension filter. Non-image files (e.g. a README dropped into
/// an asset folder) must not enter the registry.
fn is_image_file(path: &str) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

impl AssetRegistry {
    /// Build the registry from a manifest
    ///
    /// Invoked exactly once per process lifetime, before the first card
    /// render. Collections are processed in manifest order.
    pub fn build(manifest: &AssetManifest) -> Self {
        let mut combined = HashMap::new();
        let mut by_collection = HashMap::new();

        for collection in &manifest.collections {
            let mut sub_map = HashMap::new();

            for path in &collection.files {
                if !is_image_file(path) {
                    tracing::debug!(
                        collection = %collection.name,
                        file = %path,
                        "skipping non-image asset"
                    );
                    continue;
                }

                let handle = ImageHandle {
                    name: logical_name(path).to_string(),
                    path: path.clone(),
                    collection: collection.name.clone(),
                };

                sub_map.insert(handle.name.clone(), handle.clone());
                combined.insert(handle.name.clone(), handle);
            }

            tracing::debug!(
                collection = %collection.name,
                images = sub_map.len(),
                "indexed asset collection"
            );
            by_collection.insert(collection.name.clone(), sub_map);
        }

        Self { combined, by_collection }
    }

    /// Look up an image by logical filename in the combined registry
    ///
    /// An absent name yields `None`, never a failure. The registry never
    /// changes after build, so repeated lookups always agree.
    pub fn lookup(&self, name: &str) -> Option<&ImageHandle> {
        self.combined.get(name)
    }

    /// Get the sub-map for a single collection
    pub fn collection(&self, name: &str) -> Option<&HashMap<String, ImageHandle>> {
        self.by_collection.get(name)
    }

    /// Number of images in the combined registry
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    /// Whether the combined registry is empty
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }
}
