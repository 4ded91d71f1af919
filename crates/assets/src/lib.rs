//! Asset manifest and image registry for Lingodeck
//!
//! This crate provides the image lookup layer used by card rendering.
//! Image files are closed at build time: a static manifest lists every
//! file per collection, and [`registry::AssetRegistry`] indexes them by
//! filename once at startup. No filesystem scanning happens at runtime.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod manifest;
pub mod registry;

pub use manifest::{AssetCollection, AssetManifest, ManifestError};
pub use registry::{AssetRegistry, ImageHandle};
