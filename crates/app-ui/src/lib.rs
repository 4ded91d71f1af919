//! User interface shell for Lingodeck
//!
//! This crate provides the navigation layer (routes, tabs, stacks) and
//! the card design tokens. Screens themselves are opaque leaf components
//! mounted by the rendering toolkit; this crate only decides what mounts
//! where.
//!
//! # Modules
//!
//! - [`navigation`] - Routes, tabs, and stack management
//! - [`theme`] - Card design tokens and color helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod theme;

pub use navigation::{entry_route, MainNavigation, NavigationStack, Route, StackEntry, Tab};
pub use theme::{card_theme, image_overlay, text_color_hex, CardTheme, Color, Gradient, GradientStop};
