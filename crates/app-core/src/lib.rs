//! Core card logic for Lingodeck
//!
//! This crate contains the card domain model, the fixed color table, and
//! the card presenter that turns a raw card plus a flip flag into a
//! renderable presentation descriptor.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cards;
pub mod colors;
pub mod presenter;

pub use cards::{Card, CardContent, ANIMAL_PREFIX};
pub use presenter::{present, PresentationDescriptor, PresentationMode, TextColor};
