//! Application state management for Lingodeck
//!
//! This crate provides the explicit session-state container, the async
//! hydration contract with the persisted stores, and the session router
//! that decides which screen tree the user sees.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hydration;
pub mod router;
pub mod session;

pub use hydration::{AuthSource, HydrateError, LanguageSource, ProgressSource};
pub use router::{resolve, AppTree};
pub use session::{LanguageChoice, Progress, SessionSnapshot, SessionStore, User};
