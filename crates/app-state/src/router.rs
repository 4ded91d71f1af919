//! Session router
//!
//! Maps the auth and onboarding signals to one of three mutually
//! exclusive screen trees. The resolution is total and side-effect free:
//! it is re-run synchronously whenever either input changes, with no
//! debouncing and no caching of stale results.

use serde::{Deserialize, Serialize};

use crate::session::User;

/// The three top-level screen trees
///
/// Exactly one is rendered at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTree {
    /// Login / sign-up stack
    Auth,
    /// Language onboarding
    Onboarding,
    /// The main tabbed app
    Main,
}

/// Resolve the screen tree from the session signals
///
/// Absence of a user is a valid state, not a failure: before auth
/// hydration resolves, the default inputs (no user, language not chosen)
/// land here and correctly yield [`AppTree::Auth`].
pub fn resolve(current_user: Option<&User>, has_chosen_language: bool) -> AppTree {
    match current_user {
        None => AppTree::Auth,
        Some(_) if !has_chosen_language => AppTree::Onboarding,
        Some(_) => AppTree::Main,
    }
}
