//! Session state container
//!
//! An explicit, injected container replacing the ambient store singletons
//! of the original app. Each slice (auth, language, progress) is owned by
//! exactly one hydration source and mutated only through that source or
//! the matching user action; readers take cheap point-in-time snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::router::{resolve, AppTree};

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user identifier
    pub id: String,
    /// Account email
    pub email: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// The learning language chosen during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageChoice {
    /// Language code (e.g. "es", "de")
    pub code: String,
}

impl LanguageChoice {
    /// Create a choice for a language code
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Study progress, keyed by deck id
///
/// The router never reads this; it is hydrated here because it shares the
/// startup sequence, and consumed by the deck and study screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Cards completed per deck
    #[serde(default)]
    pub completed_cards: HashMap<String, u32>,
}

/// Point-in-time view of the routing inputs
///
/// The session router is a pure function of this snapshot and nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// The authenticated user, if auth hydration found one
    pub current_user: Option<User>,
    /// Whether onboarding has recorded a language choice
    pub has_chosen_language: bool,
}

impl SessionSnapshot {
    /// Resolve which screen tree this snapshot maps to
    pub fn resolve_tree(&self) -> AppTree {
        resolve(self.current_user.as_ref(), self.has_chosen_language)
    }
}

/// Process-wide session state
///
/// Cloneable handle over shared slices; all clones observe the same state.
/// Slices use independent locks because each is owned by a different
/// hydration source and there is no cross-slice invariant to protect.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    auth: Arc<RwLock<Option<User>>>,
    language: Arc<RwLock<Option<LanguageChoice>>>,
    progress: Arc<RwLock<Progress>>,
}

impl SessionStore {
    /// Create a store in the pre-hydration default state: no user,
    /// language not chosen, empty progress
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a snapshot of the routing inputs
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_user: self.auth.read().clone(),
            has_chosen_language: self.language.read().is_some(),
        }
    }

    /// Resolve the screen tree for the current state
    pub fn current_tree(&self) -> AppTree {
        self.snapshot().resolve_tree()
    }

    /// The current user, if any
    pub fn current_user(&self) -> Option<User> {
        self.auth.read().clone()
    }

    /// The chosen learning language, if onboarding completed
    pub fn language(&self) -> Option<LanguageChoice> {
        self.language.read().clone()
    }

    /// The hydrated study progress
    pub fn progress(&self) -> Progress {
        self.progress.read().clone()
    }

    /// Record a successful login or sign-up
    pub fn set_current_user(&self, user: User) {
        tracing::debug!(user = %user.id, "session user set");
        *self.auth.write() = Some(user);
    }

    /// Log the current user out
    pub fn clear_current_user(&self) {
        tracing::debug!("session user cleared");
        *self.auth.write() = None;
    }

    /// Record the language chosen during onboarding
    pub fn choose_language(&self, choice: LanguageChoice) {
        tracing::debug!(language = %choice.code, "language chosen");
        *self.language.write() = Some(choice);
    }

    /// Forget the language choice, returning the user to onboarding
    pub fn reset_language(&self) {
        *self.language.write() = None;
    }

    pub(crate) fn write_auth(&self, user: Option<User>) {
        *self.auth.write() = user;
    }

    pub(crate) fn write_language(&self, choice: Option<LanguageChoice>) {
        *self.language.write() = choice;
    }

    pub(crate) fn write_progress(&self, progress: Progress) {
        *self.progress.write() = progress;
    }
}
