//! Startup hydration
//!
//! At launch the app kicks off three independent loads against the
//! persisted stores: auth, language, and progress. They are not awaited
//! before first render, may complete in any order, and each one mutates
//! only its own slice of the session store. A failed load leaves its slice
//! in the default state; hydration failures never surface as UI errors.

use async_trait::async_trait;

use crate::session::{LanguageChoice, Progress, SessionStore, User};

/// Hydration source error types
#[derive(Debug, thiserror::Error)]
pub enum HydrateError {
    /// The backing store could not be read
    #[error("Store read failed: {0}")]
    Store(String),

    /// The persisted payload could not be decoded
    #[error("Corrupt persisted state: {0}")]
    Corrupt(String),
}

/// Result type for hydration loads
pub type Result<T> = std::result::Result<T, HydrateError>;

/// Persisted auth store boundary
#[async_trait]
pub trait AuthSource: Send + Sync {
    /// Load the persisted user, if a session exists
    async fn load(&self) -> Result<Option<User>>;
}

/// Persisted language store boundary
#[async_trait]
pub trait LanguageSource: Send + Sync {
    /// Load the persisted language choice, if onboarding ever completed
    async fn load(&self) -> Result<Option<LanguageChoice>>;
}

/// Persisted progress store boundary
#[async_trait]
pub trait ProgressSource: Send + Sync {
    /// Load the persisted study progress
    async fn load(&self) -> Result<Progress>;
}

impl SessionStore {
    /// Hydrate the auth slice
    ///
    /// Idempotent; a failed load keeps the unauthenticated default.
    pub async fn hydrate_auth(&self, source: &dyn AuthSource) {
        match source.load().await {
            Ok(user) => {
                tracing::debug!(found = user.is_some(), "auth hydrated");
                self.write_auth(user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "auth hydration failed, staying signed out");
            }
        }
    }

    /// Hydrate the language slice
    ///
    /// Idempotent; a failed load keeps "language not chosen".
    pub async fn hydrate_language(&self, source: &dyn LanguageSource) {
        match source.load().await {
            Ok(choice) => {
                tracing::debug!(chosen = choice.is_some(), "language hydrated");
                self.write_language(choice);
            }
            Err(e) => {
                tracing::warn!(error = %e, "language hydration failed, keeping default");
            }
        }
    }

    /// Hydrate the progress slice
    ///
    /// Idempotent; a failed load keeps empty progress.
    pub async fn hydrate_progress(&self, source: &dyn ProgressSource) {
        match source.load().await {
            Ok(progress) => {
                tracing::debug!(decks = progress.completed_cards.len(), "progress hydrated");
                self.write_progress(progress);
            }
            Err(e) => {
                tracing::warn!(error = %e, "progress hydration failed, keeping empty progress");
            }
        }
    }
}
