//! Card domain model
//!
//! Cards are external, read-only records loaded from deck JSON. The field
//! names are camelCase on disk because the decks predate this core.

use serde::{Deserialize, Serialize};

/// Reserved id prefix marking animal cards, whose display text renders in
/// lowercase.
pub const ANIMAL_PREFIX: &str = "animal-";

/// One side of a card: plain text, or richer structured content
///
/// Only the plain-text form participates in color-card detection and the
/// casing rule; rich content is routed to a separate rendering path
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardContent {
    /// Plain text content
    Text(String),
    /// Structured rich content (audio prompts, multi-part phrases, ...)
    Rich(serde_json::Value),
}

impl CardContent {
    /// The plain-text value, if this side is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CardContent::Text(s) => Some(s),
            CardContent::Rich(_) => None,
        }
    }

    /// Whether this side carries structured rich content
    pub fn is_rich(&self) -> bool {
        matches!(self, CardContent::Rich(_))
    }
}

impl From<&str> for CardContent {
    fn from(s: &str) -> Self {
        CardContent::Text(s.to_string())
    }
}

/// A flashcard record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier; the `animal-` prefix triggers the casing rule
    pub id: String,
    /// Front side (the prompt)
    pub front: CardContent,
    /// Back side (the translation)
    pub back: CardContent,
    /// Optional supplementary notes, shown on the back face only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Logical image name resolved through the asset registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Whether the card has an audio pronunciation
    #[serde(default)]
    pub has_audio: bool,
}

impl Card {
    /// Whether this card falls under the animal casing rule
    pub fn is_animal(&self) -> bool {
        self.id.starts_with(ANIMAL_PREFIX)
    }
}
