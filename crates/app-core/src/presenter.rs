//! Card presenter
//!
//! Derives a presentation descriptor from a card record and a flip flag.
//! The descriptor is ephemeral: it is recomputed on every render and holds
//! no state of its own. Every input, however incomplete, maps to a defined
//! renderable output; there is no error path here.

use assets::{AssetRegistry, ImageHandle};

use crate::cards::Card;
use crate::colors;

/// How the card face is visually backed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// Unflipped card with a resolved image: the image fills the card and
    /// the text overlays a bottom gradient
    ImageFront,
    /// Front text names a reserved color: the background renders as that
    /// color on both faces
    ColorCard,
    /// Default card: plain background
    PlainCard,
}

/// Text color verdict for legibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    /// Dark text on light backgrounds
    Dark,
    /// Light text on dark backgrounds and image overlays
    Light,
}

/// Everything a card face needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationDescriptor {
    /// Visual backing mode, mutually exclusive
    pub mode: PresentationMode,
    /// Background color, present only in [`PresentationMode::ColorCard`]
    pub background_color: Option<&'static str>,
    /// Text color guaranteeing legibility against the backing
    pub text_color: TextColor,
    /// Text for the visible face, casing rule already applied
    pub display_text: String,
    /// Resolved image handle, if the card names one that exists
    pub image: Option<ImageHandle>,
    /// Supplementary notes, surfaced only on the back face
    pub notes: Option<String>,
    /// Whether to show the audio pronunciation icon
    pub show_audio_icon: bool,
}

/// Apply the per-category casing rule to one side's text.
///
/// Animal cards render in lowercase; everything else passes through with
/// its original casing and punctuation. Rich content has no plain text and
/// formats to empty.
fn format_display_text(card: &Card, text: &crate::cards::CardContent) -> String {
    let s = text.as_text().unwrap_or("");
    if card.is_animal() {
        s.to_lowercase()
    } else {
        s.to_string()
    }
}

/// Derive the presentation descriptor for a card face
///
/// Mode priority: image present and not flipped wins, then a color-name
/// match on the front, then the plain card. Color classification always
/// reads the front side, so a flipped color card shows the back-side
/// translation over the front-side color.
pub fn present(card: &Card, is_flipped: bool, registry: &AssetRegistry) -> PresentationDescriptor {
    let image = card
        .image
        .as_deref()
        .and_then(|name| registry.lookup(name))
        .cloned();

    if !is_flipped && image.is_some() {
        // Image supplies the visual background; overlay text is always
        // light against the bottom gradient.
        return PresentationDescriptor {
            mode: PresentationMode::ImageFront,
            background_color: None,
            text_color: TextColor::Light,
            display_text: format_display_text(card, &card.front),
            image,
            notes: None,
            show_audio_icon: card.has_audio,
        };
    }

    // Color classification reads the front side regardless of flip state,
    // and only its plain-text form.
    let background_color = card
        .front
        .as_text()
        .and_then(|front| colors::lookup(&front.to_lowercase()));

    let (mode, text_color) = match background_color {
        Some(value) if colors::needs_light_text(value) => {
            (PresentationMode::ColorCard, TextColor::Light)
        }
        Some(_) => (PresentationMode::ColorCard, TextColor::Dark),
        None => (PresentationMode::PlainCard, TextColor::Dark),
    };

    let shown_side = if is_flipped { &card.back } else { &card.front };

    PresentationDescriptor {
        mode,
        background_color,
        text_color,
        display_text: format_display_text(card, shown_side),
        image,
        notes: if is_flipped { card.notes.clone() } else { None },
        show_audio_icon: card.has_audio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardContent;
    use assets::{AssetCollection, AssetManifest};

    fn registry() -> AssetRegistry {
        AssetRegistry::build(&AssetManifest {
            collections: vec![AssetCollection {
                name: "animals".to_string(),
                files: vec!["animals/cat.png".to_string(), "animals/dolphin.png".to_string()],
            }],
        })
    }

    fn card(id: &str, front: &str, back: &str) -> Card {
        Card {
            id: id.to_string(),
            front: front.into(),
            back: back.into(),
            notes: None,
            image: None,
            has_audio: false,
        }
    }

    #[test]
    fn test_color_card_unflipped() {
        let card = card("color-1", "Red", "Rojo");
        let desc = present(&card, false, &registry());

        assert_eq!(desc.mode, PresentationMode::ColorCard);
        assert_eq!(desc.background_color, Some("#F44336"));
        assert_eq!(desc.text_color, TextColor::Light);
        assert_eq!(desc.display_text, "Red");
    }

    #[test]
    fn test_color_card_flipped_keeps_front_background() {
        let card = card("color-1", "Red", "Rojo");
        let desc = present(&card, true, &registry());

        // Background still derives from the front-side color name
        assert_eq!(desc.mode, PresentationMode::ColorCard);
        assert_eq!(desc.background_color, Some("#F44336"));
        assert_eq!(desc.text_color, TextColor::Light);
        assert_eq!(desc.display_text, "Rojo");
    }

    #[test]
    fn test_color_classification_case_insensitive() {
        for front in ["RED", "red", "Red"] {
            let card = card("color-1", front, "Rojo");
            let desc = present(&card, false, &registry());
            assert_eq!(desc.mode, PresentationMode::ColorCard);
            assert_eq!(desc.background_color, Some("#F44336"));
        }
    }

    #[test]
    fn test_light_background_gets_dark_text() {
        let card = card("color-3", "Yellow", "Amarillo");
        let desc = present(&card, false, &registry());

        assert_eq!(desc.mode, PresentationMode::ColorCard);
        assert_eq!(desc.background_color, Some("#FFEB3B"));
        assert_eq!(desc.text_color, TextColor::Dark);
    }

    #[test]
    fn test_image_front_takes_priority() {
        let mut c = card("word-7", "Cat", "Gato");
        c.image = Some("cat.png".to_string());
        let desc = present(&c, false, &registry());

        assert_eq!(desc.mode, PresentationMode::ImageFront);
        assert!(desc.background_color.is_none());
        assert_eq!(desc.text_color, TextColor::Light);
        // Not an animal-prefixed id, so no lowercasing
        assert_eq!(desc.display_text, "Cat");
        assert_eq!(desc.image.as_ref().unwrap().name, "cat.png");
    }

    #[test]
    fn test_flipped_image_card_falls_back() {
        let mut c = card("word-7", "Cat", "Gato");
        c.image = Some("cat.png".to_string());
        let desc = present(&c, true, &registry());

        assert_eq!(desc.mode, PresentationMode::PlainCard);
        assert_eq!(desc.display_text, "Gato");
        // Handle still resolved for the flip-back animation
        assert!(desc.image.is_some());
    }

    #[test]
    fn test_missing_image_is_plain_card() {
        let mut c = card("word-8", "Tree", "Arbol");
        c.image = Some("tree.png".to_string());
        let desc = present(&c, false, &registry());

        assert_eq!(desc.mode, PresentationMode::PlainCard);
        assert!(desc.image.is_none());
        assert_eq!(desc.text_color, TextColor::Dark);
    }

    #[test]
    fn test_animal_prefix_lowercases() {
        let c = card("animal-1", "Dolphin", "Delfin");
        let desc = present(&c, false, &registry());
        assert_eq!(desc.display_text, "dolphin");

        let flipped = present(&c, true, &registry());
        assert_eq!(flipped.display_text, "delfin");
    }

    #[test]
    fn test_non_animal_keeps_casing() {
        let c = card("fruit-1", "Apple", "Manzana");
        let desc = present(&c, false, &registry());
        assert_eq!(desc.display_text, "Apple");
    }

    #[test]
    fn test_animal_image_card_lowercases_overlay() {
        let mut c = card("animal-3", "Dolphin", "Delfin");
        c.image = Some("dolphin.png".to_string());
        let desc = present(&c, false, &registry());

        assert_eq!(desc.mode, PresentationMode::ImageFront);
        assert_eq!(desc.display_text, "dolphin");
    }

    #[test]
    fn test_rich_front_bypasses_color_rules() {
        let c = Card {
            id: "phrase-1".to_string(),
            front: CardContent::Rich(serde_json::json!({"parts": ["Red"]})),
            back: "Rojo".into(),
            notes: None,
            image: None,
            has_audio: false,
        };
        let desc = present(&c, false, &registry());

        assert_eq!(desc.mode, PresentationMode::PlainCard);
        assert!(desc.background_color.is_none());
        assert_eq!(desc.display_text, "");
    }

    #[test]
    fn test_notes_only_on_back_face() {
        let mut c = card("word-9", "House", "Casa");
        c.notes = Some("feminine noun".to_string());

        assert!(present(&c, false, &registry()).notes.is_none());
        assert_eq!(
            present(&c, true, &registry()).notes.as_deref(),
            Some("feminine noun")
        );
    }

    #[test]
    fn test_audio_icon_mirrors_flag_in_every_mode() {
        let mut c = card("color-1", "Red", "Rojo");
        c.has_audio = true;
        assert!(present(&c, false, &registry()).show_audio_icon);
        assert!(present(&c, true, &registry()).show_audio_icon);

        c.image = Some("cat.png".to_string());
        assert!(present(&c, false, &registry()).show_audio_icon);

        c.has_audio = false;
        assert!(!present(&c, true, &registry()).show_audio_icon);
    }

    #[test]
    fn test_classification_stable_across_flips() {
        let c = card("color-4", "Green", "Verde");
        let a = present(&c, false, &registry());
        let b = present(&c, true, &registry());
        let c2 = present(&c, false, &registry());

        assert_eq!(a.background_color, b.background_color);
        assert_eq!(a.background_color, c2.background_color);
        assert_eq!(a, c2);
    }
}
