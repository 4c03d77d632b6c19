// Icon selection for catalog cards

use crate::catalog::Card;
use serde::Serialize;
use std::fmt;

/// What a card's icon slot should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Icon {
    /// Image icon; the glyph is hidden.
    Image { src: String, alt: String },
    /// Font glyph; the image is hidden.
    Glyph { class: String },
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Icon::Image { src, .. } => write!(f, "image {}", src),
            Icon::Glyph { class } => write!(f, "glyph {}", class),
        }
    }
}

/// `None` leaves the markup's default icon in place.
pub fn select_icon(card: &Card) -> Option<Icon> {
    let spec = card.icon.as_ref()?;

    match spec.src.as_deref() {
        Some(src) if !src.is_empty() => Some(Icon::Image {
            src: src.to_string(),
            alt: card.title.clone(),
        }),
        _ => {
            let class = match spec.class.as_deref() {
                Some(class) if !class.is_empty() => format!("card-icon {}", class),
                _ => "card-icon".to_string(),
            };
            Some(Icon::Glyph { class })
        }
    }
}
