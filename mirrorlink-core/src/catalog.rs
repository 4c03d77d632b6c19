// Catalog page decoding: cards, their mirror candidates and icon data

use mirrorlink_scanner::Candidate;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog page {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Card '{title}' has an invalid {attribute} attribute: {source}")]
    InvalidAttribute {
        title: String,
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Card #{index} has no .card-title element")]
    MissingTitle { index: usize },
}

/// Icon description carried by a card's `data-icon` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub candidates: Vec<Candidate>,
    pub icon: Option<IconSpec>,
    /// Cards without `data-urls` are display-only.
    pub clickable: bool,
}

impl Card {
    pub fn new(title: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            title: title.into(),
            candidates,
            icon: None,
            clickable: true,
        }
    }

    pub fn with_icon(mut self, icon: IconSpec) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Parse every `.card` element of a catalog page, in page order.
pub fn parse_catalog(html: &str) -> Result<Vec<Card>, CatalogError> {
    let document = Html::parse_document(html);
    let card_selector = Selector::parse(".card").unwrap();
    let title_selector = Selector::parse(".card-title").unwrap();

    let mut cards = Vec::new();
    for (index, element) in document.select(&card_selector).enumerate() {
        let title = element
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .ok_or(CatalogError::MissingTitle { index })?;

        let urls_attr = element
            .value()
            .attr("data-urls")
            .or_else(|| clickable_ancestor(element).and_then(|a| a.value().attr("data-urls")));

        let candidates: Vec<Candidate> = match urls_attr {
            Some(raw) => serde_json::from_str(raw).map_err(|source| {
                CatalogError::InvalidAttribute {
                    title: title.clone(),
                    attribute: "data-urls",
                    source,
                }
            })?,
            None => Vec::new(),
        };

        let icon = match element.value().attr("data-icon") {
            Some(raw) => Some(serde_json::from_str::<IconSpec>(raw).map_err(|source| {
                CatalogError::InvalidAttribute {
                    title: title.clone(),
                    attribute: "data-icon",
                    source,
                }
            })?),
            None => None,
        };

        debug!("Found card '{}' with {} candidate(s)", title, candidates.len());
        cards.push(Card {
            title,
            candidates,
            icon,
            clickable: urls_attr.is_some(),
        });
    }

    Ok(cards)
}

fn clickable_ancestor(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().classes().any(|c| c == "clickable-card"))
}

/// Read and parse a catalog page from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<Card>, CatalogError> {
    let html = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&html)
}

/// Case-insensitive title lookup; surrounding whitespace is ignored.
pub fn find_card<'a>(cards: &'a [Card], title: &str) -> Option<&'a Card> {
    let wanted = title.trim().to_lowercase();
    cards.iter().find(|c| c.title.to_lowercase() == wanted)
}
