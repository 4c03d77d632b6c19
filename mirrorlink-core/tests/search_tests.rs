// Tests for the card title filter and icon selection

use mirrorlink_core::catalog::{Card, IconSpec};
use mirrorlink_core::icon::{Icon, select_icon};
use mirrorlink_core::search::{NO_RESULTS_MESSAGE, search_cards};

fn catalog() -> Vec<Card> {
    vec![
        Card::new("Library Genesis", vec![]),
        Card::new("Anna's Archive", vec![]),
        Card::new("Internet Archive", vec![]),
    ]
}

// ============================================================================
// Search Tests
// ============================================================================

#[test]
fn test_search_is_case_insensitive_substring() {
    let cards = catalog();
    let outcome = search_cards(&cards, "ARCHIVE");

    let titles: Vec<&str> = outcome.matches().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Anna's Archive", "Internet Archive"]);
    assert!(outcome.message.is_none());
}

#[test]
fn test_search_trims_term() {
    let cards = catalog();
    let outcome = search_cards(&cards, "   genesis  ");

    assert_eq!(outcome.match_count(), 1);
}

#[test]
fn test_search_reports_every_card() {
    let cards = catalog();
    let outcome = search_cards(&cards, "library");

    let visibility: Vec<bool> = outcome.visibility.iter().map(|(_, v)| *v).collect();
    assert_eq!(visibility, vec![true, false, false]);
}

#[test]
fn test_empty_term_shows_everything() {
    let cards = catalog();
    let outcome = search_cards(&cards, "  ");

    assert_eq!(outcome.match_count(), 3);
    assert!(outcome.message.is_none());
}

#[test]
fn test_no_match_sets_message() {
    let cards = catalog();
    let outcome = search_cards(&cards, "sci-hub");

    assert_eq!(outcome.match_count(), 0);
    assert_eq!(outcome.message, Some(NO_RESULTS_MESSAGE));
}

#[test]
fn test_empty_catalog_sets_message() {
    let outcome = search_cards(&[], "");
    assert_eq!(outcome.message, Some(NO_RESULTS_MESSAGE));
}

// ============================================================================
// Icon Tests
// ============================================================================

#[test]
fn test_image_icon_uses_title_as_alt() {
    let card = Card::new("Archive", vec![]).with_icon(IconSpec {
        class: Some("fas fa-archive".to_string()),
        src: Some("/img/archive.png".to_string()),
    });

    assert_eq!(
        select_icon(&card),
        Some(Icon::Image {
            src: "/img/archive.png".to_string(),
            alt: "Archive".to_string(),
        })
    );
}

#[test]
fn test_glyph_icon_when_no_src() {
    let card = Card::new("Books", vec![]).with_icon(IconSpec {
        class: Some("fas fa-book".to_string()),
        src: Some(String::new()),
    });

    assert_eq!(
        select_icon(&card),
        Some(Icon::Glyph {
            class: "card-icon fas fa-book".to_string(),
        })
    );
}

#[test]
fn test_no_icon_data_keeps_default() {
    let card = Card::new("Plain", vec![]);
    assert!(select_icon(&card).is_none());
}
