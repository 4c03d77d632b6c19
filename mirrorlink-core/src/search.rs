// Live title filter over catalog cards

use crate::catalog::Card;

pub const NO_RESULTS_MESSAGE: &str =
    "No matching websites found. Please try a different search term.";

/// Visibility of every card for one search term.
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    /// Cards in page order, paired with whether they stay visible.
    pub visibility: Vec<(&'a Card, bool)>,
    /// Set only when no card matched.
    pub message: Option<&'static str>,
}

impl<'a> SearchOutcome<'a> {
    pub fn matches(&self) -> impl Iterator<Item = &'a Card> + '_ {
        self.visibility
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(card, _)| *card)
    }

    pub fn match_count(&self) -> usize {
        self.visibility.iter().filter(|(_, visible)| *visible).count()
    }
}

/// Show cards whose title contains `term`, ignoring case and surrounding
/// whitespace. An empty term shows everything.
pub fn search_cards<'a>(cards: &'a [Card], term: &str) -> SearchOutcome<'a> {
    let term = term.to_lowercase();
    let term = term.trim();

    let visibility: Vec<(&Card, bool)> = cards
        .iter()
        .map(|card| (card, card.title.to_lowercase().contains(term)))
        .collect();

    let found_match = visibility.iter().any(|(_, visible)| *visible);

    SearchOutcome {
        visibility,
        message: if found_match { None } else { Some(NO_RESULTS_MESSAGE) },
    }
}
