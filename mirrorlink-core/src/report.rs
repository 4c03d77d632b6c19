// Catalog listing reports

use crate::catalog::Card;
use crate::icon::{Icon, select_icon};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub title: String,
    pub clickable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Candidate URLs in the order they would be probed
    pub probe_order: Vec<String>,
}

impl CardView {
    pub fn from_card(card: &Card) -> Self {
        let mut ordered: Vec<_> = card.candidates.iter().collect();
        ordered.sort_by_key(|c| c.priority);

        Self {
            title: card.title.clone(),
            clickable: card.clickable,
            icon: select_icon(card),
            probe_order: ordered.into_iter().map(|c| c.url.clone()).collect(),
        }
    }
}

pub fn generate_catalog_report(cards: &[Card], format: ReportFormat) -> serde_json::Result<String> {
    let views: Vec<CardView> = cards.iter().map(CardView::from_card).collect();

    match format {
        ReportFormat::Json => serde_json::to_string_pretty(&views),
        ReportFormat::Text => Ok(generate_text_report(&views)),
    }
}

fn generate_text_report(views: &[CardView]) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Cards: {}\n", views.len()));

    let clickable = views.iter().filter(|v| v.clickable).count();
    report.push_str(&format!("  Clickable: {}\n", clickable));

    let mirrors: usize = views.iter().map(|v| v.probe_order.len()).sum();
    report.push_str(&format!("  Mirrors: {}\n", mirrors));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for view in views {
        report.push_str(&format!("## {}\n", view.title));
        if let Some(ref icon) = view.icon {
            report.push_str(&format!("  icon: {}\n", icon));
        }
        if !view.clickable {
            report.push_str("  (not clickable)\n");
        }
        for (rank, url) in view.probe_order.iter().enumerate() {
            report.push_str(&format!("  {}. {}\n", rank + 1, url));
        }
        report.push('\n');
    }

    report
}
