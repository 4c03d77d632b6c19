// Tests for catalog listing reports

use mirrorlink_core::catalog::{Card, IconSpec};
use mirrorlink_core::report::{ReportFormat, generate_catalog_report};
use mirrorlink_scanner::Candidate;

fn cards() -> Vec<Card> {
    let mut plain = Card::new("Coming soon", vec![]);
    plain.clickable = false;

    vec![
        Card::new(
            "Archive",
            vec![
                Candidate::new("b.example.org", 5),
                Candidate::new("a.example.org", 1),
                Candidate::new("c.example.org", 5),
            ],
        )
        .with_icon(IconSpec {
            class: Some("fas fa-archive".to_string()),
            src: None,
        }),
        plain,
    ]
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str() {
    assert_eq!(ReportFormat::from_str("text"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("JSON"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::from_str("csv"), None);
}

// ============================================================================
// Report Content Tests
// ============================================================================

#[test]
fn test_text_report_lists_probe_order() {
    let report = generate_catalog_report(&cards(), ReportFormat::Text).unwrap();

    assert!(report.contains("Cards: 2"));
    assert!(report.contains("Clickable: 1"));
    assert!(report.contains("Mirrors: 3"));
    assert!(report.contains("## Archive"));
    assert!(report.contains("icon: glyph card-icon fas fa-archive"));
    assert!(report.contains("(not clickable)"));

    let a = report.find("1. a.example.org").unwrap();
    let b = report.find("2. b.example.org").unwrap();
    let c = report.find("3. c.example.org").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_json_report_structure() {
    let report = generate_catalog_report(&cards(), ReportFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(parsed[0]["title"], "Archive");
    assert_eq!(parsed[0]["icon"]["kind"], "glyph");
    assert_eq!(
        parsed[0]["probe_order"],
        serde_json::json!(["a.example.org", "b.example.org", "c.example.org"])
    );
    assert_eq!(parsed[1]["clickable"], false);
    assert!(parsed[1].get("icon").is_none());
}
