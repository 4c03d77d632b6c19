use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use mirrorlink_core::catalog::{Card, find_card, load_catalog};
use mirrorlink_core::open::{
    CommandNavigator, Navigator, OpenOptions, OpenOutcome, PrintNavigator, open_card,
    unavailable_notice,
};
use mirrorlink_core::report::{ReportFormat, generate_catalog_report};
use mirrorlink_core::search::{SearchOutcome, search_cards};
use mirrorlink_scanner::{Candidate, ProbeOutcome, Resolver};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_PAGE: &str = "./index.html";

/// Log to stderr, filtered by `RUST_LOG` (default: warnings and errors).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// Helper functions for the handlers

/// Expand `~` in a catalog page path
pub fn expand_page_path(page: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(page).as_ref())
}

/// Load every card from a catalog page
pub fn load_cards(page: &str) -> Result<Vec<Card>, String> {
    let path = expand_page_path(page);
    let cards = load_catalog(&path).map_err(|e| e.to_string())?;
    debug!("Loaded {} card(s) from {}", cards.len(), path.display());
    Ok(cards)
}

/// Turn repeated `--url` arguments into candidates ranked by position
pub fn parse_candidate_args(urls: &[String]) -> Vec<Candidate> {
    urls.iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .enumerate()
        .map(|(rank, url)| Candidate::new(url, rank as i64))
        .collect()
}

/// Decode a `data-urls` style JSON array
pub fn parse_candidates_json(json: &str) -> Result<Vec<Candidate>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid candidate JSON: {}", e))
}

/// Load candidates from either repeated `--url` arguments or a JSON array
pub fn load_candidates_from_source(
    urls: Option<Vec<String>>,
    json: Option<&String>,
) -> Result<Vec<Candidate>, String> {
    if let Some(json) = json {
        parse_candidates_json(json)
    } else if let Some(urls) = urls {
        let candidates = parse_candidate_args(&urls);
        if candidates.is_empty() {
            return Err("No candidate URLs given".to_string());
        }
        Ok(candidates)
    } else {
        Err("Either --url or --urls must be provided".to_string())
    }
}

/// Render search results, one visible card title per line
pub fn render_search(outcome: &SearchOutcome<'_>) -> String {
    if let Some(message) = outcome.message {
        return format!("{}\n", message);
    }

    let mut out = String::new();
    for card in outcome.matches() {
        out.push_str(&card.title);
        out.push('\n');
    }
    out
}

fn build_resolver() -> anyhow::Result<Resolver> {
    Resolver::new().context("Failed to create HTTP client")
}

fn fail(msg: &str) -> ! {
    eprintln!("{} {}", "✗".red().bold(), msg);
    std::process::exit(1);
}

pub async fn handle_open(args: &ArgMatches, quiet: bool) {
    let title = args.get_one::<String>("TITLE").unwrap();
    let page = args.get_one::<String>("page").unwrap();
    let open_with = args.get_one::<String>("open-with");

    let cards = load_cards(page).unwrap_or_else(|e| fail(&e));
    let Some(card) = find_card(&cards, title) else {
        fail(&format!("No card titled '{}' in {}", title, page));
    };
    if !card.clickable {
        fail(&format!("Card '{}' has no mirrors to open", card.title));
    }

    let resolver = build_resolver().unwrap_or_else(|e| fail(&format!("{:#}", e)));
    let navigator: Box<dyn Navigator> = match open_with {
        Some(program) => Box::new(CommandNavigator::new(program)),
        None => Box::new(PrintNavigator),
    };
    let options = OpenOptions {
        show_progress: !quiet,
    };

    match open_card(card, &resolver, navigator.as_ref(), &options).await {
        OpenOutcome::Opened { url } => {
            if open_with.is_some() && !quiet {
                eprintln!("{} Opened {}", "✓".green().bold(), url.bright_white());
            }
        }
        OpenOutcome::Unavailable { title, .. } => {
            eprint!("{}", unavailable_notice(&title));
            std::process::exit(1);
        }
        OpenOutcome::LaunchFailed { url, error } => {
            fail(&format!("Could not open {}: {}", url, error));
        }
    }
}

pub async fn handle_resolve(args: &ArgMatches, quiet: bool) {
    let urls = args
        .get_many::<String>("url")
        .map(|values| values.cloned().collect::<Vec<_>>());
    let json = args.get_one::<String>("urls");

    let candidates = load_candidates_from_source(urls, json).unwrap_or_else(|e| fail(&e));

    let mut resolver = build_resolver().unwrap_or_else(|e| fail(&format!("{:#}", e)));
    if !quiet {
        resolver = resolver.with_attempt_callback(Arc::new(|url: String| {
            eprintln!("{} {}", "→".blue(), url);
        }));
    }

    match ProbeOutcome::from(resolver.resolve(&candidates).await) {
        ProbeOutcome::Resolved(url) => println!("{}", url),
        ProbeOutcome::Failed(e) => {
            for failure in &e.failures {
                eprintln!("  {} {}", "•".yellow(), failure);
            }
            fail(&e.to_string());
        }
    }
}

pub fn handle_search(args: &ArgMatches) {
    let term = args.get_one::<String>("TERM").map(String::as_str).unwrap_or("");
    let page = args.get_one::<String>("page").unwrap();

    let cards = load_cards(page).unwrap_or_else(|e| fail(&e));
    let outcome = search_cards(&cards, term);
    print!("{}", render_search(&outcome));
}

pub fn handle_list(args: &ArgMatches) {
    let page = args.get_one::<String>("page").unwrap();
    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Text);

    let cards = load_cards(page).unwrap_or_else(|e| fail(&e));
    match generate_catalog_report(&cards, format) {
        Ok(report) => print!("{}", report),
        Err(e) => fail(&format!("Failed to render report: {}", e)),
    }
}
