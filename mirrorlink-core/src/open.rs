use crate::catalog::Card;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use mirrorlink_scanner::{AllFailed, Prober, Resolver};
use std::io;
use std::process::Command;
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

/// Opens a resolved URL for the user. The URL is passed exactly as resolved.
pub trait Navigator {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Writes the resolved URL to stdout.
#[derive(Debug, Default)]
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn open(&self, url: &str) -> io::Result<()> {
        println!("{}", url);
        Ok(())
    }
}

/// Hands the resolved URL to an external opener such as `xdg-open`.
#[derive(Debug)]
pub struct CommandNavigator {
    program: String,
}

impl CommandNavigator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Navigator for CommandNavigator {
    fn open(&self, url: &str) -> io::Result<()> {
        let status = Command::new(&self.program).arg(url).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// Options for opening a card
pub struct OpenOptions {
    pub show_progress: bool,
}

/// What happened when a card was opened
#[derive(Debug)]
pub enum OpenOutcome {
    /// The resolved URL was handed to the navigator
    Opened { url: String },
    /// No candidate answered
    Unavailable { title: String, failures: AllFailed },
    /// A mirror answered but the navigator could not open it
    LaunchFailed { url: String, error: String },
}

/// Resolve `card` and open the first reachable mirror.
///
/// A spinner is shown while resolving when `show_progress` is set and is
/// always cleared before returning.
pub async fn open_card<P: Prober>(
    card: &Card,
    resolver: &Resolver<P>,
    navigator: &dyn Navigator,
    options: &OpenOptions,
) -> OpenOutcome {
    let spinner = loading_indicator(options.show_progress);
    spinner.set_message(format!("Looking for an available {} server...", card.title));

    let resolved = resolver.resolve(&card.candidates).await;
    spinner.finish_and_clear();

    match resolved {
        Ok(url) => launch(url, navigator),
        Err(failures) => {
            error!("All URLs failed for {}: {}", card.title, failures);
            for failure in &failures.failures {
                warn!("  {}", failure);
            }
            OpenOutcome::Unavailable {
                title: card.title.clone(),
                failures,
            }
        }
    }
}

fn launch(url: String, navigator: &dyn Navigator) -> OpenOutcome {
    if let Err(e) = Url::parse(&url) {
        error!("Resolved URL {} is not openable: {}", url, e);
        return OpenOutcome::LaunchFailed {
            url,
            error: e.to_string(),
        };
    }

    match navigator.open(&url) {
        Ok(()) => {
            info!("Opened {}", url);
            OpenOutcome::Opened { url }
        }
        Err(e) => {
            error!("Failed to open {}: {}", url, e);
            OpenOutcome::LaunchFailed {
                url,
                error: e.to_string(),
            }
        }
    }
}

fn loading_indicator(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// User-facing notice shown when none of a card's mirrors answered.
pub fn unavailable_notice(title: &str) -> String {
    let mut notice = String::new();
    notice.push_str(&format!("{} {}\n", "⚠".yellow().bold(), "Server Unavailable".bold()));
    notice.push_str(&format!(
        "We apologize, but the {} servers are currently unreachable. This may be due to \
         maintenance or temporary technical issues.\n",
        title
    ));
    notice.push_str("Please try again later. If the problem persists, contact our support team.\n");
    notice
}
