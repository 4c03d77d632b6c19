pub mod catalog;
pub mod icon;
pub mod open;
pub mod report;
pub mod search;

pub use catalog::{Card, CatalogError, IconSpec, find_card, load_catalog, parse_catalog};
pub use icon::{Icon, select_icon};
pub use open::{
    CommandNavigator, Navigator, OpenOptions, OpenOutcome, PrintNavigator, open_card,
    unavailable_notice,
};
pub use report::{ReportFormat, generate_catalog_report};
pub use search::{NO_RESULTS_MESSAGE, SearchOutcome, search_cards};
