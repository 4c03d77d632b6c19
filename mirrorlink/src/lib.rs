pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    load_candidates_from_source, load_cards, parse_candidate_args, parse_candidates_json,
    render_search,
};
