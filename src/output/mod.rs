//! Listing formatting and display
//!
//! - `config` - Output configuration types
//! - `entry` - Classifying and canonicalizing walked paths
//! - `listing` - One path per line, directories colored
//! - `json` - JSON output

mod config;
mod entry;
mod json;
mod listing;

pub use config::OutputConfig;
pub use entry::{ListingEntry, resolve_entries};
pub use json::{format_json, print_json};
pub use listing::ListingFormatter;
