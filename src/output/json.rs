//! JSON output formatting

use std::io;

use super::entry::ListingEntry;

/// Render entries as a pretty-printed JSON array.
pub fn format_json(entries: &[ListingEntry]) -> io::Result<String> {
    serde_json::to_string_pretty(entries).map_err(io::Error::other)
}

/// Print entries as pretty-printed JSON to stdout.
pub fn print_json(entries: &[ListingEntry]) -> io::Result<()> {
    println!("{}", format_json(entries)?);
    Ok(())
}
