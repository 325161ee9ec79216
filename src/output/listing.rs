//! Plain listing formatter: one path per line

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use super::config::OutputConfig;
use super::entry::ListingEntry;

pub struct ListingFormatter {
    config: OutputConfig,
}

impl ListingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the listing without colors.
    pub fn format(&self, entries: &[ListingEntry]) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write_entries(&mut out, entries)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    pub fn print(&self, entries: &[ListingEntry]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_entries(&mut stdout, entries)
    }

    /// Directories are written bold blue, everything else in the default color.
    pub fn write_entries<W: WriteColor>(&self, out: &mut W, entries: &[ListingEntry]) -> io::Result<()> {
        for entry in entries {
            if entry.kind.is_dir() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", entry.path.display())?;
                out.reset()?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", entry.path.display())?;
            }
        }
        out.flush()
    }
}
