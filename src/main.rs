//! CLI entry point for libsync

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use libsync::{
    Depth, EntryKind, ListingFormatter, OutputConfig, Report, Selection, TreeWalker, WalkerConfig,
    compare, print_json, resolve_entries,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Comparison report against a target directory
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ReportKind {
    /// Files only in PATH
    #[default]
    Created,
    /// Files only in the target
    Deleted,
    /// Files in both whose copy in PATH is newer
    Changed,
}

impl From<ReportKind> for Report {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Created => Report::Created,
            ReportKind::Deleted => Report::Deleted,
            ReportKind::Changed => Report::Changed,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "libsync")]
#[command(about = "List files and directories beneath a directory, up to a depth")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend N levels below PATH (negative = no limit)
    #[arg(short = 'L', long = "level", default_value = "0", allow_negative_numbers = true)]
    level: i32,

    /// List regular files only
    #[arg(short = 'f', long = "files", conflicts_with_all = ["dirs", "against"])]
    files: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs", conflicts_with = "against")]
    dirs: bool,

    /// Print paths as walked instead of resolving them to canonical form
    #[arg(long = "raw")]
    raw: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Compare the files of PATH against this directory instead of listing
    #[arg(long = "against", value_name = "TARGET")]
    against: Option<PathBuf>,

    /// Which comparison to print (requires --against)
    #[arg(long = "report", value_name = "KIND", requires = "against")]
    report: Option<ReportKind>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn selection(&self) -> Selection {
        if self.files {
            Selection::Files
        } else if self.dirs {
            Selection::Directories
        } else {
            Selection::Objects
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let depth = Depth::from(args.level);
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        canonicalize: !args.raw,
    };

    // Comparison reports only ever contain regular files.
    let walked = match &args.against {
        Some(target) => {
            let report = args.report.unwrap_or_default();
            compare(report.into(), &args.path, target, depth).map(|paths| {
                paths
                    .into_iter()
                    .map(|path| (path, EntryKind::RegularFile))
                    .collect::<Vec<_>>()
            })
        }
        None => TreeWalker::new(WalkerConfig {
            depth,
            selection: args.selection(),
        })
        .walk_entries(&args.path),
    };

    let resolved = walked.and_then(|walked| resolve_entries(&walked, output_config.canonicalize));
    let entries = match resolved {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("libsync: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&entries)
    } else {
        ListingFormatter::new(output_config).print(&entries)
    };

    if let Err(e) = result {
        eprintln!("libsync: error writing output: {}", e);
        process::exit(1);
    }
}
