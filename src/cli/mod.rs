//! Command-line interface for bible-ref.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **convert**: Parse a reference in any notation and render it in another
//! - **simplify**: Reduce an identifier to book, chapter or verse level
//! - **contains**: Test whether one reference includes another
//! - **enumerate**: List every chapter or verse of a range
//! - **link**: Build Logos or bible.com links
//! - **catalog**: List, show, or export the book catalog
//!
//! ## Usage
//!
//! ```text
//! # Canonical id for a human reference
//! bible-ref convert "Mark 4:3"
//!
//! # Logos reference for a USFM reference
//! bible-ref convert "MRK 4:3" --to logos
//!
//! # Every verse of a cross-chapter range, with a full chapter table
//! bible-ref enumerate "Mark 1:40" "Mark 3:2" --chapters verses.json
//!
//! # JSON output for scripting
//! bible-ref catalog list --canon catholic --format json
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::chapters::ChapterVerseTable;
use crate::catalog::store::BookCatalog;
use crate::core::canon::Canon;
use crate::core::types::{Granularity, Notation};

pub mod catalog;
pub mod contains;
pub mod convert;
pub mod enumerate;
pub mod link;
pub mod simplify;

#[derive(Parser)]
#[command(name = "bible-ref")]
#[command(version)]
#[command(about = "Convert and compare Bible references across notations")]
#[command(
    long_about = "bible-ref reads a Bible reference in any common notation (English names, USFM, OSIS, Logos, UBS, or fixed-width canonical ids) and converts it.\n\nIt can also:\n- Reduce identifiers to a coarser level\n- Test whether one reference contains another\n- List every verse in a range\n- Build Logos and bible.com links"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a reference between notations
    Convert(convert::ConvertArgs),

    /// Reduce an identifier to a coarser level
    Simplify(simplify::SimplifyArgs),

    /// Test whether one reference includes another
    Contains(contains::ContainsArgs),

    /// List every chapter or verse in a range
    Enumerate(enumerate::EnumerateArgs),

    /// Build links to Logos or bible.com
    Link(link::LinkArgs),

    /// Inspect the book catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Notation names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum NotationArg {
    /// Detect from the shape of the text
    Auto,
    Canonical,
    Logos,
    Osis,
    Name,
    Usfm,
    Ubs,
}

impl NotationArg {
    /// The fixed notation, or `None` for auto-detection
    #[must_use]
    pub fn notation(self) -> Option<Notation> {
        match self {
            Self::Auto => None,
            Self::Canonical => Some(Notation::Canonical),
            Self::Logos => Some(Notation::Logos),
            Self::Osis => Some(Notation::Osis),
            Self::Name => Some(Notation::Name),
            Self::Usfm => Some(Notation::Usfm),
            Self::Ubs => Some(Notation::Ubs),
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GranularityArg {
    Book,
    Chapter,
    Verse,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Book => Granularity::Book,
            GranularityArg::Chapter => Granularity::Chapter,
            GranularityArg::Verse => Granularity::Verse,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CanonArg {
    Protestant,
    Catholic,
    #[value(alias = "nt")]
    NewTestament,
}

impl From<CanonArg> for Canon {
    fn from(arg: CanonArg) -> Self {
        match arg {
            CanonArg::Protestant => Canon::Protestant,
            CanonArg::Catholic => Canon::Catholic,
            CanonArg::NewTestament => Canon::NewTestament,
        }
    }
}

/// Load a custom catalog if a path is given, else the embedded one
pub(crate) fn load_catalog(path: Option<&Path>, verbose: bool) -> anyhow::Result<BookCatalog> {
    let catalog = match path {
        Some(path) => BookCatalog::load_from_file(path)?,
        None => BookCatalog::load_embedded()?,
    };
    if verbose {
        eprintln!("Loaded catalog with {} books", catalog.len());
    }
    Ok(catalog)
}

/// Load a custom chapter table if a path is given, else the embedded sample
pub(crate) fn load_chapters(path: Option<&Path>) -> anyhow::Result<ChapterVerseTable> {
    Ok(match path {
        Some(path) => ChapterVerseTable::load_from_file(path)?,
        None => ChapterVerseTable::load_embedded()?,
    })
}
