use std::path::PathBuf;

use clap::Args;

use crate::cli::convert::parse_input;
use crate::cli::{load_catalog, NotationArg, OutputFormat};
use crate::core::range::VerseRange;
use crate::core::simplify::Reference;
use crate::render::uri::{biblia_uri, logos_uri, BibleComLinker, DEFAULT_EDITION};

#[derive(Args)]
pub struct LinkArgs {
    /// Reference to link, e.g. "Mark 4:3"
    #[arg(required = true)]
    pub reference: String,

    /// End verse, to link a verse range within one chapter
    #[arg(long)]
    pub end: Option<String>,

    /// bible.com edition (ESV, NIRV, NIV, NLT, NASB2020, BSB)
    #[arg(long, default_value = DEFAULT_EDITION)]
    pub edition: String,

    /// Link into Logos instead of bible.com
    #[arg(long)]
    pub logos: bool,

    /// Link to the book at biblia.com instead of bible.com
    #[arg(long, conflicts_with = "logos")]
    pub biblia: bool,

    /// Notation of the inputs (detected by default)
    #[arg(long, value_enum, default_value = "auto")]
    pub from: NotationArg,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: LinkArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;
    let (reference, _) = parse_input(&args.reference, args.from, &catalog)?;

    let uri = match &args.end {
        Some(_) if args.logos => anyhow::bail!("Logos links do not support ranges"),
        Some(_) if args.biblia => anyhow::bail!("Biblia links do not support ranges"),
        None if args.logos => logos_uri(&reference, &catalog)?,
        None if args.biblia => biblia_uri(&reference, &catalog)?,
        None => BibleComLinker::new(&args.edition)?.uri(&reference, &catalog)?,
        Some(end) => {
            let (end, _) = parse_input(end, args.from, &catalog)?;
            let (Reference::Verse(start), Reference::Verse(end)) = (reference.clone(), end) else {
                anyhow::bail!("A linked range needs two verses");
            };
            let range = VerseRange::new(start, end)?;
            BibleComLinker::new(&args.edition)?.range_uri(&range, &catalog)?
        }
    };

    match format {
        OutputFormat::Text => {
            println!("{uri}");
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "reference": reference,
                "uri": uri,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("reference\turi");
            println!("{reference}\t{uri}");
        }
    }

    Ok(())
}
