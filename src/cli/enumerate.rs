use std::path::PathBuf;

use clap::Args;

use crate::cli::convert::parse_input;
use crate::cli::{load_catalog, load_chapters, NotationArg, OutputFormat};
use crate::core::range::{ChapterRange, VerseRange};
use crate::core::simplify::Reference;
use crate::core::types::Notation;
use crate::render::render;

#[derive(Args)]
pub struct EnumerateArgs {
    /// First chapter or verse of the range, e.g. "Mark 1:40"
    #[arg(required = true)]
    pub start: String,

    /// Last chapter or verse of the range, e.g. "Mark 3:2"
    #[arg(required = true)]
    pub end: String,

    /// Notation of both inputs (detected by default)
    #[arg(long, value_enum, default_value = "auto")]
    pub from: NotationArg,

    /// Notation to render each item in
    #[arg(long, value_enum, default_value = "canonical")]
    pub to: NotationArg,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Path to a chapter/verse table (defaults to the embedded sample)
    #[arg(long)]
    pub chapters: Option<PathBuf>,
}

pub fn run(args: EnumerateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;
    let (start, _) = parse_input(&args.start, args.from, &catalog)?;
    let (end, _) = parse_input(&args.end, args.from, &catalog)?;
    let table = load_chapters(args.chapters.as_deref())?;

    if let (Some(end_chapter), Some(last)) =
        (end.chapter(), table.last_chapter_of(end.book_code()))
    {
        if end_chapter > last {
            anyhow::bail!(
                "Range ends in chapter {end_chapter} of book {}, which has {last} chapters",
                end.book_code()
            );
        }
    }

    let (range_id, items): (String, Vec<Reference>) = match (start, end) {
        (Reference::Chapter(start), Reference::Chapter(end)) => {
            let range = ChapterRange::new(start, end)?;
            let items = range.enumerate().into_iter().map(Reference::from).collect();
            (range.id().to_string(), items)
        }
        (Reference::Verse(start), Reference::Verse(end)) => {
            let range = VerseRange::new(start, end)?;
            let items = if range.is_cross_chapter() {
                range.enumerate_with(&table)?
            } else {
                range.enumerate()?
            };
            (
                range.id().to_string(),
                items.into_iter().map(Reference::from).collect(),
            )
        }
        (start, end) => anyhow::bail!(
            "A range needs two chapters or two verses, got {} {start} and {} {end}",
            start.granularity(),
            end.granularity()
        ),
    };

    if verbose {
        eprintln!("Range {range_id}: {} items", items.len());
    }

    let target = args.to.notation().unwrap_or(Notation::Canonical);
    let rendered = items
        .iter()
        .map(|item| render(item, target, &catalog))
        .collect::<Result<Vec<_>, _>>()?;

    match format {
        OutputFormat::Text => {
            for line in &rendered {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "range": range_id,
                "count": rendered.len(),
                "items": rendered,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("index\tcanonical\treference");
            for (i, (item, line)) in items.iter().zip(&rendered).enumerate() {
                println!("{}\t{item}\t{line}", i + 1);
            }
        }
    }

    Ok(())
}
