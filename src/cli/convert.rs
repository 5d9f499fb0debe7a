use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::{load_catalog, NotationArg, OutputFormat};
use crate::core::simplify::Reference;
use crate::core::types::Notation;
use crate::parsing;
use crate::render::render;

#[derive(Args)]
pub struct ConvertArgs {
    /// Reference to convert, e.g. "Mark 4:3", "MRK 4:3" or "41004003"
    #[arg(required = true)]
    pub reference: String,

    /// Notation of the input (detected by default)
    #[arg(long, value_enum, default_value = "auto")]
    pub from: NotationArg,

    /// Notation to render
    #[arg(long, value_enum, default_value = "canonical")]
    pub to: NotationArg,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Parse `text` in `from`, detecting the notation when `from` is auto.
pub(crate) fn parse_input(
    text: &str,
    from: NotationArg,
    catalog: &BookCatalog,
) -> anyhow::Result<(Reference, Notation)> {
    let notation = match from.notation() {
        Some(notation) => notation,
        None => parsing::detect_notation(text)?,
    };
    let reference = match from.notation() {
        Some(notation) => parsing::parse(text, notation, catalog)?,
        None => parsing::parse_auto(text, catalog)?,
    };
    Ok((reference, notation))
}

pub fn run(args: ConvertArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;
    let (reference, detected) = parse_input(&args.reference, args.from, &catalog)?;
    let target = args.to.notation().unwrap_or(Notation::Canonical);
    let output = render(&reference, target, &catalog)?;

    if verbose {
        eprintln!("Read '{}' as {detected} notation", args.reference);
    }

    match format {
        OutputFormat::Text => {
            println!("{output}");
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "input": args.reference,
                "from": detected,
                "canonical": &reference,
                "granularity": reference.granularity(),
                "to": target,
                "output": output,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("input\tcanonical\tgranularity\toutput");
            println!(
                "{}\t{}\t{}\t{}",
                args.reference,
                reference,
                reference.granularity(),
                output
            );
        }
    }

    Ok(())
}
