use std::path::PathBuf;

use clap::Args;

use crate::cli::convert::parse_input;
use crate::cli::{load_catalog, GranularityArg, NotationArg, OutputFormat};
use crate::core::simplify::simplify;
use crate::core::types::Granularity;

#[derive(Args)]
pub struct SimplifyArgs {
    /// Reference to reduce, e.g. "410040030011" or "Mark 4:3"
    #[arg(required = true)]
    pub reference: String,

    /// Level to reduce to
    #[arg(long, value_enum)]
    pub to: GranularityArg,

    /// Notation of the input (detected by default)
    #[arg(long, value_enum, default_value = "auto")]
    pub from: NotationArg,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: SimplifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;
    let (reference, _) = parse_input(&args.reference, args.from, &catalog)?;
    let target = Granularity::from(args.to);
    let simplified = simplify(&reference, target)?;

    match format {
        OutputFormat::Text => {
            println!("{simplified}");
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "input": reference,
                "granularity": target,
                "output": simplified,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("input\tgranularity\toutput");
            println!("{reference}\t{target}\t{simplified}");
        }
    }

    Ok(())
}
