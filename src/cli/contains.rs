use std::path::PathBuf;

use clap::Args;

use crate::cli::convert::parse_input;
use crate::cli::{load_catalog, NotationArg, OutputFormat};

#[derive(Args)]
pub struct ContainsArgs {
    /// The enclosing reference, e.g. "Mark 4"
    #[arg(required = true)]
    pub outer: String,

    /// The reference to test, e.g. "Mark 4:3"
    #[arg(required = true)]
    pub inner: String,

    /// Notation of both inputs (detected by default)
    #[arg(long, value_enum, default_value = "auto")]
    pub from: NotationArg,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: ContainsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;
    let (outer, _) = parse_input(&args.outer, args.from, &catalog)?;
    let (inner, _) = parse_input(&args.inner, args.from, &catalog)?;
    let includes = outer.includes(&inner)?;

    match format {
        OutputFormat::Text => {
            println!("{includes}");
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "outer": outer,
                "inner": inner,
                "includes": includes,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("outer\tinner\tincludes");
            println!("{outer}\t{inner}\t{includes}");
        }
    }

    Ok(())
}
