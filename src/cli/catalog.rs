use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{load_catalog, load_chapters, CanonArg, OutputFormat};
use crate::core::book::BookRecord;
use crate::core::canon::Canon;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List the books in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only books of this canon, in canon order
        #[arg(long, value_enum)]
        canon: Option<CanonArg>,
    },

    /// Show every key of one book
    Show {
        /// Code, USFM abbreviation, OSIS id, name, Biblia abbreviation or ordinal
        #[arg(required = true)]
        key: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Path to a chapter/verse table (defaults to the embedded sample)
        #[arg(long)]
        chapters: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, canon } => {
            run_list(catalog, canon.map(Canon::from), format, verbose)
        }
        CatalogCommands::Show {
            key,
            catalog,
            chapters,
        } => run_show(&key, catalog, chapters, format, verbose),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog, verbose),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    canon: Option<Canon>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    let books: Vec<&BookRecord> = match canon {
        Some(canon) => catalog.canon_books(canon)?,
        None => {
            let mut books: Vec<&BookRecord> = catalog.books().iter().collect();
            books.sort_by_key(|b| b.ordinal);
            books
        }
    };

    match format {
        OutputFormat::Text => {
            let name_width = books.iter().map(|b| b.name.len()).max().unwrap_or(4).max(4);
            let osis_width = books.iter().map(|b| b.osis.len()).max().unwrap_or(4).max(4);
            let total_width = 7 + 5 + 5 + osis_width + name_width + 4;

            match canon {
                Some(canon) => println!("Book Catalog ({} books, {canon} canon)\n", books.len()),
                None => println!("Book Catalog ({} books)\n", books.len()),
            }
            println!(
                "{:>7} {:<5} {:<5} {:<osis_w$} {:<name_w$}",
                "Ordinal",
                "Code",
                "USFM",
                "OSIS",
                "Name",
                osis_w = osis_width,
                name_w = name_width
            );
            println!("{}", "-".repeat(total_width));

            for b in &books {
                println!(
                    "{:>7} {:<5} {:<5} {:<osis_w$} {:<name_w$}",
                    b.ordinal,
                    b.code,
                    b.abbreviation,
                    b.osis,
                    b.name,
                    osis_w = osis_width,
                    name_w = name_width
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&books)?);
        }
        OutputFormat::Tsv => {
            println!("ordinal\tcode\tabbreviation\tosis\tname\talt_name");
            for b in &books {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    b.ordinal,
                    b.code,
                    b.abbreviation,
                    b.osis,
                    b.name,
                    b.alt_name.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

fn run_show(
    key: &str,
    catalog_path: Option<PathBuf>,
    chapters_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;
    let book = catalog.resolve(key)?;
    let chapter_count = load_chapters(chapters_path.as_deref())?.last_chapter_of(&book.code);

    match format {
        OutputFormat::Text => {
            println!("Book: {}\n", book.name);
            println!("Code:           {}", book.code);
            println!("Alternate code: {}", book.alternate_code());
            println!("Ordinal:        {}", book.ordinal);
            println!("USFM:           {}", book.abbreviation);
            println!("OSIS:           {}", book.osis);
            println!("Logos:          {}", book.logos_ref());
            println!("Canon prefix:   {}", book.canon_prefix());
            if let Some(biblia) = &book.biblia {
                println!("Biblia:         {biblia}");
            }
            if let Some(count) = chapter_count {
                println!("Chapters:       {count}");
            }
            if let Some(alt_name) = &book.alt_name {
                println!("Also called:    {alt_name}");
            }

            let canons: Vec<String> = Canon::ALL
                .iter()
                .filter(|canon| canon.abbreviations().any(|a| a == book.abbreviation))
                .map(ToString::to_string)
                .collect();
            if !canons.is_empty() {
                println!("\nCanons: {}", canons.join(", "));
            }
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_value(book)?;
            json["alternate_code"] = serde_json::json!(book.alternate_code());
            json["canon_prefix"] = serde_json::json!(book.canon_prefix());
            json["chapters"] = serde_json::json!(chapter_count);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("ordinal\tcode\talternate_code\tabbreviation\tosis\tname\tchapters");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                book.ordinal,
                book.code,
                book.alternate_code(),
                book.abbreviation,
                book.osis,
                book.name,
                chapter_count.map(|n| n.to_string()).unwrap_or_default()
            );
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!("Exported {} books to {}", catalog.len(), output.display());

    Ok(())
}
