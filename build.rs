use std::collections::HashSet;
use std::path::Path;

fn main() {
    let books_path = Path::new("catalogs/books.json");
    let chapters_path = Path::new("catalogs/chapter_verses.json");

    let books = read_json(books_path);
    let codes = validate_book_catalog(&books);

    let chapters = read_json(chapters_path);
    validate_chapter_table(&chapters, &codes);

    set_build_dependencies();
}

fn read_json(path: &Path) -> serde_json::Value {
    // Ensure data file exists at build time
    assert!(
        path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        path.display()
    );

    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            path.display()
        );
    });

    assert!(
        value.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Path: {}\n",
        path.display()
    );

    value
}

fn validate_book_catalog(catalog: &serde_json::Value) -> HashSet<String> {
    let books = catalog
        .get("books")
        .and_then(|b| b.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'books' array\n\
                 The book catalog must have a top-level 'books' array.\n"
            );
        });

    let mut codes = HashSet::new();
    let mut ordinals = HashSet::new();
    let mut biblia = HashSet::new();

    for (i, book) in books.iter().enumerate() {
        for field in ["ordinal", "code", "abbreviation", "osis", "name"] {
            assert!(
                book.get(field).is_some(),
                "\n\nCATALOG BUILD ERROR: Book at index {i} missing '{field}' field\n"
            );
        }

        let code = book
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        assert!(
            code.len() == 2 && code.chars().all(|c| c.is_ascii_alphanumeric()),
            "\n\nCATALOG BUILD ERROR: Book at index {i} has invalid code '{code}'\n\
             Codes must be exactly 2 ASCII alphanumeric characters.\n"
        );
        assert!(
            codes.insert(code.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate book code '{code}'\n"
        );

        let ordinal = book
            .get("ordinal")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0);
        assert!(
            ordinal > 0 && ordinals.insert(ordinal),
            "\n\nCATALOG BUILD ERROR: Book '{code}' has a zero or duplicate ordinal {ordinal}\n"
        );

        if let Some(abbreviation) = book.get("biblia").and_then(|v| v.as_str()) {
            assert!(
                biblia.insert(abbreviation.to_string()),
                "\n\nCATALOG BUILD ERROR: Duplicate Biblia abbreviation '{abbreviation}'\n"
            );
        }
    }

    println!(
        "cargo:warning=Validated book catalog: {} books",
        books.len()
    );

    codes
}

fn validate_chapter_table(table: &serde_json::Value, codes: &HashSet<String>) {
    let chapters = table
        .get("chapters")
        .and_then(|c| c.as_object())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'chapters' object\n\
                 The chapter table must map book codes to arrays of last verses.\n"
            );
        });

    for (code, last_verses) in chapters {
        assert!(
            codes.contains(code),
            "\n\nCATALOG BUILD ERROR: Chapter table references unknown book code '{code}'\n"
        );
        let last_verses = last_verses.as_array().unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Chapters for '{code}' must be an array\n");
        });
        for (i, last) in last_verses.iter().enumerate() {
            let last = last.as_u64().unwrap_or(0);
            assert!(
                (1..=999).contains(&last),
                "\n\nCATALOG BUILD ERROR: Book '{code}' chapter {} has invalid last verse {last}\n",
                i + 1
            );
        }
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the embedded data changes
    println!("cargo:rerun-if-changed=catalogs/books.json");
    println!("cargo:rerun-if-changed=catalogs/chapter_verses.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
