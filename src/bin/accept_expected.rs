//! Binary to generate/update the .expected.go files under tests/cases/
//!
//! Usage:
//!   cargo run --bin accept_expected              # Update all
//!   cargo run --bin accept_expected -- metrics   # Update only cases matching "metrics"

use ddsnip::{GenerationRequest, generate};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let filter: Option<String> = std::env::args().nth(1);
    let case_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("cases");

    let mut updated = 0;
    let mut skipped = 0;

    for entry in WalkDir::new(&case_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|s| s == "json").unwrap_or(false))
    {
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if let Some(ref f) = filter {
            if !path_str.contains(f) {
                skipped += 1;
                continue;
            }
        }

        process_file(path);
        updated += 1;
    }

    println!("Updated {} files, skipped {}", updated, skipped);
}

fn process_file(path: &Path) {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {:?}: {}", path, e);
            return;
        }
    };

    let request = match GenerationRequest::from_json(&source) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Invalid request {:?}: {}", path, e);
            return;
        }
    };

    let snippet = generate(&request);
    let expected_go = path.with_extension("expected.go");
    if let Err(e) = fs::write(&expected_go, &snippet.code) {
        eprintln!("Failed to write {:?}: {}", expected_go, e);
    } else {
        println!("  wrote {}", expected_go.display());
    }
}
