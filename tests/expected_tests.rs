//! Test runner that compares generated programs against .expected.go files
//!
//! Run with: cargo test --test expected_tests

use ddsnip::{GenerationRequest, generate};
use libtest_mimic::{Arguments, Failed, Trial};
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let args = Arguments::from_args();

    let pattern = format!("{}/tests/cases/*.json", env!("CARGO_MANIFEST_DIR"));
    let mut trials = Vec::new();

    for path in glob::glob(&pattern).expect("invalid glob pattern").flatten() {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("case")
            .to_string();
        trials.push(Trial::test(name, move || run_case(&path)));
    }

    libtest_mimic::run(&args, trials).exit();
}

fn run_case(path: &PathBuf) -> Result<(), Failed> {
    let expected_path = path.with_extension("expected.go");
    if !expected_path.exists() {
        return Err(format!("missing expected file: {}", expected_path.display()).into());
    }

    let source = read(path)?;
    let expected = read(&expected_path)?;

    let request =
        GenerationRequest::from_json(&source).map_err(|e| format!("{}: {}", path.display(), e))?;
    let snippet = generate(&request);

    if snippet.code.trim() != expected.trim() {
        return Err(format!(
            "output mismatch: {}\n--- expected ---\n{}\n--- actual ---\n{}",
            path.display(),
            expected.trim(),
            snippet.code.trim()
        )
        .into());
    }

    Ok(())
}

fn read(path: &Path) -> Result<String, Failed> {
    fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e).into())
}
