use clap::{Parser, Subcommand};
use ddsnip::{GenerationRequest, generate};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "ddsnip")]
#[command(about = "ddsnip - ready-to-run Go programs for the Datadog API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go programs from request files
    Generate {
        /// Path to a request .json file or a directory of request files
        #[arg(required_unless_present_any = ["stdin", "domain"])]
        file: Option<PathBuf>,

        /// Read a request from stdin
        #[arg(long, conflicts_with_all = ["file", "domain"])]
        stdin: bool,

        /// Domain to generate for (e.g. metrics, monitors)
        #[arg(long, requires = "operation", conflicts_with = "file")]
        domain: Option<String>,

        /// Operation within the domain (e.g. query, list, create)
        #[arg(long, requires = "domain")]
        operation: Option<String>,

        /// Request parameters as a JSON object
        #[arg(long, requires = "domain")]
        params: Option<String>,

        /// Output as JSON with the entry point and client version
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { file, stdin, domain, operation, params, json } => {
            if stdin {
                generate_stdin(json);
            } else if let Some(domain) = domain {
                let operation = operation.unwrap_or_default();
                generate_inline(&domain, &operation, params.as_deref(), json);
            } else if let Some(path) = file {
                generate_path(&path);
            } else {
                eprintln!("Error: provide a file/directory, --domain/--operation, or --stdin");
                std::process::exit(1);
            }
        }
    }
}

fn generate_stdin(json_output: bool) {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source).expect("Failed to read stdin");

    let request = match GenerationRequest::from_json(&source) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    emit(&request, json_output);
}

fn generate_inline(domain: &str, operation: &str, params: Option<&str>, json_output: bool) {
    let request = match GenerationRequest::from_parts(domain, operation, params) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    emit(&request, json_output);
}

fn emit(request: &GenerationRequest, json_output: bool) {
    let snippet = generate(request);
    if json_output {
        println!("{}", serde_json::to_string(&snippet).expect("Failed to serialize snippet"));
    } else {
        print!("{}", snippet.code);
    }
}

fn generate_path(path: &PathBuf) {
    if path.is_file() {
        if path.extension().map_or(true, |ext| ext != "json") {
            eprintln!("Error: {} is not a .json request file", path.display());
            std::process::exit(1);
        }
        let start = Instant::now();
        generate_file(path);
        let elapsed = start.elapsed();
        print_summary(1, elapsed);
    } else if path.is_dir() {
        generate_directory(path);
    } else {
        eprintln!("Error: {} does not exist", path.display());
        std::process::exit(1);
    }
}

fn generate_directory(dir: &PathBuf) {
    let start = Instant::now();
    let mut file_count = 0;

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
    {
        generate_file(entry.path());
        file_count += 1;
    }

    if file_count == 0 {
        eprintln!("No request .json files found in {}", dir.display());
        std::process::exit(1);
    }

    let elapsed = start.elapsed();
    print_summary(file_count, elapsed);
}

fn generate_file(path: &Path) {
    let source = fs::read_to_string(path).expect("Failed to read file");

    let request = match GenerationRequest::from_json(&source) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Error in {}: {}", path.display(), err);
            std::process::exit(1);
        }
    };

    let snippet = generate(&request);
    let output = path.with_extension("go");
    fs::write(&output, &snippet.code).expect("Failed to write file");
    print_generated(&output.display().to_string());
}

fn print_generated(path: &str) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("  \x1b[32m✓\x1b[0m {}", path);
    } else {
        eprintln!("  ✓ {}", path);
    }
}

fn print_summary(count: usize, elapsed: std::time::Duration) {
    let is_tty = io::stderr().is_terminal();
    let time_str = format_duration(elapsed);
    let files_word = if count == 1 { "file" } else { "files" };

    if is_tty {
        eprintln!("\n\x1b[1m✨ Generated {} {} in {}\x1b[0m", count, files_word, time_str);
    } else {
        eprintln!("\n✨ Generated {} {} in {}", count, files_word, time_str);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
