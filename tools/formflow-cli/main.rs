use clap::Parser;
use formflow::prelude::*;
use std::fs;
use std::time::Instant;

/// A declarative form compiler CLI: validate a form document, optionally
/// sync a flow-graph edge list into it, and emit its validation schema.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the form document JSON file
    document_path: String,

    /// Optional path to a flow-graph edge list JSON file to sync first
    #[arg(short, long)]
    edges: Option<String>,

    /// Where to write the compiled schema (prints to stdout when omitted)
    #[arg(short, long)]
    out: Option<String>,

    /// Only validate; skip schema compilation
    #[arg(short, long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let document_json = fs::read_to_string(&cli.document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read document file '{}': {}",
            &cli.document_path, e
        ))
    });
    let mut document = FormDocument::from_json(&document_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse document: {}", e)));
    let load_duration = load_start.elapsed();

    // --- 2. Optional Graph Sync ---
    if let Some(edges_path) = &cli.edges {
        let edges_json = fs::read_to_string(edges_path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read edges file '{}': {}", edges_path, e))
        });
        let edges: Vec<FlowEdge> = serde_json::from_str(&edges_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse edge list: {}", e)));
        document = sync_connections(&document, &edges);
        println!("Synced {} edges into the document.", edges.len());
    }

    // --- 3. Structural Validation ---
    let validate_start = Instant::now();
    let report = validate(&document);
    let validate_duration = validate_start.elapsed();

    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }
    if !report.is_valid {
        for error in &report.errors {
            eprintln!("Error: {}", error);
        }
        exit_with_error(&format!(
            "Document '{}' failed validation with {} error(s)",
            document.title,
            report.errors.len()
        ));
    }
    println!("Document '{}' is structurally valid.", document.title);

    if cli.check {
        println!("\n--- Performance Summary ---");
        println!("File Loading:   {:?}", load_duration);
        println!("Validation:     {:?}", validate_duration);
        println!("Total:          {:?}", total_start.elapsed());
        return;
    }

    // --- 4. Schema Compilation ---
    let compile_start = Instant::now();
    let schema = SchemaCompiler::new(&document).compile();
    let compile_duration = compile_start.elapsed();

    let pretty = serde_json::to_string_pretty(&schema)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize schema: {}", e)));

    match &cli.out {
        Some(out_path) => {
            fs::write(out_path, pretty).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write schema to '{}': {}", out_path, e))
            });
            println!("Schema written to '{}'.", out_path);
        }
        None => println!("{}", pretty),
    }

    println!("\n--- Performance Summary ---");
    println!("File Loading:       {:?}", load_duration);
    println!("Validation:         {:?}", validate_duration);
    println!("Schema Compilation: {:?}", compile_duration);
    println!("---------------------------");
    println!("Total Execution:    {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
