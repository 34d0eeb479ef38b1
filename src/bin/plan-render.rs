//! CLI tool to render a saved plan (.json) as highlighted HTML.
//!
//! Usage:
//!   plan-render <plan.json>
//!   plan-render <plan.json> --page -o plan.html
//!   plan-render --download-name 2025-06-01T12:30:45.123Z

use clap::Parser;
use creative_agent::{download_file_name, plan_document, plan_fragment};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Render a plan JSON file the way the web form shows it.
#[derive(Parser)]
#[command(name = "plan-render")]
struct Cli {
    /// Plan file (any JSON document)
    #[arg(required_unless_present = "download_name")]
    plan: Option<String>,

    /// Write HTML to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Emit a standalone page with styles instead of a fragment
    #[arg(long)]
    page: bool,

    /// Print the download file name for an ISO-8601 timestamp and exit
    #[arg(long, value_name = "TIMESTAMP")]
    download_name: Option<String>,

    /// Show paths and sizes on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(stamp) = &cli.download_name {
        println!("{}", download_file_name(stamp));
        return;
    }

    let Some(plan_path) = &cli.plan else {
        eprintln!("No plan file given");
        process::exit(1);
    };

    let plan_text = match fs::read_to_string(plan_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading plan file '{plan_path}': {e}");
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Plan:   {plan_path}");
        eprintln!("Output: {}", cli.output.as_deref().unwrap_or("(stdout)"));
        eprintln!("Mode:   {}", if cli.page { "page" } else { "fragment" });
    }

    let rendered = if cli.page {
        plan_document(&plan_text)
    } else {
        plan_fragment(&plan_text)
    };

    let html = match rendered {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Render error: {e}");
            process::exit(1);
        }
    };

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &html) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(html.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    if cli.verbose {
        eprintln!("Bytes:  {} in -> {} out", plan_text.len(), html.len());
    }
}
