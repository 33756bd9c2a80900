//! md-image-align - normalize alignment wrappers around Markdown images

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "md-image-align")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Format image alignments in markdown files", long_about = None)]
struct Cli {
    /// Path to the input markdown file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Default alignment for images (left, center, right)
    #[arg(long, default_value = "center")]
    alignment: String,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = cmd_align(&cli.input, &cli.alignment) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_align(input: &Path, alignment: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{} {}...", "Formatting images in".cyan(), input.display());

    let (output, result) = mdimage::format_file(input, alignment)?;

    log::info!(
        "{} of {} lines formatted, {} extra image tags dropped",
        result.stats.images_formatted,
        result.stats.lines,
        result.stats.extra_images_dropped
    );

    println!(
        "{} {}",
        "Successfully created formatted file:".green(),
        output.display()
    );

    Ok(())
}
