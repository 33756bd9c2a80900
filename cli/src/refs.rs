//! md-image-refs - convert inline Markdown images to reference-style links

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "md-image-refs")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert markdown inline images to reference-style links", long_about = None)]
struct Cli {
    /// Input markdown file path
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print conversion statistics as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = cmd_refs(&cli.input, cli.output.as_deref(), cli.json) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_refs(
    input: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = mdimage::convert_file(input)?;
    let content = result.render();

    let Some(path) = output else {
        println!("{}", content);
        return Ok(());
    };

    mdimage::write_output(path, &content)?;
    println!("{} {}", "Processed content written to:".green(), path.display());

    let stats = result.stats();
    if json {
        println!("{}", stats.to_json()?);
    } else {
        println!();
        println!("{}", "Conversion Statistics:".cyan().bold());
        println!("{}: {}", "Total images converted".bold(), stats.images_converted);
        println!("{}: {}", "Link definitions added".bold(), stats.definitions_added);
    }

    Ok(())
}
