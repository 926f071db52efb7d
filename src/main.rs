//! javadoc-md — generate Markdown documentation from doc comments.
//!
//! Two modes:
//!
//! - **stdin mode**: `javadoc-md -l jsdoc < widget.js`
//! - **directory mode**: `javadoc-md -s src/ -o docs/ --include-filenames '\.java$'`

use anyhow::{Context, Result};
use clap::Parser;
use javadoc_md::batch::{self, BatchOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "javadoc-md",
    about = "Generate Markdown documentation from Javadoc, PHPDoc and JSDoc comments"
)]
struct Cli {
    /// Doc comment flavor (case-insensitive): javadoc, phpdoc, jsdoc
    #[arg(short = 'l', long, default_value = batch::DEFAULT_LANGUAGE)]
    language: String,

    /// Headings level of the document title (1-6); declarations use one level deeper
    #[arg(
        short = 'H',
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..=6)
    )]
    headings_level: u8,

    /// Source directory to convert. If omitted, reads source from stdin.
    #[arg(short = 's', long)]
    src_dir: Option<PathBuf>,

    /// Write one <name>.md per source file into this directory
    #[arg(short = 'o', long, requires = "src_dir", conflicts_with = "output_file")]
    output_dir: Option<PathBuf>,

    /// Concatenate all documents into this file
    #[arg(short = 'O', long, requires = "src_dir")]
    output_file: Option<PathBuf>,

    /// Only convert files whose name matches this regex (default: every file)
    #[arg(long)]
    include_filenames: Option<String>,

    /// Only convert files whose contents match this regex (default: non-empty)
    #[arg(long)]
    include_file_contents: Option<String>,

    /// Print the supported languages and exit
    #[arg(long)]
    list_languages: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_languages {
        for name in javadoc_md::registry().names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Fail before touching any input
    javadoc_md::registry().get(&cli.language)?;

    match cli.src_dir {
        Some(ref dir) => dir_mode(&cli, dir),
        None => stdin_mode(&cli),
    }
}

/// stdin mode: read source from stdin, write markdown to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let markdown = javadoc_md::convert(&cli.language, &input, cli.headings_level.into())?;
    print!("{}", markdown);
    Ok(())
}

/// directory mode: convert every matching file, then write or print.
fn dir_mode(cli: &Cli, dir: &Path) -> Result<()> {
    let options = BatchOptions {
        language: cli.language.clone(),
        headings_level: cli.headings_level.into(),
        include_filenames: cli.include_filenames.clone(),
        include_file_contents: cli.include_file_contents.clone(),
        output_dir: cli.output_dir.clone(),
        output_file: cli.output_file.clone(),
    };

    let written = batch::output(dir, &options, &mut io::stdout().lock())
        .with_context(|| format!("failed to convert {}", dir.display()))?;

    if !written.is_empty() {
        println!("Markdown files:");
        for path in &written {
            println!("  {}", path.display());
        }
    }
    Ok(())
}
