//! Command-line interface for the parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{load_blocks, load_style_rules, Format};
use crate::error::Result;
use crate::output::{render, write_output};
use crate::style::create_default_style_registry;
use crate::tree::{LegalAct, TreeBuilder};

/// Legal act parser - build a structured tree from style-tagged paragraphs.
#[derive(Parser)]
#[command(name = "legalact-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a block file and print or save the tree.
    Parse {
        /// Block file (.yaml, .yml or .json)
        blocks: PathBuf,

        /// YAML file with additional style rules
        #[arg(short, long)]
        styles: Option<PathBuf>,

        /// Output format: yaml or json
        #[arg(short, long, default_value = "yaml")]
        format: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print node counts and diagnostics for a block file.
    Summary {
        /// Block file (.yaml, .yml or .json)
        blocks: PathBuf,

        /// YAML file with additional style rules
        #[arg(short, long)]
        styles: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            blocks,
            styles,
            format,
            output,
        } => parse_command(&blocks, styles.as_deref(), &format, output.as_deref()),
        Commands::Summary { blocks, styles } => summary_command(&blocks, styles.as_deref()),
    }
}

fn build(blocks_path: &Path, styles_path: Option<&Path>) -> Result<LegalAct> {
    let registry = match styles_path {
        Some(path) => load_style_rules(path)?,
        None => create_default_style_registry(),
    };
    let blocks = load_blocks(blocks_path)?;
    Ok(TreeBuilder::new().with_styles(registry).build(&blocks))
}

/// Execute the parse command.
fn parse_command(
    blocks_path: &Path,
    styles_path: Option<&Path>,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    // Validate the format before doing any work
    let format: Format = format.parse()?;
    let act = build(blocks_path, styles_path)?;
    let content = render(&act, format)?;

    match output {
        Some(path) => {
            write_output(&content, path)?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => print!("{content}"),
    }

    if !act.diagnostics.is_empty() {
        eprintln!(
            "{} {}",
            style("Diagnostics:").yellow().bold(),
            act.diagnostics.len()
        );
    }
    Ok(())
}

/// Execute the summary command.
fn summary_command(blocks_path: &Path, styles_path: Option<&Path>) -> Result<()> {
    let act = build(blocks_path, styles_path)?;
    let stats = act.stats();

    println!(
        "{} {}",
        style("Summary of").bold(),
        style(blocks_path.display()).cyan()
    );
    println!();
    if let Some(first) = act.preamble.first() {
        println!("  Act: {}", style(first).green());
    }
    println!("  Divisions: {}", stats.divisions);
    println!(
        "  Articles: {} ({} amending)",
        stats.articles, stats.amending_articles
    );
    println!("  Subsections: {}", stats.subsections);
    println!("  Points: {}", stats.points);
    println!("  Letters: {}", stats.letters);
    println!("  Tirets: {}", stats.tirets);
    println!("  Amendments: {}", stats.amendments);

    let unresolved = act
        .all_amendments()
        .iter()
        .filter(|amendment| amendment.amended_act.is_none())
        .count();
    if unresolved > 0 {
        println!("  Unresolved amendments: {}", style(unresolved).yellow());
    }

    if !act.diagnostics.is_empty() {
        println!();
        println!(
            "{} {}",
            style("Diagnostics:").yellow().bold(),
            stats.diagnostics
        );
        for diagnostic in &act.diagnostics {
            println!(
                "  {} {}",
                style(&diagnostic.block_id).dim(),
                diagnostic.message
            );
        }
    }

    Ok(())
}
