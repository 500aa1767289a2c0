//! nexdoc CLI - generate markdown documentation from parsed NEX DDL trees

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use nexdoc_core::{DeclarationTree, DocGenerator, TreeOutput};

#[derive(Parser)]
#[command(name = "nexdoc")]
#[command(version = nexdoc_core::VERSION)]
#[command(about = "Generate protocol documentation from parsed NEX DDL trees", long_about = None)]
struct Cli {
    /// Parsed declaration trees (JSON array produced by the DDL parser)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the generated documentation
    #[arg(short, long)]
    output: PathBuf,
}

/// What one invocation produced
#[derive(Debug, Default)]
struct Summary {
    documents: usize,
    dumps: usize,
    failed_trees: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let summary = run(&cli.input, &cli.output)?;

    println!(
        "Generated {} protocol document(s) and {} tree dump(s) in {}",
        summary.documents,
        summary.dumps,
        cli.output.display()
    );
    if summary.failed_trees > 0 {
        eprintln!("{} tree(s) were skipped as malformed", summary.failed_trees);
    }

    Ok(())
}

fn run(input: &Path, output: &Path) -> Result<Summary> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let trees: Vec<DeclarationTree> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse declaration trees from {}", input.display()))?;

    fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    let mut generator = DocGenerator::new();
    let mut summary = Summary::default();

    for tree in &trees {
        match generator.generate(tree) {
            Ok(TreeOutput::Protocols(documents)) => {
                for document in documents {
                    let path = output.join(format!("{}.md", document.name));
                    fs::write(&path, document.markdown)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    summary.documents += 1;
                }
            }
            Ok(TreeOutput::NonProtocol { index, dump }) => {
                let path = output.join(format!("tree-{index}.json"));
                fs::write(&path, dump)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                summary.dumps += 1;
            }
            Err(err) => {
                eprintln!("Skipping malformed tree: {err}");
                summary.failed_trees += 1;
            }
        }
    }

    for warning in generator.warnings() {
        eprintln!("Warning: {warning}");
    }

    Ok(summary)
}
