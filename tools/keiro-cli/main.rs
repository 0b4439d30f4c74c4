use clap::{Parser, Subcommand};
use keiro::prelude::*;
use std::fs;

/// Inspect a pipeline dependency catalog from the command line: graph
/// statistics, per-node detail with the full ordered path, search, and the
/// audit matrix.
#[derive(Parser)]
#[command(name = "keiro-cli", version, about)]
struct Cli {
    /// Path to a catalog JSON file; defaults to the bundled pipeline map.
    #[arg(long)]
    catalog: Option<String>,

    /// Show executive labels instead of technical ones.
    #[arg(long)]
    executive: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print node/edge counts and the per-type breakdown.
    Stats,
    /// Print a node's detail record and its full ordered path.
    Inspect { node_id: String },
    /// List nodes matching a case-insensitive substring query.
    Search { query: String },
    /// Print the audit matrix: every node with its transitive in/out degree.
    Audit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json(&fs::read_to_string(path)?)?,
        None => keiro::data::demo_catalog()?,
    };

    let mut controller = Controller::new(catalog, 1280.0, 720.0);
    if cli.executive {
        controller.set_label_mode(LabelMode::Executive);
    }

    match cli.command {
        Command::Stats => {
            let stats = controller.stats();
            println!("{} nodes, {} edges", stats.nodes, stats.edges);
            for node_type in NodeType::ALL {
                let count = controller
                    .scene()
                    .nodes()
                    .iter()
                    .filter(|n| n.node_type == node_type)
                    .count();
                if count > 0 {
                    println!("  {:<22} {}", node_type.style().label, count);
                }
            }
        }
        Command::Inspect { node_id } => {
            let detail = controller.detail_for(&node_id)?;
            println!("{} [{}]", detail.technical_label, detail.type_label);
            println!("  {}", detail.description);
            println!("  Layer: {}", detail.layer);
            println!(
                "  Upstream: {}  Downstream: {}",
                detail.upstream_count, detail.downstream_count
            );
            println!("  Full data path ({} nodes):", detail.path.len());
            for entry in &detail.path {
                let marker = if entry.is_current { ">" } else { " " };
                println!("   {} {}", marker, entry.label);
            }
        }
        Command::Search { query } => {
            controller.set_search(&query);
            let matches: Vec<_> = controller
                .scene()
                .nodes()
                .iter()
                .filter(|n| n.flags.search_match)
                .collect();
            println!("{} match(es) for '{}'", matches.len(), query);
            for element in matches {
                println!(
                    "  {} ({})",
                    keiro::scene::flatten_label(&element.technical_label),
                    element.style.label
                );
            }
        }
        Command::Audit => {
            println!(
                "{:<22} {:<36} {:<14} {:>4} {:>4}",
                "Type", "Name", "Layer", "In", "Out"
            );
            for row in controller.audit_rows() {
                println!(
                    "{:<22} {:<36} {:<14} {:>4} {:>4}",
                    row.type_label, row.name, row.layer, row.upstream_count, row.downstream_count
                );
            }
        }
    }

    Ok(())
}
