//! MTG Matcher - resolve card descriptions against a catalog
//!
//! Loads an AllPrintings-style catalog once, then resolves either a single
//! query given on the command line or every row of a query CSV file.

use clap::Parser;
use mtgmatcher::{
    match_card, read_queries, write_results, CardQuery, Index, IndexOptions, ResultRecord,
};
use std::error::Error;
use std::path::PathBuf;

/// MTG card matcher - maps vendor card descriptions to catalog identifiers
#[derive(Parser, Debug)]
#[command(name = "mtgmatcher")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the catalog JSON file
    #[arg(short, long, default_value_t = default_catalog_path())]
    catalog: String,

    /// CSV file of queries (columns: id, name, edition, variation, foil)
    #[arg(short, long)]
    input: Option<String>,

    /// Write batch results to this CSV file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Card name of a single query
    #[arg(long)]
    name: Option<String>,

    /// Edition hint of a single query
    #[arg(long, default_value = "")]
    edition: String,

    /// Variant text of a single query
    #[arg(long, default_value = "")]
    variation: String,

    /// Ask for the foil finish
    #[arg(long, default_value_t = false)]
    foil: bool,

    /// Catalog or vendor identifier of a single query
    #[arg(long)]
    id: Option<String>,

    /// Keep editions only released on digital platforms
    #[arg(long, default_value_t = false)]
    include_online_only: bool,

    /// Leave tokens out of the index
    #[arg(long, default_value_t = false)]
    no_tokens: bool,
}

/// Returns the default catalog path: ~/.local/share/mtgmatcher/AllPrintings.json
fn default_catalog_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mtgmatcher")
        .join("AllPrintings.json")
        .to_string_lossy()
        .to_string()
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let dump = mtg_common::load_catalog(&args.catalog)?;
    let options = IndexOptions {
        include_online_only: args.include_online_only,
        include_tokens: !args.no_tokens,
    };
    let index = Index::build(&dump, &options)?;

    if let Some(input) = &args.input {
        return run_batch(&index, input, args.output.as_deref());
    }

    if args.name.is_none() && args.id.is_none() {
        return Err("nothing to match: pass --input, --name or --id".into());
    }

    let mut query = CardQuery::new(args.name.as_deref().unwrap_or(""))
        .with_edition(&args.edition)
        .with_variation(&args.variation)
        .with_foil(args.foil);
    query.id = args.id.clone();

    match match_card(&index, &query) {
        Ok(id) => {
            println!("{}", id);
            Ok(())
        }
        Err(e) => {
            if let Some(candidates) = e.probe() {
                for candidate in candidates {
                    let card = index.get_card(candidate)?;
                    println!(
                        "{}\t{} #{} ({})",
                        candidate, card.edition_name, card.number, card.name
                    );
                }
            }
            Err(e.into())
        }
    }
}

/// Resolve every row of a query CSV and write one result row per query
fn run_batch(index: &Index, input: &str, output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let records = read_queries(input)?;
    log::info!("Read {} queries from {}", records.len(), input);

    let results: Vec<ResultRecord> = records
        .iter()
        .map(|record| {
            let query = record.to_query();
            let result = match_card(index, &query);
            if let Err(e) = &result {
                log::debug!("'{}' ({}): {}", query.name, query.edition, e);
            }
            ResultRecord::new(&query, &result)
        })
        .collect();

    let resolved = results.iter().filter(|r| r.is_resolved()).count();
    log::info!("Resolved {} of {} queries", resolved, results.len());

    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_results(file, &results)?;
            log::info!("Results written to {}", path);
        }
        None => write_results(std::io::stdout().lock(), &results)?,
    }

    Ok(())
}
