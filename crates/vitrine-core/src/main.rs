//! Demo binary: a minimal rendering collaborator for the storefront core.
//!
//! Loads a JSON record file (the stand-in for the external CSV loader),
//! prints the featured region across a few ticks, and demonstrates
//! expansion backfill and free-text search. All formatting lives here;
//! the core only hands out structured data.

use clap::{value_parser, Arg, Command};
use vitrine_core::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let matches = Command::new("vitrine")
        .version(vitrine_core::VERSION)
        .about("Storefront core demo: featured rotation over a product catalog")
        .arg(
            Arg::new("records")
                .long("records")
                .required(true)
                .help("Path to a JSON array of field-name to text records"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Random seed for reproducible rotations"),
        )
        .arg(
            Arg::new("ticks")
                .long("ticks")
                .default_value("3")
                .value_parser(value_parser!(u32))
                .help("Number of rotations to print"),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .help("Free-text filter to run against the catalog"),
        )
        .get_matches();

    let records = matches.get_one::<String>("records").expect("required");
    let ticks = *matches.get_one::<u32>("ticks").expect("defaulted");
    let sampler = match matches.get_one::<u64>("seed") {
        Some(seed) => Sampler::from_seed(*seed),
        None => Sampler::from_entropy(),
    };

    let config = StorefrontConfig::new();
    let source = JsonFileSource::new(records);
    let mut shop = Storefront::open(&source, config, sampler).await?;

    println!(
        "catalog: {} products, {} units in stock",
        shop.catalog().len(),
        shop.catalog().total_stock()
    );

    for round in 0..ticks {
        println!("\n-- featured (rotation {round}) --");
        render_featured(&shop).await;

        if round == 0 {
            // expand the first featured card to show the slot backfill
            let first = shop.featured().await[0].id.clone();
            match shop.expand(&first).await {
                Ok(_) => {
                    println!("\n-- expanded panels --");
                    for p in shop.expanded().await {
                        println!("  {} | {} | stock: {}", p.title, p.display_price(), p.stock);
                    }
                    println!("\n-- featured after backfill --");
                    render_featured(&shop).await;
                }
                Err(e) => println!("  ({e})"),
            }
        }

        shop.tick_now().await;
    }

    if let Some(query) = matches.get_one::<String>("query") {
        let hits = shop.search(query);
        println!("\n-- search {query:?}: {} hits --", hits.len());
        if hits.is_empty() {
            println!("  no results found");
        }
        for p in hits {
            println!("  {} | {}", p.title, p.display_price());
        }
    }

    shop.shutdown().await;
    Ok(())
}

async fn render_featured(shop: &Storefront) {
    let limit = shop.config().truncation_length;
    for p in shop.featured().await {
        println!(
            "  {} | {} | {}",
            p.title,
            p.display_price(),
            p.truncated_description(limit)
        );
    }
}
