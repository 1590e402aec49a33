//! Terminal front-end over the inventory crates: browse, statistics and
//! bulk export against the flat CSV table.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};

use ombor_core::ProductId;
use ombor_export::{build_workbook, download_file_name};
use ombor_inventory::{ProductRecord, catalog};
use ombor_stats::{
    count_by_category, count_by_manager, sorted_desc, summary, units_by_color, units_by_size,
};
use ombor_store::CsvStore;

#[derive(Parser)]
#[command(name = "ombor")]
#[command(about = "Warehouse inventory browser, statistics and export")]
#[command(version)]
struct Cli {
    /// Path of the inventory table
    #[arg(long, default_value = "data/inventory_data.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered
    List {
        /// Keep only these categories (repeatable)
        #[arg(long)]
        category: Vec<String>,

        /// Case-insensitive search over product name and id
        #[arg(long)]
        search: Option<String>,
    },

    /// Print inventory statistics
    Stats,

    /// Write the export workbook as per-sheet CSV files
    Export {
        /// Output directory for the sheet files
        #[arg(long, default_value = "export")]
        out_dir: PathBuf,
    },

    /// Delete one product by id and save the table
    Delete {
        /// Product id to delete
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    ombor_observability::init();

    let cli = Cli::parse();
    let store = CsvStore::new(&cli.data);
    let mut records = store
        .load_all()
        .with_context(|| format!("failed to load inventory table {}", cli.data.display()))?;

    match cli.command {
        Commands::List { category, search } => {
            let term = search.unwrap_or_default();
            let mut shown = 0;
            for record in catalog::filter_by_categories(&records, &category) {
                if !catalog::matches_search(record, &term) {
                    continue;
                }
                print_record(record);
                shown += 1;
            }
            if shown == 0 {
                println!("no products matched");
            }
        }

        Commands::Stats => {
            let totals = summary(&records);
            println!("products: {}", totals.product_count);
            println!("units:    {}", totals.unit_count);
            println!("value:    {:.0}", totals.total_value);

            print_rollup("by category", &sorted_desc(&count_by_category(&records)));
            print_rollup("units by color", &sorted_desc(&units_by_color(&records)));
            print_rollup("units by size", &sorted_desc(&units_by_size(&records)));
            print_rollup("by manager", &sorted_desc(&count_by_manager(&records)));
        }

        Commands::Export { out_dir } => {
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;

            let stem = download_file_name(Local::now().naive_local());
            for sheet in &build_workbook(&records).sheets {
                let path = out_dir.join(format!("{stem}_{}.csv", sheet.name));
                let bytes = sheet
                    .to_csv_bytes()
                    .with_context(|| format!("failed to render sheet {}", sheet.name))?;
                fs::write(&path, bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("wrote {}", path.display());
            }
        }

        Commands::Delete { id } => {
            let id: ProductId = id.parse()?;
            if !catalog::remove(&mut records, &id) {
                anyhow::bail!("no product with id {id}");
            }
            store
                .save_all(&records)
                .context("failed to save inventory table")?;
            println!("deleted {id}");
        }
    }

    Ok(())
}

fn print_record(record: &ProductRecord) {
    println!("{} — {}", record.product_id, record.name);
    println!("  category: {}", record.category);
    println!("  country:  {}", record.country_of_origin);
    println!("  store:    {}", record.store_id);
    println!("  manager:  {}", record.manager);
    println!("  price:    {:.0}", record.unit_price);
    if let Some(image_ref) = &record.image_ref {
        println!("  image:    {image_ref}");
    }
    for (color, sizes) in record.variants.iter() {
        let pairs: Vec<String> = sizes
            .iter()
            .map(|(size, qty)| format!("{size}: {qty} dona"))
            .collect();
        println!("  - {color}: {}", pairs.join(", "));
    }
    println!("---");
}

fn print_rollup(title: &str, ranked: &[(String, u64)]) {
    println!();
    println!("{title}:");
    for (key, count) in ranked {
        println!("  {key}: {count}");
    }
}
