//! # Seed Data Generator
//!
//! Populates the database with demo products for local development of the
//! admin SPA.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p shopdesk-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p shopdesk-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p shopdesk-db --bin seed -- --db ./data/shopdesk.db
//! ```
//!
//! ## Generated Products
//! Office furniture and accessories, each with:
//! - Name: `{Finish} {Item}` (e.g. "Walnut Desk Organizer")
//! - Price: $4.99 - $499.99
//! - Stock: 0 - 40

use std::env;
use std::sync::Arc;

use shopdesk_core::{CatalogService, Money, NewProduct};
use shopdesk_db::{Database, DbConfig};

/// Items and their base price in cents
const ITEMS: &[(&str, i64)] = &[
    ("Standing Desk", 34_900),
    ("Desk Organizer", 1_999),
    ("Monitor Arm", 8_950),
    ("Task Chair", 24_900),
    ("Desk Lamp", 4_500),
    ("Cable Tray", 2_999),
    ("Footrest", 3_950),
    ("Keyboard Tray", 5_499),
    ("Filing Cabinet", 18_900),
    ("Pen Cup", 499),
];

/// Finishes, each adding a price premium in cents
const FINISHES: &[(&str, i64)] = &[
    ("Oak", 0),
    ("Walnut", 1_500),
    ("Matte Black", 500),
    ("Brushed Steel", 1_000),
    ("White", 0),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./data/shopdesk.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Shopdesk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./data/shopdesk.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Shopdesk Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Arc::new(Database::new(DbConfig::new(&db_path)).await?);

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Go through the catalog service so seeded rows obey the same rules as
    // products created from the admin SPA
    let catalog = CatalogService::new(db.clone());

    println!();
    println!("Generating products...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let product = generate_product(seed);
        let name = product.name.clone();

        if let Err(e) = catalog.create_product(product).await {
            eprintln!("Failed to insert {}: {}", name, e);
            continue;
        }

        generated += 1;
        if generated % 25 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    println!();
    println!("✓ Generated {} products in {:?}", generated, start.elapsed());

    db.close().await;
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single demo product.
fn generate_product(seed: usize) -> NewProduct {
    let (item, base_price) = ITEMS[seed % ITEMS.len()];
    let (finish, premium) = FINISHES[(seed / ITEMS.len()) % FINISHES.len()];
    let batch = seed / (ITEMS.len() * FINISHES.len());

    let name = if batch == 0 {
        format!("{} {}", finish, item)
    } else {
        format!("{} {} Mk{}", finish, item, batch + 1)
    };

    NewProduct {
        description: format!("{} in a {} finish.", item, finish.to_lowercase()),
        name,
        price: Money::from_cents(base_price + premium),
        available_quantity: Some(((seed * 7) % 41) as i64),
        created_by: Some("seed".to_string()),
    }
}
