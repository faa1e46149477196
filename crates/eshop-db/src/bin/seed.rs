//! # Seed Data Generator
//!
//! Populates the catalog collections with the storefront demo data.
//!
//! ## Usage
//! ```bash
//! # Seed against MONGODB_URI (default mongodb://localhost/e-shop)
//! cargo run -p eshop-db --bin seed
//!
//! # Seed a specific deployment
//! cargo run -p eshop-db --bin seed -- --uri mongodb://db.internal/e-shop
//!
//! # Wipe and reseed
//! cargo run -p eshop-db --bin seed -- --force
//! ```
//!
//! This binary doubles as the reference startup routine: it constructs the
//! one process-wide connection handle from the environment and passes it to
//! the repositories that need it.

use std::env;

use mongodb::bson::oid::ObjectId;
use tracing_subscriber::EnvFilter;

use eshop_core::{Category, Product};
use eshop_db::{Connection, DbConfig};

/// Demo catalog: category name, then (name, description, image, price_cents,
/// quantity) per product.
const CATALOG: &[(&str, &[(&str, &str, &str, i64, i64)])] = &[
    (
        "Food",
        &[
            (
                "Tin of Cookies",
                "A tin of delicious cookies for sharing.",
                "cookie-tin.jpg",
                299,
                500,
            ),
            (
                "Canned Coffee",
                "Cold brew coffee, ready to drink.",
                "canned-coffee.jpg",
                199,
                120,
            ),
            (
                "Dried Mango",
                "Sweet dried mango slices, no added sugar.",
                "dried-mango.jpg",
                349,
                80,
            ),
        ],
    ),
    (
        "Household Supplies",
        &[
            (
                "Toilet Paper",
                "Twelve-roll pack of two-ply toilet paper.",
                "toilet-paper.jpg",
                799,
                40,
            ),
            (
                "Handmade Soap",
                "Lavender soap, made in small batches.",
                "soap.jpg",
                399,
                60,
            ),
        ],
    ),
    (
        "Electronics",
        &[
            (
                "Camera",
                "Compact point-and-shoot camera.",
                "camera.jpg",
                39999,
                10,
            ),
            (
                "Tablet",
                "Ten-inch tablet with a day of battery life.",
                "tablet.jpg",
                24999,
                15,
            ),
        ],
    ),
    (
        "Books",
        &[
            (
                "Spinning Top Hobby Guide",
                "Everything there is to know about spinning tops.",
                "spinning-top-book.jpg",
                1499,
                25,
            ),
            (
                "Cookbook of Failures",
                "Recipes that went wrong so yours don't have to.",
                "cookbook.jpg",
                1999,
                30,
            ),
        ],
    ),
    (
        "Toys",
        &[
            (
                "Spinning Top",
                "A classic wooden spinning top.",
                "spinning-top.jpg",
                599,
                200,
            ),
            (
                "Plastic Horses",
                "A bag of assorted plastic horses.",
                "plastic-horses.jpg",
                299,
                150,
            ),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut uri: Option<String> = None;
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--uri" | "-u" => {
                if i + 1 < args.len() {
                    uri = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--force" | "-f" => {
                force = true;
            }
            "--help" | "-h" => {
                println!("e-shop Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -u, --uri <URI>    Connection string (default: MONGODB_URI or");
                println!("                     mongodb://localhost/e-shop)");
                println!("  -f, --force        Clear existing catalog data before seeding");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match uri {
        Some(uri) => DbConfig::new(uri),
        None => DbConfig::from_env(),
    }
    .app_name("e-shop-seed");

    println!("🌱 e-shop Seed Data Generator");
    println!("=============================");
    println!("URI:      {}", config.uri);
    println!();

    // Connect to the database
    let connection = Connection::connect(config).await?;
    println!("✓ Database: {}", connection.database_name());

    let products = connection.products();
    let categories = connection.categories();

    // Check existing catalog data
    let existing = products.count().await? + categories.count().await?;
    if existing > 0 {
        if !force {
            println!("⚠ Catalog already has {} documents", existing);
            println!("  Skipping seed to avoid duplicates.");
            println!("  Re-run with --force to wipe and reseed.");
            return Ok(());
        }

        let removed = products.clear().await? + categories.clear().await?;
        println!("✓ Cleared {} existing documents", removed);
    }

    // Generate and insert the catalog
    println!();
    println!("Seeding catalog...");

    let mut category_docs = Vec::new();
    let mut product_docs = Vec::new();

    for (category_name, items) in CATALOG {
        let category = Category {
            id: ObjectId::new().to_hex(),
            name: (*category_name).to_string(),
        };

        for (name, description, image, price_cents, quantity) in *items {
            product_docs.push(Product {
                id: ObjectId::new().to_hex(),
                name: (*name).to_string(),
                description: (*description).to_string(),
                image: (*image).to_string(),
                price_cents: *price_cents,
                quantity: *quantity,
                category: category.id.clone(),
            });
        }

        category_docs.push(category);
    }

    let inserted_categories = categories.insert_many(&category_docs).await?;
    let inserted_products = products.insert_many(&product_docs).await?;

    println!("✓ Inserted {} categories", inserted_categories);
    println!("✓ Inserted {} products", inserted_products);

    // Verify what the storefront will see
    println!();
    println!("Verifying catalog...");
    for category in categories.list().await? {
        let in_category = products.list_by_category(&category.id).await?;
        println!("  {}: {} products", category.name, in_category.len());
    }

    connection.shutdown().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
