//! Fill a running catalog server with a few sample products.
//!
//! ```text
//! cargo run --example seed_catalog -- http://localhost:5000
//! ```

use catalog_sdk::{ProductClient, ProductPayload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000".to_string());
    let client = ProductClient::new(&base_url);

    let samples = [
        ProductPayload::new("Desk lamp", 24.99, "Adjustable arm, warm white LED"),
        ProductPayload::new("Notebook", 4.5, "A5, dotted"),
        ProductPayload::new("Mug", 9.0, ""),
    ];

    for payload in &samples {
        match client.create_product(payload).await {
            Ok(product) => println!("Created #{} {}", product.id, product.name),
            Err(e) => eprintln!("Failed to create {}: {}", payload.name, e.user_message()),
        }
    }

    let products = client.list_products().await?;
    println!("Catalog now holds {} products", products.len());
    Ok(())
}
