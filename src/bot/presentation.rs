//! Text rendering of catalog and cart contents for chat replies.

use crate::cart::{CartLine, CheckoutSummary};
use crate::catalog::Product;
use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::Table;
use rust_decimal::Decimal;

/// Stock list as a box-drawn table under an "Available products:" heading.
pub fn format_inventory(products: &[Product], currency: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_header(vec!["Item", "Quantity", "Price", "Description"]);
    for p in products {
        table.add_row(vec![
            p.name.clone(),
            p.quantity.to_string(),
            format!("{:.2} {}", p.price, currency),
            p.description.clone(),
        ]);
    }
    format!("Available products:\n{}", table)
}

pub fn format_order_added(quantity: u32, name: &str, total: Decimal, currency: &str) -> String {
    format!("{} {} added to cart. Total: {} {}", quantity, name, total, currency)
}

/// One `name: quantity` line per product.
pub fn format_cart(lines: &[CartLine]) -> String {
    let items = lines
        .iter()
        .map(|l| format!("{}: {}", l.name, l.quantity))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Your cart:\n{}", items)
}

pub fn format_checkout(summary: &CheckoutSummary, currency: &str) -> String {
    let mut details: Vec<String> = summary
        .lines
        .iter()
        .map(|l| format!("{} x {} = {} {}", l.name, l.quantity, l.line_total, currency))
        .collect();
    details.push(format!("Total Price: {} {}", summary.total, currency));

    format!(
        "Your Order Summary:\n{}\nPlease confirm your order by sending /confirm command.",
        details.join("\n")
    )
}

pub fn format_product_details(product: &Product, currency: &str) -> String {
    format!(
        "{} - {}\nPrice: {:.2} {}",
        product.name, product.description, product.price, currency
    )
}

pub fn format_status(products: &[Product]) -> String {
    let mut message = String::from("Product status:");
    for product in products {
        let status = match product.quantity {
            0 => "Out of stock".to_string(),
            n => format!("In stock ({})", n),
        };
        message.push_str(&format!("\n{} - {}", product.name, status));
    }
    message
}
