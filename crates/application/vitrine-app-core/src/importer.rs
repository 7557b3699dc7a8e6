//! CSV batch import. The loop never aborts on a bad row: each failure
//! is tallied and reported in aggregate.

use anyhow::Result;
use tracing::debug;

use vitrine_core::csv::{parse_products_csv, CsvError, CsvProductRow};
use vitrine_core::validate::{parse_price, validate_new_product};
use vitrine_core::{NewProduct, Product};

use crate::product_store::ProductStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub successful: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

/// Parse a CSV document and import every row through the store.
/// Only a structurally broken file (missing columns) fails as a
/// whole; row-level problems end up in the report.
pub async fn import_csv_text(store: &ProductStore, text: &str) -> Result<ImportReport, CsvError> {
    let rows = parse_products_csv(text, vitrine_config::PLACEHOLDER_IMAGE_URL)?;
    Ok(import_rows(store, &rows).await)
}

pub async fn import_rows(store: &ProductStore, rows: &[CsvProductRow]) -> ImportReport {
    let mut report = ImportReport::default();
    for row in rows {
        match import_row(store, row).await {
            Ok(product) => {
                debug!(id = %product.id, name = %product.name, "imported product");
                report.successful += 1;
            }
            Err(e) => {
                report.failed += 1;
                let label = if row.name.trim().is_empty() {
                    format!("row {}", row.line)
                } else {
                    row.name.clone()
                };
                report.errors.push(format!("{label}: {e}"));
            }
        }
    }
    report
}

async fn import_row(store: &ProductStore, row: &CsvProductRow) -> Result<Product> {
    let price = parse_price(&row.price)?;
    let input = NewProduct {
        name: row.name.clone(),
        category: row.category.clone(),
        description: row.description.clone(),
        price,
        image_url: row.image_url.clone(),
        keywords: None,
    };
    validate_new_product(&input)?;
    store.add_product(input).await
}
