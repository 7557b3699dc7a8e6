//! Hand-rolled parser for the product import CSV. The format is
//! deliberately small: a header line plus comma-separated rows, with
//! optional surrounding double quotes per value.

/// Required header columns, compared case-insensitively.
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "description", "category", "price", "imageUrl"];

/// One parsed data row. `price` stays raw text so a bad value fails
/// that row at import time instead of aborting the whole parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvProductRow {
    /// 1-based line number in the source file (the header is line 1).
    pub line: usize,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CsvError {
    #[error("csv file is empty")]
    Empty,
    #[error("missing required columns: {0}")]
    MissingColumns(String),
}

/// Parse the import CSV. Header matching is case-insensitive; blank
/// lines are skipped; an empty image URL falls back to
/// `image_fallback`.
pub fn parse_products_csv(
    text: &str,
    image_fallback: &str,
) -> Result<Vec<CsvProductRow>, CsvError> {
    let mut lines = text.lines();
    let header_line = lines.next().ok_or(CsvError::Empty)?;

    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.iter().any(|h| h == &c.to_ascii_lowercase()))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(CsvError::MissingColumns(missing.join(", ")));
    }

    let col = |name: &str| -> usize {
        let lowered = name.to_ascii_lowercase();
        headers
            .iter()
            .position(|h| h == &lowered)
            .unwrap_or(usize::MAX)
    };
    let (name_ix, desc_ix, cat_ix, price_ix, image_ix) = (
        col("name"),
        col("description"),
        col("category"),
        col("price"),
        col("imageUrl"),
    );

    let mut rows = Vec::new();
    for (ix, raw_line) in lines.enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let values: Vec<String> = line.split(',').map(unquote).collect();
        let value = |ix: usize| values.get(ix).cloned().unwrap_or_default();

        let image_url = value(image_ix);
        rows.push(CsvProductRow {
            line: ix + 2,
            name: value(name_ix),
            description: value(desc_ix),
            category: value(cat_ix),
            price: value(price_ix),
            image_url: if image_url.is_empty() {
                image_fallback.to_string()
            } else {
                image_url
            },
        });
    }

    Ok(rows)
}

fn unquote(value: &str) -> String {
    let mut v = value.trim();
    v = v.strip_prefix('"').unwrap_or(v);
    v = v.strip_suffix('"').unwrap_or(v);
    v.to_string()
}

/// Canonical template offered for download by interfaces.
pub fn template() -> String {
    let mut out = String::from("name,description,category,price,imageUrl\n");
    out.push_str(
        "Sample Product,This is a sample product description,Electronics,29.99,https://via.placeholder.com/300x200\n",
    );
    out.push_str(
        "Another Product,Another sample description,Clothing & Apparel,19.99,https://via.placeholder.com/300x200\n",
    );
    out
}
