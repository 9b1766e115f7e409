//! CSV BOM parsing.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::domain::Component;

/// One CSV row. Expected header: `Designator,MPN,Type,Quantity`; quantity
/// is optional and defaults to 1.
#[derive(Debug, Deserialize)]
struct BomRow {
    #[serde(rename = "Designator")]
    designator: String,
    #[serde(rename = "MPN")]
    mpn: String,
    #[serde(rename = "Type")]
    component_type: String,
    #[serde(rename = "Quantity")]
    quantity: Option<u32>,
}

impl From<BomRow> for Component {
    fn from(row: BomRow) -> Self {
        Component {
            designator: row.designator,
            mpn: row.mpn,
            component_type: row.component_type,
            quantity: row.quantity.unwrap_or(1),
        }
    }
}

/// Parses a BOM CSV file into components.
pub fn parse_bom_csv(path: &Path) -> Result<Vec<Component>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open BOM file {}", path.display()))?;
    parse_bom_reader(file).with_context(|| format!("Failed to parse BOM {}", path.display()))
}

/// Parses BOM CSV from any reader.
pub fn parse_bom_reader<R: Read>(reader: R) -> Result<Vec<Component>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut components = Vec::new();
    for (index, row) in csv_reader.deserialize::<BomRow>().enumerate() {
        let row = row.with_context(|| format!("Invalid BOM row {}", index + 2))?;
        components.push(Component::from(row));
    }
    Ok(components)
}
