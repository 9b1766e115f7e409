//! Unified file loading for BOM, paste, and limits inputs.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::domain::{Component, PasteSpecification};
use crate::limits::json_db::JsonLimitsDb;
use crate::parsing::bom_parser;
use crate::parsing::paste_parser;

/// Unified interface for loading planner inputs from disk.
pub struct InputLoader;

impl InputLoader {
    /// Loads a BOM from a CSV file.
    pub fn load_bom(path: &Path) -> Result<Vec<Component>> {
        Self::require_extension(path, "csv")?;
        bom_parser::parse_bom_csv(path)
    }

    /// Loads a paste specification from a JSON file.
    pub fn load_paste(path: &Path) -> Result<PasteSpecification> {
        Self::require_extension(path, "json")?;
        paste_parser::parse_paste_json(path)
    }

    /// Loads an MPN limits database from a JSON file.
    pub fn load_limits_db(path: &Path) -> Result<JsonLimitsDb> {
        Self::require_extension(path, "json")?;
        JsonLimitsDb::from_path(path)
    }

    fn require_extension(path: &Path, expected: &str) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .with_context(|| format!("File {} has no extension", path.display()))?;

        if extension.to_lowercase() != expected {
            anyhow::bail!(
                "Unsupported file format for {}: expected .{expected}, got .{extension}",
                path.display()
            );
        }
        Ok(())
    }
}
