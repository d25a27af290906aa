use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Catalog, Record};

/// Loader failures with a stable shape the UI can name directly; everything
/// else travels as `anyhow` context chains.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("expected a top-level JSON array of row objects")]
    NotAnArray,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a parts catalog from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row names the columns (the shape the shop exports)
/// * `.json` – records-oriented array: `[{ "Year": "2020", ... }, ...]`
///
/// The loader does not validate the column set: a catalog without, say, a
/// `Year` column loads fine and simply offers no options.
pub fn load_file(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(CatalogError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: a header row naming the columns, one catalog row per record.
/// Empty cells are dropped rather than stored as empty strings.
fn load_csv(path: &Path) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        records.push(record);
    }

    Ok(Catalog::new(records, headers))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "Year": "2020", "Make": "Ford", "Model": "F150",
///     "Product Type": "Bumper", "URL": "https://…" },
///   ...
/// ]
/// ```
///
/// Non-string scalars are rendered to their string form so a catalog that
/// stores years as numbers behaves the same as one that quotes them.
fn load_json(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().ok_or(CatalogError::NotAnArray)?;

    let mut columns: BTreeSet<String> = BTreeSet::new();
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("row {i} is not a JSON object"))?;

        let mut record = Vec::new();
        for (name, value) in obj {
            let Some(text) = json_to_field(value) else {
                continue;
            };
            columns.insert(name.clone());
            record.push((name.clone(), text));
        }
        records.push(record.into_iter().collect::<Record>());
    }

    Ok(Catalog::new(records, columns.into_iter().collect()))
}

fn json_to_field(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) if s.is_empty() => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{MAKE, URL, YEAR};

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_csv_with_header() {
        let path = write_temp(
            "fitment_loader_basic.csv",
            "Year,Make,Model,Product Type,URL\n\
             2020,Ford,F150,Bumper,https://x/f150/bumper.html\n\
             2019,Toyota,Tacoma,Grille,https://x/tacoma/grille.html\n",
        );
        let catalog = load_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.column_names,
            vec!["Year", "Make", "Model", "Product Type", "URL"]
        );
        assert_eq!(catalog.records[0].field(YEAR), Some("2020"));
        assert_eq!(catalog.records[1].field(MAKE), Some("Toyota"));
    }

    #[test]
    fn empty_csv_cells_become_absent_fields() {
        let path = write_temp(
            "fitment_loader_gaps.csv",
            "Year,Make,URL\n2020,,https://x/a/b.html\n,Ford,\n",
        );
        let catalog = load_file(&path).unwrap();
        assert_eq!(catalog.records[0].field(MAKE), None);
        assert_eq!(catalog.records[1].field(YEAR), None);
        assert_eq!(catalog.records[1].field(URL), None);
    }

    #[test]
    fn arbitrary_columns_load_without_validation() {
        let path = write_temp("fitment_loader_odd.csv", "Color,Size\nred,XL\n");
        let catalog = load_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records[0].field("Color"), Some("red"));
    }

    #[test]
    fn loads_records_oriented_json() {
        let path = write_temp(
            "fitment_loader_rows.json",
            r#"[
                {"Year": 2020, "Make": "Ford", "URL": "https://x/a.html"},
                {"Year": "2019", "Make": "Toyota", "Notes": null}
            ]"#,
        );
        let catalog = load_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        // Numeric year is stringified.
        assert_eq!(catalog.records[0].field(YEAR), Some("2020"));
        // Nulls are absent, and never contribute a column.
        assert_eq!(catalog.records[1].field("Notes"), None);
        assert_eq!(catalog.column_names, vec!["Make", "URL", "Year"]);
    }

    #[test]
    fn rejects_unsupported_extension() {
        let path = write_temp("fitment_loader_bogus.parquet", "not parquet");
        let err = load_file(&path).unwrap_err();
        assert!(err
            .downcast_ref::<CatalogError>()
            .is_some_and(|e| matches!(e, CatalogError::UnsupportedExtension(ext) if ext == "parquet")));
    }

    #[test]
    fn rejects_non_array_json() {
        let path = write_temp("fitment_loader_obj.json", r#"{"Year": "2020"}"#);
        let err = load_file(&path).unwrap_err();
        assert!(err
            .downcast_ref::<CatalogError>()
            .is_some_and(|e| matches!(e, CatalogError::NotAnArray)));
    }

    #[test]
    fn csv_and_json_agree_on_equivalent_content() {
        let csv_path = write_temp(
            "fitment_loader_eq.csv",
            "Year,Make,Model,Product Type,URL\n2020,Ford,F150,Bumper,https://x/b.html\n",
        );
        let json_path = write_temp(
            "fitment_loader_eq.json",
            r#"[{"Year": "2020", "Make": "Ford", "Model": "F150",
                 "Product Type": "Bumper", "URL": "https://x/b.html"}]"#,
        );
        let from_csv = load_file(&csv_path).unwrap();
        let from_json = load_file(&json_path).unwrap();
        assert_eq!(from_csv.records, from_json.records);
    }
}
