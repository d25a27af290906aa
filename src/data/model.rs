use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// The columns the cascade cares about. A catalog may carry any number of
/// extra columns; they ride along untouched and show up in the results table.
pub const YEAR: &str = "Year";
pub const MAKE: &str = "Make";
pub const MODEL: &str = "Model";
pub const PRODUCT_TYPE: &str = "Product Type";
pub const URL: &str = "URL";

// ---------------------------------------------------------------------------
// Record – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog row: field name → string value.
///
/// Rows are structurally equal, never mutated after load, and duplicates are
/// expected — deduplication is the query layer's job, not the source's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Record { fields }
    }

    /// Look up a field value. Missing and empty values are both `None`, so
    /// callers never have to distinguish "column absent" from "cell blank".
    pub fn field(&self, name: &str) -> Option<&str> {
        match self.fields.get(name).map(String::as_str) {
            Some("") | None => None,
            some => some,
        }
    }

    /// Iterate over all (name, value) pairs of this row.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Record::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed catalog, loaded once and read-only for the session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All rows, in source order. Order matters: link resolution is
    /// last-match-wins over this sequence.
    pub records: Vec<Record>,
    /// Ordered column names, as named by the source header (or the union of
    /// keys for header-less sources).
    pub column_names: Vec<String>,
}

impl Catalog {
    /// Build a catalog from parsed rows, preserving the source header order
    /// where the loader knows it.
    pub fn new(records: Vec<Record>, column_names: Vec<String>) -> Self {
        Catalog {
            records,
            column_names,
        }
    }

    /// Build a catalog from rows alone, deriving the column list from the
    /// union of field names across all rows.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut columns: BTreeSet<String> = BTreeSet::new();
        for rec in &records {
            for (name, _) in rec.fields() {
                columns.insert(name.to_string());
            }
        }
        Catalog {
            records,
            column_names: columns.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn field_treats_empty_as_absent() {
        let rec = record(&[(YEAR, "2020"), (MAKE, "")]);
        assert_eq!(rec.field(YEAR), Some("2020"));
        assert_eq!(rec.field(MAKE), None);
        assert_eq!(rec.field(MODEL), None);
    }

    #[test]
    fn from_records_unions_column_names() {
        let catalog = Catalog::from_records(vec![
            record(&[(YEAR, "2020"), (MAKE, "Ford")]),
            record(&[(MODEL, "F150"), ("Notes", "clearance")]),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.column_names, vec!["Make", "Model", "Notes", "Year"]);
    }
}
