use std::collections::BTreeSet;

use super::model::{Catalog, MAKE, MODEL, PRODUCT_TYPE, URL, YEAR};

// ---------------------------------------------------------------------------
// Selection – the cascade position, as an explicit value
// ---------------------------------------------------------------------------

/// The user's partial selection, one optional value per cascade level.
///
/// A level is only meaningful once every level above it is set; the
/// controller guarantees queries never see a gap in the middle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub product: Option<String>,
}

impl Selection {
    /// Field/value pairs for the levels that are currently set.
    fn constraints(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (YEAR, self.year.as_deref()),
            (MAKE, self.make.as_deref()),
            (MODEL, self.model.as_deref()),
            (PRODUCT_TYPE, self.product.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

// ---------------------------------------------------------------------------
// Distinct option sets
// ---------------------------------------------------------------------------

/// All distinct years in the catalog, most recent first.
///
/// Years sort descending by numeric value — unlike every other level, which
/// sorts ascending lexicographically. Values that don't parse as numbers
/// sink to the end.
pub fn unique_years(catalog: &Catalog) -> Vec<String> {
    let set: BTreeSet<&str> = catalog
        .records
        .iter()
        .filter_map(|rec| rec.field(YEAR))
        .collect();
    let mut years: Vec<String> = set.into_iter().map(str::to_string).collect();
    years.sort_by(|a, b| numeric_key(b).total_cmp(&numeric_key(a)));
    years
}

fn numeric_key(year: &str) -> f64 {
    year.trim().parse().unwrap_or(f64::NEG_INFINITY)
}

/// Distinct makes available for a year, ascending lexicographic.
pub fn unique_makes(catalog: &Catalog, year: &str) -> Vec<String> {
    distinct_where(catalog, MAKE, &[(YEAR, year)])
}

/// Distinct models for a (year, make) pair, ascending lexicographic.
pub fn unique_models(catalog: &Catalog, year: &str, make: &str) -> Vec<String> {
    distinct_where(catalog, MODEL, &[(YEAR, year), (MAKE, make)])
}

/// Distinct product types for a (year, make, model) triple, ascending
/// lexicographic.
pub fn unique_products(catalog: &Catalog, year: &str, make: &str, model: &str) -> Vec<String> {
    distinct_where(catalog, PRODUCT_TYPE, &[(YEAR, year), (MAKE, make), (MODEL, model)])
}

/// Distinct values of `column` over the rows matching every (field, value)
/// constraint exactly. Rows missing a constrained field, or missing the
/// target column, simply don't contribute.
fn distinct_where(catalog: &Catalog, column: &str, constraints: &[(&str, &str)]) -> Vec<String> {
    let mut set: BTreeSet<&str> = BTreeSet::new();
    for rec in &catalog.records {
        if constraints.iter().all(|(field, value)| rec.field(field) == Some(*value)) {
            if let Some(v) = rec.field(column) {
                set.insert(v);
            }
        }
    }
    // BTreeSet iteration order is the ascending lexicographic order we want.
    set.into_iter().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Link resolution
// ---------------------------------------------------------------------------

/// URL of the browse-all page for a (year, make, model) triple: the matching
/// row's URL truncated to its parent path.
///
/// Contract: when several rows match with different URLs, the **last** row in
/// catalog order wins. Matching rows without a URL don't overwrite an earlier
/// candidate. `None` when nothing matches.
pub fn browse_all_url(catalog: &Catalog, year: &str, make: &str, model: &str) -> Option<String> {
    last_url_where(catalog, &[(YEAR, year), (MAKE, make), (MODEL, model)]).map(parent_path)
}

/// URL of the product page for a full (year, make, model, product type)
/// selection, verbatim from the catalog. Same last-match-wins contract as
/// [`browse_all_url`].
pub fn product_url(
    catalog: &Catalog,
    year: &str,
    make: &str,
    model: &str,
    product_type: &str,
) -> Option<String> {
    last_url_where(
        catalog,
        &[(YEAR, year), (MAKE, make), (MODEL, model), (PRODUCT_TYPE, product_type)],
    )
}

fn last_url_where(catalog: &Catalog, constraints: &[(&str, &str)]) -> Option<String> {
    let mut url = None;
    for rec in &catalog.records {
        if constraints.iter().all(|(field, value)| rec.field(field) == Some(*value)) {
            if let Some(u) = rec.field(URL) {
                url = Some(u.to_string());
            }
        }
    }
    url
}

/// Strip the final `/`-delimited segment of a URL, keeping the trailing `/`:
/// `…/widget-blue/item12.html` → `…/widget-blue/`. A URL with no `/` at all
/// is returned unchanged.
fn parent_path(url: String) -> String {
    match url.rfind('/') {
        Some(i) => url[..=i].to_string(),
        None => url,
    }
}

// ---------------------------------------------------------------------------
// Row filtering for the results view
// ---------------------------------------------------------------------------

/// Indices of rows matching every level the selection has set; unset levels
/// are unconstrained. An empty selection matches everything.
pub fn matching_indices(catalog: &Catalog, selection: &Selection) -> Vec<usize> {
    catalog
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection
                .constraints()
                .all(|(field, value)| rec.field(field) == Some(value))
        })
        .map(|(i, _)| i)
        .collect()
}
