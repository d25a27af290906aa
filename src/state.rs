use std::path::Path;

use crate::data::filter::{
    browse_all_url, matching_indices, product_url, unique_makes, unique_models, unique_products,
    unique_years, Selection,
};
use crate::data::loader;
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Owns the four-level cascade: every setter re-populates the level below it
/// and clears everything further downstream, so a level's options always
/// reflect the levels above it.
pub struct AppState {
    /// Loaded catalog (None until a file loads successfully).
    pub catalog: Option<Catalog>,

    /// Current cascade position, passed by value into every query.
    pub selection: Selection,

    /// Cached option lists, one per dropdown.
    pub year_options: Vec<String>,
    pub make_options: Vec<String>,
    pub model_options: Vec<String>,
    pub product_options: Vec<String>,

    /// Indices of catalog rows matching the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Browse-all link for the selected (year, make, model), once resolved.
    pub browse_all: Option<String>,

    /// URL queued for navigation after a terminal product selection.
    pending_url: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: None,
            selection: Selection::default(),
            year_options: Vec::new(),
            make_options: Vec::new(),
            model_options: Vec::new(),
            product_options: Vec::new(),
            visible_indices: Vec::new(),
            browse_all: None,
            pending_url: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog and reset the cascade to the top.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.selection = Selection::default();
        self.year_options = unique_years(&catalog);
        self.make_options.clear();
        self.model_options.clear();
        self.product_options.clear();
        self.browse_all = None;
        self.pending_url = None;
        self.visible_indices = (0..catalog.len()).collect();

        self.catalog = Some(catalog);
        self.status_message = None;
        self.loading = false;
    }

    /// Load a catalog file into the state, reporting failure once via the
    /// log and the status line. On failure the previous catalog (if any)
    /// stays usable.
    pub fn load_catalog_from(&mut self, path: &Path) {
        self.loading = true;
        match loader::load_file(path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} catalog rows with columns {:?}",
                    catalog.len(),
                    catalog.column_names
                );
                self.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load catalog {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    // -- Cascade transitions ------------------------------------------------

    /// Select (or with `None`, de-select) a year. Re-populates makes and
    /// collapses everything below.
    pub fn select_year(&mut self, year: Option<String>) {
        self.selection.year = year;
        self.selection.make = None;
        self.selection.model = None;
        self.selection.product = None;

        self.make_options = match (&self.catalog, &self.selection.year) {
            (Some(catalog), Some(year)) => unique_makes(catalog, year),
            _ => Vec::new(),
        };
        self.model_options.clear();
        self.product_options.clear();
        self.browse_all = None;
        self.refilter();
    }

    /// Select or de-select a make. Re-populates models, collapses below.
    pub fn select_make(&mut self, make: Option<String>) {
        self.selection.make = make;
        self.selection.model = None;
        self.selection.product = None;

        self.model_options = match (&self.catalog, &self.selection.year, &self.selection.make) {
            (Some(catalog), Some(year), Some(make)) => unique_models(catalog, year, make),
            _ => Vec::new(),
        };
        self.product_options.clear();
        self.browse_all = None;
        self.refilter();
    }

    /// Select or de-select a model. Re-populates product types and resolves
    /// the browse-all link.
    pub fn select_model(&mut self, model: Option<String>) {
        self.selection.model = model;
        self.selection.product = None;

        (self.product_options, self.browse_all) = match (
            &self.catalog,
            &self.selection.year,
            &self.selection.make,
            &self.selection.model,
        ) {
            (Some(catalog), Some(year), Some(make), Some(model)) => (
                unique_products(catalog, year, make, model),
                browse_all_url(catalog, year, make, model),
            ),
            _ => (Vec::new(), None),
        };
        self.refilter();
    }

    /// Select a product type — the terminal level. A resolvable URL is
    /// queued for navigation; an unresolvable one queues nothing.
    pub fn select_product(&mut self, product: Option<String>) {
        self.selection.product = product;

        self.pending_url = match (
            &self.catalog,
            &self.selection.year,
            &self.selection.make,
            &self.selection.model,
            &self.selection.product,
        ) {
            (Some(catalog), Some(year), Some(make), Some(model), Some(product)) => {
                product_url(catalog, year, make, model, product)
            }
            _ => None,
        };
        self.refilter();
    }

    /// Hand the queued navigation to the caller, at most once.
    pub fn take_pending_url(&mut self) -> Option<String> {
        self.pending_url.take()
    }

    /// Recompute `visible_indices` after any selection change.
    fn refilter(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.visible_indices = matching_indices(catalog, &self.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Record, MAKE, MODEL, PRODUCT_TYPE, URL, YEAR};

    fn row(year: &str, make: &str, model: &str, product: &str, url: &str) -> Record {
        [
            (YEAR, year),
            (MAKE, make),
            (MODEL, model),
            (PRODUCT_TYPE, product),
            (URL, url),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_catalog(Catalog::from_records(vec![
            row("2020", "Ford", "F150", "Bumper", "https://x/f150/bumper.html"),
            row("2020", "Ford", "F150", "Grille", "https://x/f150/grille.html"),
            row("2020", "Toyota", "Tacoma", "Bumper", "https://x/tacoma/bumper.html"),
            row("2019", "Ford", "Ranger", "Bumper", "https://x/ranger/bumper.html"),
        ]));
        state
    }

    #[test]
    fn set_catalog_populates_years_and_shows_all_rows() {
        let state = loaded_state();
        assert_eq!(state.year_options, vec!["2020", "2019"]);
        assert!(state.make_options.is_empty());
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn selecting_down_the_cascade_populates_each_level() {
        let mut state = loaded_state();

        state.select_year(Some("2020".into()));
        assert_eq!(state.make_options, vec!["Ford", "Toyota"]);
        assert!(state.model_options.is_empty());

        state.select_make(Some("Ford".into()));
        assert_eq!(state.model_options, vec!["F150"]);

        state.select_model(Some("F150".into()));
        assert_eq!(state.product_options, vec!["Bumper", "Grille"]);
        assert_eq!(state.browse_all.as_deref(), Some("https://x/f150/"));
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn upstream_change_collapses_downstream_levels() {
        let mut state = loaded_state();
        state.select_year(Some("2020".into()));
        state.select_make(Some("Ford".into()));
        state.select_model(Some("F150".into()));

        state.select_year(Some("2019".into()));
        assert_eq!(state.selection.make, None);
        assert_eq!(state.selection.model, None);
        assert_eq!(state.selection.product, None);
        assert_eq!(state.make_options, vec!["Ford"]);
        assert!(state.model_options.is_empty());
        assert!(state.product_options.is_empty());
        assert_eq!(state.browse_all, None);
    }

    #[test]
    fn deselection_collapses_downstream() {
        let mut state = loaded_state();
        state.select_year(Some("2020".into()));
        state.select_make(Some("Toyota".into()));

        state.select_year(None);
        assert_eq!(state.selection, Selection::default());
        assert!(state.make_options.is_empty());
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn terminal_selection_queues_navigation_once() {
        let mut state = loaded_state();
        state.select_year(Some("2020".into()));
        state.select_make(Some("Ford".into()));
        state.select_model(Some("F150".into()));
        state.select_product(Some("Grille".into()));

        assert_eq!(
            state.take_pending_url().as_deref(),
            Some("https://x/f150/grille.html")
        );
        assert_eq!(state.take_pending_url(), None);
    }

    #[test]
    fn unresolvable_product_queues_nothing() {
        let mut state = loaded_state();
        state.select_year(Some("2020".into()));
        state.select_make(Some("Ford".into()));
        state.select_model(Some("F150".into()));
        state.select_product(Some("Spoiler".into()));
        assert_eq!(state.take_pending_url(), None);
    }

    #[test]
    fn load_failure_reports_status_and_keeps_going() {
        let mut state = AppState::default();
        state.load_catalog_from(Path::new("/nonexistent/catalog.csv"));
        assert!(state.catalog.is_none());
        assert!(state.status_message.as_deref().unwrap_or("").starts_with("Error:"));
        assert!(!state.loading);
    }
}
