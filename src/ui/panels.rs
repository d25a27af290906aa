use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the four-level selector
// ---------------------------------------------------------------------------

/// Render the selector panel: Year → Make → Model → Product Type.
///
/// Each dropdown stays disabled until the level above it has a value, and
/// re-selecting the placeholder collapses everything below it. The state
/// methods do the actual cascade work; this function only reads options and
/// reports clicks.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Find your part");
    ui.separator();

    if state.catalog.is_none() {
        ui.label("No catalog loaded.");
        return;
    }

    // Clone the option lists so we can mutate state from the combo closures.
    let year_options = state.year_options.clone();
    let make_options = state.make_options.clone();
    let model_options = state.model_options.clone();
    let product_options = state.product_options.clone();

    ui.strong("Year");
    if let Some(change) = cascade_combo(
        ui,
        "year_select",
        "Select Year",
        &year_options,
        &state.selection.year,
        true,
    ) {
        state.select_year(change);
    }
    ui.add_space(4.0);

    ui.strong("Make");
    if let Some(change) = cascade_combo(
        ui,
        "make_select",
        "Select Make",
        &make_options,
        &state.selection.make,
        state.selection.year.is_some(),
    ) {
        state.select_make(change);
    }
    ui.add_space(4.0);

    ui.strong("Model");
    if let Some(change) = cascade_combo(
        ui,
        "model_select",
        "Select Model",
        &model_options,
        &state.selection.model,
        state.selection.make.is_some(),
    ) {
        state.select_model(change);
    }
    ui.add_space(4.0);

    ui.strong("Product Type");
    if let Some(change) = cascade_combo(
        ui,
        "product_select",
        "Select Product Type",
        &product_options,
        &state.selection.product,
        state.selection.model.is_some(),
    ) {
        state.select_product(change);
    }

    ui.separator();

    // Browse-all link, live once a model is chosen.
    match &state.browse_all {
        Some(url) => {
            ui.hyperlink_to("Browse all products for this model", url);
        }
        None => {
            ui.add_enabled(false, egui::Label::new("Browse all products for this model"));
        }
    }
}

/// One dropdown of the cascade. Returns `Some(new_value)` when the user
/// picked something this frame: `Some(None)` means back to the placeholder.
fn cascade_combo(
    ui: &mut Ui,
    id: &str,
    placeholder: &str,
    options: &[String],
    current: &Option<String>,
    enabled: bool,
) -> Option<Option<String>> {
    let mut picked = None;
    ui.add_enabled_ui(enabled, |ui: &mut Ui| {
        egui::ComboBox::from_id_salt(id)
            .width(ui.available_width())
            .selected_text(current.as_deref().unwrap_or(placeholder).to_string())
            .show_ui(ui, |ui: &mut Ui| {
                if ui.selectable_label(current.is_none(), placeholder).clicked() {
                    picked = Some(None);
                }
                for option in options {
                    let is_current = current.as_deref() == Some(option.as_str());
                    if ui.selectable_label(is_current, option).clicked() {
                        picked = Some(Some(option.clone()));
                    }
                }
            });
    });
    picked
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open catalog…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} products in catalog, {} match",
                catalog.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open parts catalog")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_catalog_from(&path);
    }
}
