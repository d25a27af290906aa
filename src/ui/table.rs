use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the rows matching the current selection, one column per catalog
/// column.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    let catalog = match &state.catalog {
        Some(catalog) => catalog,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a catalog to browse products  (File → Open catalog…)");
            });
            return;
        }
    };

    let columns = &catalog.column_names;
    if columns.is_empty() {
        ui.label("Catalog has no columns.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(80.0).clip(true), columns.len())
        .header(20.0, |mut header| {
            for name in columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let rec = &catalog.records[state.visible_indices[row.index()]];
                for name in columns {
                    row.col(|ui: &mut Ui| {
                        ui.label(rec.field(name).unwrap_or(""));
                    });
                }
            });
        });
}
