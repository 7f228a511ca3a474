/// Catalog table — every merchandise item with a row context menu.
use crate::state::AppState;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use stocktally_core::model::money::format_money;

const ROW_HEIGHT: f32 = 20.0;

/// Draw the merchandise table.
pub fn catalog_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    if state.catalog.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No merchandise yet...")
                    .color(color_muted)
                    .italics(),
            );
        });
        return;
    }

    // Deferred row actions, applied after the table borrow ends.
    let mut view_key = None;
    let mut edit_key = None;
    let mut delete_key = None;
    let admin = state.session.admin;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .column(Column::auto().at_least(48.0)) // key
        .column(Column::auto().at_least(100.0)) // name
        .column(Column::remainder().at_least(160.0)) // description
        .column(Column::auto().at_least(70.0)) // price
        .column(Column::auto().at_least(50.0)) // stock
        .column(Column::auto().at_least(50.0)) // unit
        .header(22.0, |mut header| {
            for title in ["Key", "Name", "Description", "Price", "Stock", "Unit"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for item in state.catalog.items() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(item.key.to_string());
                    });
                    row.col(|ui| {
                        ui.label(item.name.as_str());
                    });
                    row.col(|ui| {
                        ui.label(&item.description);
                    });
                    row.col(|ui| {
                        ui.label(format_money(item.price));
                    });
                    row.col(|ui| {
                        ui.label(item.stock.to_string());
                    });
                    row.col(|ui| {
                        ui.label(item.unit.as_str());
                    });

                    row.response().context_menu(|ui| {
                        if ui.button("View").clicked() {
                            view_key = Some(item.key);
                            ui.close_menu();
                        }
                        if admin && ui.button("Edit").clicked() {
                            edit_key = Some(item.key);
                            ui.close_menu();
                        }
                        if admin && ui.button("Delete").clicked() {
                            delete_key = Some(item.key);
                            ui.close_menu();
                        }
                    });
                });
            }
        });

    if let Some(key) = view_key {
        state.view_item = Some(key);
    }
    if let Some(key) = edit_key {
        state.open_edit(key);
    }
    if let Some(key) = delete_key {
        state.confirm_delete = Some(key);
    }
}
