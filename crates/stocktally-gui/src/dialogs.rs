/// Modal-style windows: about, valuation, view item/sale, edit, delete
/// confirmation. Each is a free function called once per frame from the
/// app and draws nothing unless its state says it is open.
use crate::state::AppState;
use egui::Context;
use stocktally_core::model::money::format_money;
use stocktally_core::model::sale::format_date;

/// About window.
pub fn about_dialog(ctx: &Context, state: &mut AppState) {
    let mut open = state.show_about;
    egui::Window::new("About StockTally")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 0.0])
        .show(ctx, |ui| {
            let accent = ui.visuals().hyperlink_color;
            let muted = ui.visuals().weak_text_color();

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("🧾 StockTally")
                        .size(24.0)
                        .strong()
                        .color(accent),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(13.0)
                        .color(muted),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(
                        "A small desktop inventory and sales tracker:\n\
                         merchandise catalog, sale records, and\n\
                         an admin-gated mutation surface.",
                    )
                    .size(12.0),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Built with Rust & egui")
                        .size(11.0)
                        .color(muted),
                );
                ui.add_space(8.0);
            });
        });
    state.show_about = open;
}

/// Inventory valuation window.
pub fn valuation_dialog(ctx: &Context, state: &mut AppState) {
    let mut open = state.show_valuation;
    egui::Window::new("Inventory")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let v = state.catalog.valuation();
            let muted = ui.visuals().weak_text_color();
            egui::Grid::new("valuation_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Items:").color(muted));
                    ui.label(v.items.to_string());
                    ui.end_row();

                    ui.label(egui::RichText::new("Existences:").color(muted));
                    ui.label(v.existences.to_string());
                    ui.end_row();

                    ui.label(egui::RichText::new("Value:").color(muted));
                    ui.label(egui::RichText::new(format_money(v.value)).strong());
                    ui.end_row();
                });
        });
    state.show_valuation = open;
}

/// Read-only window for one merchandise item.
pub fn view_item_dialog(ctx: &Context, state: &mut AppState) {
    let Some(key) = state.view_item else { return };
    let Some(item) = state.catalog.find_by_key(key) else {
        // Deleted while the dialog was open.
        state.view_item = None;
        return;
    };
    let item = item.clone();

    let mut open = true;
    egui::Window::new(format!("Item #{}", item.key))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let muted = ui.visuals().weak_text_color();
            egui::Grid::new("view_item_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Key:").color(muted));
                    ui.label(item.key.to_string());
                    ui.end_row();

                    ui.label(egui::RichText::new("Name:").color(muted));
                    ui.label(item.name.as_str());
                    ui.end_row();

                    ui.label(egui::RichText::new("Description:").color(muted));
                    ui.label(&item.description);
                    ui.end_row();

                    ui.label(egui::RichText::new("Price:").color(muted));
                    ui.label(format_money(item.price));
                    ui.end_row();

                    ui.label(egui::RichText::new("Stock:").color(muted));
                    ui.label(item.stock.to_string());
                    ui.end_row();

                    ui.label(egui::RichText::new("Unit:").color(muted));
                    ui.label(item.unit.as_str());
                    ui.end_row();
                });
        });
    if !open {
        state.view_item = None;
    }
}

/// Read-only window for one sale record.
pub fn view_sale_dialog(ctx: &Context, state: &mut AppState) {
    let Some(folio) = state.view_sale else { return };
    let Some(record) = state.sales.find_by_folio(folio) else {
        state.view_sale = None;
        return;
    };
    let record = record.clone();

    let mut open = true;
    egui::Window::new(format!("Sale #{}", record.folio))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let muted = ui.visuals().weak_text_color();
            egui::Grid::new("view_sale_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Folio:").color(muted));
                    ui.label(record.folio.to_string());
                    ui.end_row();

                    ui.label(egui::RichText::new("Date:").color(muted));
                    ui.label(format_date(record.date));
                    ui.end_row();

                    ui.label(egui::RichText::new("Quantity:").color(muted));
                    ui.label(record.quantity.to_string());
                    ui.end_row();

                    ui.label(egui::RichText::new("Subtotal:").color(muted));
                    ui.label(format_money(record.subtotal));
                    ui.end_row();

                    ui.label(egui::RichText::new("Tax:").color(muted));
                    ui.label(format_money(record.tax));
                    ui.end_row();

                    ui.label(egui::RichText::new("Total:").color(muted));
                    ui.label(egui::RichText::new(format_money(record.total)).strong());
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.label(egui::RichText::new("Items").color(muted).size(11.0));
            ui.label(egui::RichText::new(record.items.trim_end()).monospace().size(11.0));
        });
    if !open {
        state.view_sale = None;
    }
}

/// Edit window — every field editable except the key.
pub fn edit_dialog(ctx: &Context, state: &mut AppState) {
    let Some(form) = state.edit_form.as_mut() else {
        return;
    };
    let key = form.key;

    let mut open = true;
    let mut save = false;
    let mut cancel = false;
    egui::Window::new(format!("Edit item #{key}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("edit_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Key:");
                    // Immutable after creation.
                    ui.add_enabled(false, egui::TextEdit::singleline(&mut key.to_string()));
                    ui.end_row();

                    ui.label("Name:");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label("Description:");
                    ui.text_edit_singleline(&mut form.description);
                    ui.end_row();

                    ui.label("Price:");
                    ui.text_edit_singleline(&mut form.price);
                    ui.end_row();

                    ui.label("Stock:");
                    ui.text_edit_singleline(&mut form.stock);
                    ui.end_row();

                    ui.label("Unit:");
                    ui.text_edit_singleline(&mut form.unit);
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if save {
        state.save_edit();
    } else if cancel || !open {
        state.edit_form = None;
    }
}

/// Delete confirmation window.
pub fn confirm_delete_dialog(ctx: &Context, state: &mut AppState) {
    let Some(key) = state.confirm_delete else {
        return;
    };

    let mut open = true;
    let mut delete = false;
    let mut cancel = false;
    egui::Window::new("Delete item")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "Are you sure you want to remove the item with key #{key}?"
            ));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    delete = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if delete {
        state.delete_item(key);
    } else if cancel || !open {
        state.confirm_delete = None;
    }
}
