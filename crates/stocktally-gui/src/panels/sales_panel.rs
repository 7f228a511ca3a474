/// Sales table — the (possibly filtered) sales log with a row context menu.
use crate::state::AppState;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use stocktally_core::model::money::format_money;
use stocktally_core::model::sale::format_date;

const ROW_HEIGHT: f32 = 20.0;

/// Draw the sales table, honouring the active date filter.
pub fn sales_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    if state.sales.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No sales yet...")
                    .color(color_muted)
                    .italics(),
            );
        });
        return;
    }

    let visible = state.visible_sales();
    if visible.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No sales match the filter")
                    .color(color_muted)
                    .italics(),
            );
        });
        return;
    }

    let mut view_folio = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .column(Column::auto().at_least(48.0)) // folio
        .column(Column::auto().at_least(84.0)) // date
        .column(Column::remainder().at_least(180.0)) // items
        .column(Column::auto().at_least(60.0)) // quantity
        .column(Column::auto().at_least(70.0)) // subtotal
        .column(Column::auto().at_least(60.0)) // tax
        .column(Column::auto().at_least(70.0)) // total
        .header(22.0, |mut header| {
            for title in ["Folio", "Date", "Items", "Qty", "Subtotal", "Tax", "Total"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for &index in &visible {
                let record = &state.sales.records()[index];
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(record.folio.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_date(record.date));
                    });
                    row.col(|ui| {
                        ui.label(items_summary(&record.items));
                    });
                    row.col(|ui| {
                        ui.label(record.quantity.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_money(record.subtotal));
                    });
                    row.col(|ui| {
                        ui.label(format_money(record.tax));
                    });
                    row.col(|ui| {
                        ui.label(format_money(record.total));
                    });

                    row.response().context_menu(|ui| {
                        if ui.button("View").clicked() {
                            view_folio = Some(record.folio);
                            ui.close_menu();
                        }
                    });
                });
            }
        });

    if let Some(folio) = view_folio {
        state.view_sale = Some(folio);
    }
}

/// One-line summary of the freeform items text; the view dialog shows it
/// in full.
fn items_summary(items: &str) -> String {
    let mut lines = items.lines();
    let first = lines.next().unwrap_or("").to_string();
    let rest = lines.count();
    if rest > 0 {
        format!("{first}  (+{rest} more)")
    } else {
        first
    }
}
