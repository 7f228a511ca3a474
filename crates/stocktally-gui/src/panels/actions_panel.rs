/// Left action panel — view switcher and the operation links.
///
/// Mutating actions (Add, Sell) only appear for admin sessions; the core
/// itself is not gated, only what the panel offers.
use crate::state::{ActionPane, ActiveView, AppState};
use egui::Ui;

/// Draw the action links.
pub fn actions_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(8.0);

    // View switcher.
    egui::ComboBox::from_id_salt("view_switcher")
        .selected_text(match state.view {
            ActiveView::Catalog => "Merchandise",
            ActiveView::Sales => "Sales",
        })
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.view, ActiveView::Catalog, "Merchandise");
            ui.selectable_value(&mut state.view, ActiveView::Sales, "Sales");
        });

    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);

    ui.strong("Merchandise");
    ui.add_space(4.0);

    // The whole panel locks while a sale is in progress; the operator
    // must finish (or discard) the draft first.
    let selling = state.draft.is_some();
    ui.add_enabled_ui(!selling, |ui| {
        if state.session.admin && ui.link("Add").clicked() {
            state.pane = ActionPane::Add;
        }
        if ui.link("Inventory").clicked() {
            state.show_valuation = true;
        }
        if ui.link("Search").clicked() {
            state.pane = ActionPane::Search;
        }
        if state.session.admin && ui.link("Sell").clicked() {
            state.start_sale();
        }
    });

    if selling {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Sale in progress...")
                .size(11.0)
                .color(ui.visuals().weak_text_color())
                .italics(),
        );
    }
}
