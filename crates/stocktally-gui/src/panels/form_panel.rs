/// Right form pane — add, search, and sell forms.
use crate::state::{ActionPane, AppState, SearchField};
use egui::Ui;
use stocktally_core::model::money::format_money;

/// Draw whichever form pane is open.
pub fn form_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(8.0);
    match state.pane {
        ActionPane::Add => add_form(ui, state),
        ActionPane::Search => search_form(ui, state),
        ActionPane::Sell => sell_form(ui, state),
        ActionPane::None => {}
    }
}

fn add_form(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.strong("Add merchandise");
    });
    ui.add_space(6.0);

    ui.add(egui::TextEdit::singleline(&mut state.add_form.key).hint_text("Key"));
    ui.add(egui::TextEdit::singleline(&mut state.add_form.name).hint_text("Name"));
    ui.add(egui::TextEdit::singleline(&mut state.add_form.description).hint_text("Description"));
    ui.add(egui::TextEdit::singleline(&mut state.add_form.price).hint_text("Price"));
    ui.add(egui::TextEdit::singleline(&mut state.add_form.stock).hint_text("Stock"));
    ui.add(egui::TextEdit::singleline(&mut state.add_form.unit).hint_text("Unit"));

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Add").clicked() {
            state.add_item();
        }
        if ui.button("Close").clicked() {
            state.pane = ActionPane::None;
        }
    });
}

fn search_form(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.strong("Search merchandise");
    });
    ui.add_space(6.0);

    egui::ComboBox::from_id_salt("search_field")
        .selected_text(state.search_field.label())
        .show_ui(ui, |ui| {
            for field in [SearchField::Key, SearchField::Name, SearchField::Description] {
                ui.selectable_value(&mut state.search_field, field, field.label());
            }
        });

    ui.add_space(4.0);
    let response =
        ui.add(egui::TextEdit::singleline(&mut state.search_query).hint_text("Search for..."));
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Show").clicked() || submitted {
            state.run_search();
        }
        if ui.button("Close").clicked() {
            state.pane = ActionPane::None;
        }
    });
}

fn sell_form(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.strong("Sell merchandise");
    });
    ui.add_space(6.0);

    let response = ui.add(egui::TextEdit::singleline(&mut state.sell_key).hint_text("Key"));
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Add").clicked() || submitted {
            state.sell_line();
        }
        if ui.button("Done").clicked() {
            state.finish_sale();
        }
    });

    // Running note of everything sold so far.
    if let Some(draft) = &state.draft {
        ui.add_space(8.0);
        ui.separator();
        if draft.lines() == 0 {
            ui.label(
                egui::RichText::new("Nothing sold yet")
                    .size(11.0)
                    .color(ui.visuals().weak_text_color())
                    .italics(),
            );
        } else {
            ui.label(egui::RichText::new(draft.note().trim_end()).monospace().size(11.0));
            ui.add_space(4.0);
            ui.label(format!(
                "{} unit(s) — subtotal {}",
                draft.lines(),
                format_money(draft.subtotal())
            ));
        }
    }
}
