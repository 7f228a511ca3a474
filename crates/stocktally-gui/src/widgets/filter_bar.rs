/// Date filter bar for the sales view.
use crate::state::AppState;
use egui::Ui;
use egui_extras::DatePickerButton;
use stocktally_core::sales::DateCmp;

/// Draw the filter controls: operator, reference date, apply/reset.
pub fn filter_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("Filter by date");

        egui::ComboBox::from_id_salt("filter_cmp")
            .width(44.0)
            .selected_text(state.filter_cmp.symbol())
            .show_ui(ui, |ui| {
                for cmp in [DateCmp::Equal, DateCmp::After, DateCmp::Before] {
                    ui.selectable_value(&mut state.filter_cmp, cmp, cmp.symbol());
                }
            });

        ui.add(DatePickerButton::new(&mut state.filter_date).id_salt("filter_date"));

        if ui.button("Filter").clicked() {
            state.apply_filter();
        }

        // Reset only appears once a filter is active.
        if state.filter.is_some() && ui.button("Reset").clicked() {
            state.reset_filter();
        }
    });
}
