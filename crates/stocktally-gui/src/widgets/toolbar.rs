/// Top action bar — branding, export, theme toggle, admin badge.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title — uses the egui accent colour so it adapts to dark and
        // light mode automatically.
        ui.label(
            egui::RichText::new("🧾 StockTally")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Export the currently shown table.
        if ui
            .button("📤 Export")
            .on_hover_text("Export the current table to CSV")
            .clicked()
        {
            state.export_active_view();
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // About button.
            if ui.button("ℹ").on_hover_text("About StockTally").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            ui.separator();

            // Session capability indicator.
            if state.session.admin {
                ui.label(
                    egui::RichText::new("🛡 Admin")
                        .size(11.0)
                        .color(egui::Color32::from_rgb(0xa6, 0xe3, 0xa1)),
                );
            } else {
                ui.label(
                    egui::RichText::new("Read only")
                        .size(11.0)
                        .color(ui.visuals().weak_text_color()),
                );
            }
        });
    });
}
