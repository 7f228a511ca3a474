/// Bottom status bar — record counts and the last operation outcome.
use crate::state::{ActiveView, AppState, StatusKind};
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_error = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);

    ui.horizontal(|ui| {
        match state.view {
            ActiveView::Catalog => {
                ui.label(
                    egui::RichText::new(format!("{} item(s)", state.catalog.len()))
                        .size(12.0)
                        .color(color_normal),
                );
            }
            ActiveView::Sales => {
                ui.label(
                    egui::RichText::new(format!("{} sale(s)", state.sales.len()))
                        .size(12.0)
                        .color(color_normal),
                );
                if state.filter.is_some() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "filtered: {} shown",
                            state.visible_sales().len()
                        ))
                        .size(12.0)
                        .color(color_weak),
                    );
                }
            }
        }

        if let Some(status) = &state.status {
            ui.separator();
            let color = match status.kind {
                StatusKind::Info => color_weak,
                StatusKind::Success => color_success,
                StatusKind::Error => color_error,
            };
            ui.label(egui::RichText::new(&status.text).size(12.0).color(color));
        }
    });
}
