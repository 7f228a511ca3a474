/// Main `eframe::App` implementation for StockTally.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::dialogs;
use crate::panels;
use crate::state::{ActionPane, ActiveView, AppState, Session};
use crate::widgets;
use stocktally_core::store::Store;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that loading
/// both collections from disk completes before the OS window is created
/// and the first frame already shows real data.
pub struct StockTallyState {
    pub(crate) inner: AppState,
}

impl StockTallyState {
    /// Load both collections and assemble the session.
    /// Call this before `eframe::run_native`.
    pub fn build(admin: bool) -> Self {
        let store = Store::new(Store::default_dir());
        Self {
            inner: AppState::new(Session { admin }, store),
        }
    }
}

/// The StockTally application.
pub struct StockTallyApp {
    state: AppState,
}

impl StockTallyApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: StockTallyState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state: state.inner }
    }
}

impl eframe::App for StockTallyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so toggling dark_mode takes effect immediately.
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Dialogs ───────────────────────────────────────────────────────
        dialogs::about_dialog(ctx, &mut self.state);
        dialogs::valuation_dialog(ctx, &mut self.state);
        dialogs::view_item_dialog(ctx, &mut self.state);
        dialogs::view_sale_dialog(ctx, &mut self.state);
        dialogs::edit_dialog(ctx, &mut self.state);
        dialogs::confirm_delete_dialog(ctx, &mut self.state);

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Date filter bar (sales view only) ─────────────────────────────
        if self.state.view == ActiveView::Sales {
            egui::TopBottomPanel::bottom("filter_bar")
                .min_height(30.0)
                .show(ctx, |ui| {
                    ui.add_space(4.0);
                    widgets::filter_bar::filter_bar(ui, &mut self.state);
                    ui.add_space(4.0);
                });
        }

        // ── Left action panel ─────────────────────────────────────────────
        egui::SidePanel::left("actions_panel")
            .default_width(150.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::actions_panel::actions_panel(ui, &mut self.state);
            });

        // ── Right form pane ───────────────────────────────────────────────
        if self.state.pane != ActionPane::None {
            egui::SidePanel::right("form_panel")
                .default_width(230.0)
                .min_width(200.0)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        panels::form_panel::form_panel(ui, &mut self.state);
                    });
                });
        }

        // ── Central table ─────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            ActiveView::Catalog => panels::catalog_panel::catalog_panel(ui, &mut self.state),
            ActiveView::Sales => panels::sales_panel::sales_panel(ui, &mut self.state),
        });
    }

    /// Persist both collections when the window closes.
    ///
    /// Only admin sessions write: a non-admin session has no way to mutate
    /// either collection, so there is nothing to lose.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.state.session.admin {
            self.state.save_all();
        }
    }
}
