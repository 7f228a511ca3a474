//! StockTally — desktop inventory and sales tracker.
//!
//! Thin binary entry point. All logic lives in the `stocktally-core`
//! and `stocktally-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // The admin capability is supplied by the environment, not decided here.
    let admin = std::env::args().any(|a| a == "--admin")
        || std::env::var("STOCKTALLY_ADMIN").is_ok_and(|v| v == "1");

    tracing::info!(admin, "StockTally starting");

    let icon = stocktally_gui::icon::generate_icon(64);

    // Build application state (including loading both collections from disk)
    // *before* opening the window so the first rendered frame already shows
    // real data.
    let state = stocktally_gui::StockTallyState::build(admin);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("StockTally -- Inventory & Sales")
            .with_inner_size([1000.0, 560.0])
            .with_min_inner_size([820.0, 480.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "StockTally",
        options,
        Box::new(|cc| Ok(Box::new(stocktally_gui::StockTallyApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
