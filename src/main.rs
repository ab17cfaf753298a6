use moviehit::application::AppContext;
use moviehit::config::Config;
use moviehit::infrastructure::observability::{LogBuffer, init_tracing, log_channel};
use moviehit::interfaces::design_system::DesignSystem;
use moviehit::interfaces::renderers::renderer_for;
use moviehit::interfaces::ui::PredictorApp;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok(); // Load .env file

    // 1. Logging (console + UI log panel)
    let (log_tx, log_rx) = crossbeam_channel::unbounded();
    init_tracing(Some(log_tx));

    info!("Starting Movie Hit Predictor...");

    // 2. Config, catalog and model. Any failure here halts startup.
    let config = Config::from_env()?;
    let context = AppContext::build(&config)?;

    let logs = LogBuffer::new(log_rx, log_channel::LOG_PANEL_CAPACITY);
    let app = PredictorApp::new(context, renderer_for(config.renderer), logs);

    // 3. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([720.0, 900.0])
            .with_title("Movie Hit Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Movie Hit Predictor",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
