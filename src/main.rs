#![warn(clippy::all)]

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    init_tracing();
    tracing::info!("starting automaton viewer");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Cellular automata",
        options,
        Box::new(move |cc| Ok(Box::new(petri::App::new(&cc.egui_ctx)?))),
    )
}
