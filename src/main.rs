mod app;
mod intake;
mod share;
mod utils;
mod video;

use app::AnimeVibe;
use eframe::CreationContext;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([480.0, 680.0])
            .with_min_inner_size([400.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Anime Vibe ✨",
        options,
        Box::new(|cc: &CreationContext| Box::new(AnimeVibe::new(cc))),
    )
}
