use super::AnimeVibe;
use super::Screen;
use crate::intake;
use crate::utils::file_size;
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);
const MUTED: Color32 = Color32::from_rgb(150, 150, 150);

const TILE_SIZE: [usize; 2] = [96, 72];

/// Textures for the before/after example tiles on the idle screen. The
/// originals are hosted photos; here the tiles are generated once at
/// first paint — a drab gradient for "before", a sparkly one for "after".
pub struct ExampleTiles {
    before: egui::TextureHandle,
    after: egui::TextureHandle,
}

impl ExampleTiles {
    fn generate(ctx: &egui::Context) -> Self {
        let before = ctx.load_texture(
            "example-before",
            example_image(
                TILE_SIZE,
                Color32::from_rgb(126, 126, 138),
                Color32::from_rgb(66, 66, 78),
                false,
            ),
            egui::TextureOptions::LINEAR,
        );
        let after = ctx.load_texture(
            "example-after",
            example_image(
                TILE_SIZE,
                Color32::from_rgb(244, 114, 182),
                ACCENT,
                true,
            ),
            egui::TextureOptions::LINEAR,
        );
        Self { before, after }
    }
}

/// Vertical gradient, optionally decorated with white sparkle crosses.
fn example_image(
    size: [usize; 2],
    top: Color32,
    bottom: Color32,
    sparkles: bool,
) -> egui::ColorImage {
    let [width, height] = size;
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        let t = y as f32 / (height - 1) as f32;
        let row = lerp_color(top, bottom, t);
        for _ in 0..width {
            pixels.push(row);
        }
    }

    if sparkles {
        let spots = [
            (width / 5, height / 4),
            (width / 2, height / 6),
            (4 * width / 5, height / 3),
            (width / 3, 3 * height / 4),
        ];
        for (x, y) in spots {
            for (dx, dy) in [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)] {
                let px = x as isize + dx;
                let py = y as isize + dy;
                if px >= 0 && (px as usize) < width && py >= 0 && (py as usize) < height {
                    pixels[py as usize * width + px as usize] = Color32::WHITE;
                }
            }
        }
    }

    egui::ColorImage { size, pixels }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let lerp = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

impl AnimeVibe {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| match self.screen {
                    Screen::Idle => self.render_idle(ctx, ui),
                    Screen::Processing(ref driver) => {
                        let percent = driver.percent();
                        let phrase = driver.stage_phrase();
                        Self::render_processing(ui, percent, phrase);
                    }
                    Screen::Revealed => self.render_revealed(ctx, ui),
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_idle(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("✨ Anime-ify Your Selfie! ✨");
            ui.add_space(5.0);
            ui.label(
                RichText::new("this AI be bussin no cap 🔥")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });

        ui.add_space(20.0);

        if let Some(error) = &self.error_message {
            ui.vertical_centered(|ui| {
                ui.colored_label(ERROR_RED, format!("⚠ {error}"));
            });
            ui.add_space(10.0);
        }

        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                if hovering {
                    ui.heading("drop it! 🔥");
                } else {
                    ui.label(RichText::new("drop your selfie here! 📸").strong().size(18.0));
                }
                ui.add_space(10.0);

                let button =
                    egui::Button::new("📸 choose your selfie").min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp"])
                        .pick_file()
                    {
                        self.submit_path(&path);
                    }
                }

                ui.add_space(8.0);
                ui.colored_label(MUTED, "click or drag n drop");
                ui.colored_label(
                    MUTED,
                    format!(
                        "PNG, JPG, GIF or WEBP under {} ✌️",
                        file_size::format_size(intake::MAX_FILE_SIZE)
                    ),
                );
                ui.add_space(20.0);
            });
        });

        ui.add_space(20.0);

        let (before, after) = {
            let tiles = self
                .example_tiles
                .get_or_insert_with(|| ExampleTiles::generate(ctx));
            (tiles.before.clone(), tiles.after.clone())
        };
        let tile_size = egui::vec2(140.0, 105.0);
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.image((before.id(), tile_size));
                    ui.colored_label(MUTED, "before 📸");
                });
            });
            columns[1].group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.image((after.id(), tile_size));
                    ui.colored_label(ACCENT, "after ✨");
                });
            });
        });

        ui.add_space(20.0);

        ui.group(|ui| {
            ui.label(RichText::new("why this slaps: 💅").strong());
            ui.add_space(5.0);
            ui.label("🎨 amazing anime conversion fr fr");
            ui.label("✨ multiple aesthetic styles");
            ui.label("⚡ takes 2 secs bestie");
            ui.label("💅 free to use periodt!");
        });
    }

    fn render_processing(ui: &mut egui::Ui, percent: u8, phrase: &str) {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.add(egui::Spinner::new().size(48.0));
            ui.add_space(20.0);

            let progress_bar = egui::ProgressBar::new(f32::from(percent) / 100.0)
                .show_percentage()
                .animate(false)
                .fill(ACCENT);
            ui.add(progress_bar);

            ui.add_space(10.0);
            ui.label(RichText::new(phrase).color(ACCENT).strong());
            ui.colored_label(MUTED, format!("{percent}% complete"));

            ui.add_space(20.0);
            ui.colored_label(MUTED, "press esc to bail");
        });
    }

    fn render_revealed(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.add_space(30.0);
        ui.vertical_centered(|ui| {
            ui.heading("OMG! You got rickrolled! 🤪");
            ui.add_space(15.0);

            if self.video.is_ready() {
                let button =
                    egui::Button::new("▶ replay the video").min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.launch_video();
                }
            } else {
                ui.add(egui::Spinner::new().size(32.0));
                ui.colored_label(MUTED, "summoning your anime self...");
            }

            ui.add_space(15.0);
            ui.label(RichText::new("Happy April Fools Day! 🎉").strong().size(18.0));

            ui.add_space(15.0);
            let share_button =
                egui::Button::new("🤳 Share this prank!").min_size(egui::vec2(200.0, 40.0));
            if ui.add(share_button).clicked() {
                self.share(ctx);
            }
            if let Some(feedback) = &self.share_feedback {
                ui.add_space(5.0);
                ui.colored_label(ACCENT, feedback);
            }

            ui.add_space(20.0);
            ui.colored_label(
                MUTED,
                "🔒 Disclaimer: we don't store or use your images.\nEverything happens on your machine!",
            );
            ui.add_space(10.0);
            ui.colored_label(MUTED, "press esc to prank someone else");
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let footer_width = 220.0;
        let indent = (ui.available_width() - footer_width) / 2.0;

        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.scope(|ui| {
                ui.set_width(footer_width);
                ui.horizontal_centered(|ui| {
                    ui.label("made with 🫰 by");
                    if ui
                        .add(
                            egui::Label::new(RichText::new("@vaibhavmule").color(ACCENT))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        if let Err(e) = open::that("https://instagram.com/vaibhavmule") {
                            log::warn!("failed to open credit link: {e}");
                        }
                    }
                });
            });
        });
    }
}
