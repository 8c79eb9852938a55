mod state;
mod ui;

use crate::intake::{self, RejectReason, UploadCandidate};
use crate::utils::file_size;
use crate::video::VideoPreload;
use eframe::{egui, App};
use std::path::Path;
use std::time::{Duration, Instant};

use state::{ProgressDriver, Screen, PERCENT_TICK};

#[derive(Default)]
pub struct AnimeVibe {
    screen: Screen,
    error_message: Option<String>,
    share_feedback: Option<String>,
    video: VideoPreload,
    rickroll_launched: bool,
    example_tiles: Option<ui::ExampleTiles>,
}

impl AnimeVibe {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("starting anime-vibe, preloading the reveal video");
        Self {
            video: VideoPreload::start(),
            ..Default::default()
        }
    }

    /// Runs the intake policies on a candidate. A pass clears any stale
    /// error and flips to the processing screen with fresh counters; a
    /// rejection only sets the inline message.
    pub fn submit(&mut self, candidate: UploadCandidate) {
        self.error_message = None;
        match intake::validate(&candidate) {
            Ok(()) => {
                log::info!(
                    "accepted {} selfie of {}",
                    candidate.mime_type,
                    file_size::format_size(candidate.size)
                );
                self.screen = Screen::Processing(ProgressDriver::start(Instant::now()));
            }
            Err(reason) => {
                log::info!(
                    "rejected {} file of {}: {reason}",
                    candidate.mime_type,
                    file_size::format_size(candidate.size)
                );
                self.error_message = Some(reason.to_string());
            }
        }
    }

    pub fn submit_path(&mut self, path: &Path) {
        match UploadCandidate::from_path(path) {
            Ok(candidate) => self.submit(candidate),
            Err(e) => {
                log::warn!("could not stat {}: {e}", path.display());
                self.error_message = Some(RejectReason::Unreadable.to_string());
            }
        }
    }

    /// Back to the start screen. Replacing the screen drops any running
    /// progress driver, clears the error banner and the share feedback,
    /// and re-arms the one-shot video launch.
    pub fn reset(&mut self) {
        self.screen = Screen::Idle;
        self.error_message = None;
        self.share_feedback = None;
        self.rickroll_launched = false;
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape))
            && !matches!(self.screen, Screen::Idle)
        {
            log::info!("escape pressed, back to the start screen");
            self.reset();
        }

        if matches!(self.screen, Screen::Idle) {
            let dropped = ctx.input(|i| i.raw.dropped_files.clone());
            if let Some(file) = dropped.into_iter().next() {
                match UploadCandidate::from_dropped(&file) {
                    Ok(candidate) => self.submit(candidate),
                    Err(e) => {
                        log::warn!("unreadable drop {:?}: {e}", file.name);
                        self.error_message = Some(RejectReason::Unreadable.to_string());
                    }
                }
            }
        }
    }

    fn drive_progress(&mut self, ctx: &egui::Context) {
        if let Screen::Processing(driver) = &mut self.screen {
            if driver.tick(Instant::now()) {
                log::info!("fake processing hit 100%, time for the reveal");
                self.screen = Screen::Revealed;
            } else {
                ctx.request_repaint_after(PERCENT_TICK);
            }
        }
    }

    fn poll_video(&mut self, ctx: &egui::Context) {
        if self.video.poll() {
            ctx.request_repaint();
        }
        if self.video.in_flight() {
            // Keep polling at a relaxed pace until the probe settles.
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        // The reveal opens the clip in the system player, once per reveal.
        if matches!(self.screen, Screen::Revealed)
            && self.video.is_ready()
            && !self.rickroll_launched
        {
            self.rickroll_launched = true;
            self.launch_video();
        }
    }

    fn launch_video(&self) {
        let url = self.video.current_url();
        if let Err(e) = open::that(url) {
            log::warn!("failed to open {url}: {e}");
        }
    }

    fn share(&mut self, ctx: &egui::Context) {
        self.share_feedback = crate::share::invoke(ctx);
    }
}

impl App for AnimeVibe {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_video(ctx);
        self.handle_input(ctx);
        self.drive_progress(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: u64) -> UploadCandidate {
        UploadCandidate {
            size,
            mime_type: "image/png".to_string(),
        }
    }

    #[test]
    fn valid_submission_enters_processing_with_fresh_counters() {
        let mut app = AnimeVibe::default();
        app.error_message = Some("stale".to_string());

        app.submit(png(2_000_000));

        assert!(app.error_message.is_none());
        match &app.screen {
            Screen::Processing(driver) => {
                assert_eq!(driver.percent(), 0);
                assert_eq!(driver.stage_index(), 0);
            }
            _ => panic!("expected processing screen"),
        }
    }

    #[test]
    fn rejection_shows_message_and_stays_idle() {
        let mut app = AnimeVibe::default();

        app.submit(png(intake::MAX_FILE_SIZE + 1));

        assert!(matches!(app.screen, Screen::Idle));
        assert_eq!(
            app.error_message.as_deref(),
            Some("file too big! keep it under 10MB 💅")
        );
    }

    #[test]
    fn progress_completion_reveals_exactly_once() {
        let mut app = AnimeVibe::default();
        app.submit(png(100));

        let Screen::Processing(driver) = &mut app.screen else {
            panic!("expected processing screen");
        };
        let finished = driver.tick(Instant::now() + PERCENT_TICK * 100);
        assert!(finished);

        app.screen = Screen::Revealed;
        assert!(matches!(app.screen, Screen::Revealed));
    }

    #[test]
    fn reset_clears_everything_back_to_idle() {
        let mut app = AnimeVibe::default();
        app.screen = Screen::Revealed;
        app.error_message = Some("boom".to_string());
        app.share_feedback = Some("copied".to_string());
        app.rickroll_launched = true;

        app.reset();

        assert!(matches!(app.screen, Screen::Idle));
        assert!(app.error_message.is_none());
        assert!(app.share_feedback.is_none());
        assert!(!app.rickroll_launched);
    }

    #[test]
    fn reset_during_processing_drops_the_driver() {
        let mut app = AnimeVibe::default();
        app.submit(png(100));
        assert!(matches!(app.screen, Screen::Processing(_)));

        app.reset();
        assert!(matches!(app.screen, Screen::Idle));
    }

    #[test]
    fn unreadable_path_surfaces_inline_message() {
        let mut app = AnimeVibe::default();
        app.submit_path(Path::new("/definitely/not/here.png"));

        assert!(matches!(app.screen, Screen::Idle));
        assert_eq!(
            app.error_message.as_deref(),
            Some("couldn't read that file! try another one 💅")
        );
    }
}
