use std::time::{Duration, Instant};

/// Percent advances by one step per this interval while processing.
pub const PERCENT_TICK: Duration = Duration::from_millis(50);

/// Stage phrase rotates on its own, slower clock.
pub const STAGE_TICK: Duration = Duration::from_millis(1000);

pub const PROCESSING_STAGES: [&str; 5] = [
    "analyzing your vibe rn... 🧐",
    "adding that anime rizz... 💅",
    "making you look fire... 🔥",
    "adding those kawaii effects... 🎀",
    "finishing up to make you slay... ✨",
];

const LAST_STAGE: usize = PROCESSING_STAGES.len() - 1;

/// Which screen is showing. The progress driver lives inside the
/// `Processing` variant, so leaving that screen on any path drops it and
/// with it both tick schedules. No orphaned timer can keep mutating state.
pub enum Screen {
    Idle,
    Processing(ProgressDriver),
    Revealed,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Idle
    }
}

/// The fake-progress counter pair. Percent (50 ms cadence, +1 saturating
/// at 100) and stage index (1 s cadence, clamped to the last phrase) run
/// against independent deadlines and are deliberately not synchronized;
/// the stage may lag or lead the percentage depending on frame timing.
pub struct ProgressDriver {
    percent: u8,
    stage_index: usize,
    next_percent_at: Instant,
    next_stage_at: Instant,
}

impl ProgressDriver {
    pub fn start(now: Instant) -> Self {
        Self {
            percent: 0,
            stage_index: 0,
            next_percent_at: now + PERCENT_TICK,
            next_stage_at: now + STAGE_TICK,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    pub fn stage_phrase(&self) -> &'static str {
        PROCESSING_STAGES[self.stage_index]
    }

    /// Applies every tick whose deadline has passed. A late frame catches
    /// up one step at a time, so the counters stay monotonic and clamped.
    /// Returns true once percent has reached 100; the caller performs the
    /// single transition to the reveal screen and drops the driver.
    pub fn tick(&mut self, now: Instant) -> bool {
        while now >= self.next_percent_at && self.percent < 100 {
            self.percent += 1;
            self.next_percent_at += PERCENT_TICK;
        }
        while now >= self.next_stage_at && self.stage_index < LAST_STAGE {
            self.stage_index += 1;
            self.next_stage_at += STAGE_TICK;
        }
        self.percent >= 100
    }
}
