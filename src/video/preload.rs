use std::sync::mpsc::{channel, Receiver, Sender};

use crate::video::sources::VIDEO_SOURCES;

/// Outcome of probing one candidate source, reported by the preload
/// thread. `index` is the position in [`VIDEO_SOURCES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadEvent {
    Loaded { index: usize },
    Failed { index: usize },
}

/// Forward-only scan over the fixed source list. A failed probe advances
/// to the next candidate; exhausting the list still ends in `ready` so the
/// UI stops showing a loading indicator (degraded but non-blocking). A
/// successful probe ends in `ready` and halts any further movement.
#[derive(Debug, Clone)]
pub struct SourceFallback {
    current: usize,
    ready: bool,
}

impl Default for SourceFallback {
    fn default() -> Self {
        Self {
            current: 0,
            ready: false,
        }
    }
}

impl SourceFallback {
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn current_url(&self) -> &'static str {
        VIDEO_SOURCES[self.current]
    }

    pub fn apply(&mut self, event: PreloadEvent) {
        if self.ready {
            return;
        }
        match event {
            PreloadEvent::Loaded { index } => {
                if index >= self.current {
                    self.current = index;
                }
                self.ready = true;
            }
            PreloadEvent::Failed { index } if index == self.current => {
                if self.current + 1 < VIDEO_SOURCES.len() {
                    self.current += 1;
                } else {
                    // All candidates exhausted. Mark ready anyway; the
                    // reveal screen shows whatever the last source is.
                    self.ready = true;
                }
            }
            // Stale report for an index we already moved past.
            PreloadEvent::Failed { .. } => {}
        }
    }
}

/// Owns the fallback machine plus the channel from the preload thread.
/// Created idle (for tests); [`VideoPreload::start`] spawns the probe.
#[derive(Default)]
pub struct VideoPreload {
    fallback: SourceFallback,
    receiver: Option<Receiver<PreloadEvent>>,
}

impl VideoPreload {
    pub fn start() -> Self {
        let (sender, receiver) = channel();
        spawn_probe(sender);
        Self {
            fallback: SourceFallback::default(),
            receiver: Some(receiver),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.fallback.is_ready()
    }

    pub fn current_url(&self) -> &'static str {
        self.fallback.current_url()
    }

    /// Probe still running; the caller keeps polling while this holds.
    pub fn in_flight(&self) -> bool {
        self.receiver.is_some()
    }

    /// Drains pending probe reports into the state machine. Returns true
    /// when anything changed so the caller can request a repaint.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };

        let mut had_updates = false;
        while let Ok(event) = receiver.try_recv() {
            had_updates = true;
            self.fallback.apply(event);
        }

        if self.fallback.is_ready() {
            self.receiver = None;
        }
        had_updates
    }
}

fn spawn_probe(sender: Sender<PreloadEvent>) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let client = reqwest::Client::new();
            for (index, url) in VIDEO_SOURCES.iter().enumerate() {
                match probe(&client, url).await {
                    Ok(()) => {
                        log::info!("video source #{index} is reachable: {url}");
                        let _ = sender.send(PreloadEvent::Loaded { index });
                        return;
                    }
                    Err(e) => {
                        log::warn!("video source #{index} failed ({url}): {e}");
                        let _ = sender.send(PreloadEvent::Failed { index });
                    }
                }
            }
        });
    });
}

/// A source counts as loadable once the server answers with a success
/// status and the first body chunk arrives.
async fn probe(client: &reqwest::Client, url: &str) -> Result<(), reqwest::Error> {
    let mut response = client.get(url).send().await?.error_for_status()?;
    let _ = response.chunk().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_source_succeeds_after_two_failures() {
        let mut fallback = SourceFallback::default();
        fallback.apply(PreloadEvent::Failed { index: 0 });
        fallback.apply(PreloadEvent::Failed { index: 1 });
        assert!(!fallback.is_ready());

        fallback.apply(PreloadEvent::Loaded { index: 2 });
        assert!(fallback.is_ready());
        assert_eq!(fallback.current_url(), VIDEO_SOURCES[2]);
    }

    #[test]
    fn exhausting_all_sources_still_ends_ready() {
        let mut fallback = SourceFallback::default();
        for index in 0..VIDEO_SOURCES.len() {
            fallback.apply(PreloadEvent::Failed { index });
        }
        assert!(fallback.is_ready());
        assert_eq!(fallback.current_url(), VIDEO_SOURCES[VIDEO_SOURCES.len() - 1]);
    }

    #[test]
    fn success_halts_further_fallback() {
        let mut fallback = SourceFallback::default();
        fallback.apply(PreloadEvent::Loaded { index: 0 });
        assert!(fallback.is_ready());

        fallback.apply(PreloadEvent::Failed { index: 0 });
        fallback.apply(PreloadEvent::Failed { index: 1 });
        assert_eq!(fallback.current_url(), VIDEO_SOURCES[0]);
    }

    #[test]
    fn stale_failures_are_ignored() {
        let mut fallback = SourceFallback::default();
        fallback.apply(PreloadEvent::Failed { index: 0 });
        assert_eq!(fallback.current_url(), VIDEO_SOURCES[1]);

        // A duplicate report for the source we already left does nothing.
        fallback.apply(PreloadEvent::Failed { index: 0 });
        assert_eq!(fallback.current_url(), VIDEO_SOURCES[1]);
        assert!(!fallback.is_ready());
    }

    #[test]
    fn idle_preload_polls_to_nothing() {
        let mut preload = VideoPreload::default();
        assert!(!preload.in_flight());
        assert!(!preload.poll());
        assert!(!preload.is_ready());
    }
}
