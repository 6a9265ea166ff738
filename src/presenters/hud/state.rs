use crate::controllers::marker::events::{MarkerEvent, MarkerMove};
use crate::core::images::slot::SkippedSlot;

/// What the status panel shows, accumulated from marker events.
#[derive(Debug, Clone, Default)]
pub struct HudState {
    pub listener: Option<String>,
    pub last_move: Option<MarkerMove>,
    pub updates: u64,
    pub rejections: u64,
    pub last_error: Option<String>,
    pub skipped: Vec<SkippedSlot>,
}

impl HudState {
    #[must_use]
    pub fn new(listener: Option<String>, skipped: Vec<SkippedSlot>) -> Self {
        Self {
            listener,
            skipped,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: &MarkerEvent) {
        match event {
            MarkerEvent::Moved(marker_move) => {
                self.last_move = Some(*marker_move);
                self.updates += 1;
            }
            MarkerEvent::Rejected(message) => {
                self.last_error = Some(message.clone());
                self.rejections += 1;
            }
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(format!(
            "Listener: {}",
            self.listener.as_deref().unwrap_or("not running")
        ));

        match &self.last_move {
            Some(marker_move) => lines.push(format!(
                "Marker: {:.3}, {:.3} -> {}",
                marker_move.normalized.x, marker_move.normalized.y, marker_move.position
            )),
            None => lines.push("Marker: waiting for first update".to_string()),
        }

        lines.push(format!("Updates: {}  Rejected: {}", self.updates, self.rejections));

        if let Some(error) = &self.last_error {
            lines.push(format!("Last error: {error}"));
        }

        for skipped in &self.skipped {
            lines.push(format!("Skipped {}: {}", skipped.name, skipped.reason));
        }

        lines
    }
}
