use crate::catalog::StatsVector;
use tracing::debug;

/// A live chart drawn by some surface. Must be disposed explicitly.
pub trait ChartHandle {
    fn dispose(&mut self);
}

/// Anything that can draw a stats chart: the terminal bars, a test recorder.
pub trait ChartSurface {
    fn draw(&mut self, champion_id: &str, stats: &StatsVector) -> Box<dyn ChartHandle>;
}

/// Owns the single chart allowed per session.
///
/// `show` disposes the previous handle before the surface draws a new one,
/// and dropping the slot disposes whatever is still live.
#[derive(Default)]
pub struct ChartSlot {
    active: Option<Box<dyn ChartHandle>>,
}

impl ChartSlot {
    pub fn new() -> Self {
        ChartSlot::default()
    }

    /// Returns whether a chart was drawn; all-zero stats leave the slot empty.
    pub fn show(
        &mut self,
        surface: &mut dyn ChartSurface,
        champion_id: &str,
        stats: &StatsVector,
    ) -> bool {
        self.release();
        if !stats.has_stats() {
            debug!(champion = champion_id, "no stats, chart hidden");
            return false;
        }
        self.active = Some(surface.draw(champion_id, stats));
        true
    }

    pub fn release(&mut self) {
        if let Some(mut handle) = self.active.take() {
            handle.dispose();
            debug!("chart disposed");
        }
    }

    pub fn is_live(&self) -> bool {
        self.active.is_some()
    }
}

impl Drop for ChartSlot {
    fn drop(&mut self) {
        self.release();
    }
}
