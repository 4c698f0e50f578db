use crate::catalog::entry::MAX_STAT;
use crate::catalog::StatsVector;
use crate::session::{ChartHandle, ChartSurface};
use colored::*;
use tracing::debug;

/// Draws the power chart as horizontal bars on stdout.
#[derive(Default)]
pub struct TerminalChart;

struct TerminalChartHandle {
    champion_id: String,
}

impl ChartHandle for TerminalChartHandle {
    fn dispose(&mut self) {
        debug!(champion = %self.champion_id, "power chart released");
    }
}

impl ChartSurface for TerminalChart {
    fn draw(&mut self, champion_id: &str, stats: &StatsVector) -> Box<dyn ChartHandle> {
        println!("\n{}", "Power level".bold().yellow());
        for line in render_bars(stats) {
            println!("  {}", line);
        }
        Box::new(TerminalChartHandle {
            champion_id: champion_id.to_string(),
        })
    }
}

pub fn render_bars(stats: &StatsVector) -> Vec<String> {
    StatsVector::LABELS
        .iter()
        .zip(stats.values())
        .map(|(label, value)| {
            let filled = value.min(MAX_STAT) as usize;
            let empty = MAX_STAT as usize - filled;
            format!(
                "{:<10} {}{} {:>2}",
                label,
                "█".repeat(filled),
                "░".repeat(empty),
                value
            )
        })
        .collect()
}
