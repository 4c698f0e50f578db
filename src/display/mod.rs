pub mod chart;
pub mod output;

pub use chart::TerminalChart;
pub use output::{display_error, display_info, display_success, TerminalRenderer};
