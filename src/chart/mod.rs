//! Chart rendering for configuration comparison

mod colors;
mod radar;

pub use radar::render_radar_chart;

/// Interpolated curve data for a single configuration
pub struct ConfigChartData {
    pub name: String,
    pub color: &'static str,
    /// Seen-object scores, one per angular dimension
    pub seen: Vec<f64>,
    /// Unseen-object scores, one per angular dimension
    pub unseen: Vec<f64>,
}

/// Chart dimensions (square canvas, 2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 1600;
pub(super) const CHART_HEIGHT: u32 = 1600;

/// Legend label for a seen-object curve
pub(super) fn seen_label(name: &str) -> String {
    format!("{} (Seen Object)", name)
}

/// Legend label for an unseen-object curve
pub(super) fn unseen_label(name: &str) -> String {
    format!("{} (Unseen Object)", name)
}

/// Legend entries for all drawn curves, two per configuration
pub fn legend_entries(configs: &[ConfigChartData]) -> Vec<String> {
    configs
        .iter()
        .flat_map(|c| [seen_label(&c.name), unseen_label(&c.name)])
        .collect()
}
