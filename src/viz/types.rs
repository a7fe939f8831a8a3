//! Chart appearance settings. Plain data, no drawing behavior.

/// Legend placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMode {
    /// Separate legend column on the right side.
    Right,
    /// Separate legend band below the chart.
    Bottom,
    /// No legend; pie slices still carry their own labels.
    Hidden,
}

/// Series color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Microsoft Office (2013+) chart palette.
    Office,
    /// Muted six-color palette used by the dashboard pages.
    Olympic,
}

pub const DEFAULT_LEGEND_MODE: LegendMode = LegendMode::Bottom;

/// Appearance of a rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub legend: LegendMode,
    pub colors: ColorScheme,
    /// Overrides the default chart caption.
    pub title: Option<String>,
    /// Draw the slice name next to each pie slice.
    pub slice_labels: bool,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// Pie radius as a fraction of the smaller drawing-area side (clamped to 0.1..=0.5).
    pub pie_radius_ratio: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            legend: DEFAULT_LEGEND_MODE,
            colors: ColorScheme::Olympic,
            title: None,
            slice_labels: true,
            x_axis_label: "Dates".into(),
            y_axis_label: "Medals".into(),
            pie_radius_ratio: 0.38,
        }
    }
}

impl ChartConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_legend(mut self, legend: LegendMode) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
