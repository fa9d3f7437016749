use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartKind, ChartSlot};
use crate::error::{DashboardError, DashboardResult};

/// One named series projected onto a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub name: String,
    /// Per-label values; `None` marks a label with no eligible data.
    pub points: Vec<Option<f64>>,
}

impl DataSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Dataset bound to a chart instance: shared labels plus one or more series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<DataSeries>,
}

impl ChartData {
    #[must_use]
    pub fn new(labels: Vec<String>, series: Vec<DataSeries>) -> Self {
        Self { labels, series }
    }

    /// Every series must carry exactly one point per label.
    pub fn validate(&self) -> DashboardResult<()> {
        for series in &self.series {
            if series.points.len() != self.labels.len() {
                return Err(DashboardError::InvalidData(format!(
                    "series `{}` has {} points for {} labels",
                    series.name,
                    series.points.len(),
                    self.labels.len()
                )));
            }
        }
        Ok(())
    }
}

/// Inclusive y-axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Bounds for percentage-valued series.
    pub const PERCENTAGE: Self = Self {
        min: 0.0,
        max: 100.0,
    };

    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Presentation options for one chart, replaced wholesale on every
/// reconciliation pass, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: Option<String>,
    /// Derived summary caption shown next to the chart, e.g. the year-to-date
    /// percentage.
    pub summary_text: Option<String>,
    pub y_bounds: Option<AxisBounds>,
    pub show_legend: bool,
}

impl ChartOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary_text: Option<String>) -> Self {
        self.summary_text = summary_text;
        self
    }

    #[must_use]
    pub fn with_y_bounds(mut self, y_bounds: AxisBounds) -> Self {
        self.y_bounds = Some(y_bounds);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }
}

/// Desired state for one slot, declared per render pass and not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDescriptor {
    pub slot: ChartSlot,
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl SlotDescriptor {
    #[must_use]
    pub fn new(slot: ChartSlot, kind: ChartKind, data: ChartData, options: ChartOptions) -> Self {
        Self {
            slot,
            kind,
            data,
            options,
        }
    }
}

/// Per-pass slot plan. The slot set is small and bounded, so descriptors stay
/// inline.
pub type SlotPlan = SmallVec<[SlotDescriptor; 4]>;
