use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Closed set of dashboard chart slots.
///
/// A slot is a named, fixed location in the host view where one chart may be
/// displayed. Keeping the set closed makes an unknown slot a boundary parse
/// error instead of a silent runtime lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartSlot {
    StrokeUnitAccess,
    MonthlyAdmissions,
    CorrectMedications,
    /// Only populated in deployments with a telestroke service.
    TelestrokeVolume,
}

impl ChartSlot {
    pub const ALL: [Self; 4] = [
        Self::StrokeUnitAccess,
        Self::MonthlyAdmissions,
        Self::CorrectMedications,
        Self::TelestrokeVolume,
    ];

    /// Container element id used by the host view for this slot.
    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            Self::StrokeUnitAccess => "strokeUnitAccessChart",
            Self::MonthlyAdmissions => "monthlyAdmissionsChart",
            Self::CorrectMedications => "correctMedicationsChart",
            Self::TelestrokeVolume => "telestrokeVolumeChart",
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_id())
    }
}

impl FromStr for ChartSlot {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.container_id() == s)
            .ok_or_else(|| DashboardError::InvalidData(format!("unknown chart slot id `{s}`")))
    }
}

/// Rendering mode of a chart, fixed at instance creation.
///
/// The underlying charting capability cannot change a chart's kind after
/// construction, so neither does the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}
