use crate::core::{
    AxisBounds, ChartData, ChartKind, ChartOptions, ChartSlot, DataSeries, SlotDescriptor,
    SlotPlan, Snapshot,
};

/// Field names used by the statistics endpoint.
const STROKE_UNIT_ACCESS: &str = "stroke_unit_access";
const STROKE_UNIT_ACCESS_PERCENTAGE: &str = "stroke_unit_access_percentage";
const MONTHLY_ADMISSIONS: &str = "monthly_admissions";
const CORRECT_MEDICATIONS: &str = "correct_medications";
const CORRECT_MEDICATIONS_PERCENTAGE: &str = "correct_medications_percentage";
const TELESTROKE_VOLUME: &str = "telestroke_volume";

/// Derives the standard slot plan from a snapshot.
///
/// Slots whose backing series is absent in this deployment are not declared
/// at all; the reconciler never hears about them.
#[must_use]
pub fn standard_slots(snapshot: &Snapshot) -> SlotPlan {
    let mut plan = SlotPlan::new();

    if let Some(points) = snapshot.series(STROKE_UNIT_ACCESS) {
        plan.push(SlotDescriptor::new(
            ChartSlot::StrokeUnitAccess,
            ChartKind::Line,
            ChartData::new(
                snapshot.months.clone(),
                vec![DataSeries::new("Stroke unit access", points)],
            ),
            ChartOptions::default()
                .with_title("Stroke unit access")
                .with_summary(snapshot.metric_text(STROKE_UNIT_ACCESS_PERCENTAGE))
                .with_y_bounds(AxisBounds::PERCENTAGE),
        ));
    }

    if let Some(points) = snapshot.series(MONTHLY_ADMISSIONS) {
        plan.push(SlotDescriptor::new(
            ChartSlot::MonthlyAdmissions,
            ChartKind::Bar,
            ChartData::new(
                snapshot.months.clone(),
                vec![DataSeries::new("Admissions", points)],
            ),
            ChartOptions::default().with_title("Admissions by month"),
        ));
    }

    if let Some(points) = snapshot.series(CORRECT_MEDICATIONS) {
        plan.push(SlotDescriptor::new(
            ChartSlot::CorrectMedications,
            ChartKind::Line,
            ChartData::new(
                snapshot.months.clone(),
                vec![DataSeries::new("On correct medications", points)],
            ),
            ChartOptions::default()
                .with_title("Discharged on correct medications")
                .with_summary(snapshot.metric_text(CORRECT_MEDICATIONS_PERCENTAGE))
                .with_y_bounds(AxisBounds::PERCENTAGE),
        ));
    }

    if let Some(points) = snapshot.series(TELESTROKE_VOLUME) {
        plan.push(SlotDescriptor::new(
            ChartSlot::TelestrokeVolume,
            ChartKind::Bar,
            ChartData::new(
                snapshot.months.clone(),
                vec![DataSeries::new("Telestroke consults", points)],
            ),
            ChartOptions::default().with_title("Telestroke consults"),
        ));
    }

    plan
}
