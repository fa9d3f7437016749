use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One complete, immutable pull of server-side statistics.
///
/// A snapshot replaces its predecessor wholesale on every successful fetch;
/// nothing is merged. Named fields stay keyed exactly as the endpoint sends
/// them: per-month series arrive as arrays (with `null` for months that have
/// no eligible stays) and summary metrics as scalars. Fields absent in a
/// deployment configuration are simply missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Month labels for the year to date, e.g. `["January", "February"]`.
    #[serde(default)]
    pub months: Vec<String>,

    #[serde(flatten)]
    fields: IndexMap<String, Value>,
}

impl Snapshot {
    #[must_use]
    pub fn new(months: Vec<String>) -> Self {
        Self {
            months,
            fields: IndexMap::new(),
        }
    }

    /// Inserts or replaces a per-month series.
    #[must_use]
    pub fn with_series(mut self, name: impl Into<String>, points: Vec<Option<f64>>) -> Self {
        let values = points
            .into_iter()
            .map(|point| point.map_or(Value::Null, Value::from))
            .collect();
        self.fields.insert(name.into(), Value::Array(values));
        self
    }

    /// Inserts or replaces a scalar summary metric.
    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), Value::from(value));
        self
    }

    /// Returns the per-month series stored under `name`, if present.
    ///
    /// Non-numeric entries read as `None`, matching how the view treats a
    /// month without data.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<Vec<Option<f64>>> {
        match self.fields.get(name)? {
            Value::Array(values) => Some(values.iter().map(Value::as_f64).collect()),
            _ => None,
        }
    }

    /// Returns the scalar summary metric stored under `name`, if present.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.fields.get(name)?.as_f64()
    }

    /// Formats a percentage metric for display: `85` becomes `"85%"`, `71.5`
    /// becomes `"71.5%"`.
    #[must_use]
    pub fn metric_text(&self, name: &str) -> Option<String> {
        self.metric(name).map(|value| format!("{value}%"))
    }

    #[must_use]
    pub fn has_series(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(Value::Array(_)))
    }

    /// Field names in the order the endpoint sent them.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::Snapshot;

    const WIRE_BODY: &str = r#"{
        "months": ["January", "February", "March"],
        "stroke_unit_access": [71.5, null, 95.2],
        "stroke_unit_access_percentage": 85
    }"#;

    #[test]
    fn deserializes_endpoint_wire_shape() {
        let snapshot: Snapshot = serde_json::from_str(WIRE_BODY).expect("wire body");
        assert_eq!(snapshot.months, vec!["January", "February", "March"]);
        assert_eq!(
            snapshot.series("stroke_unit_access"),
            Some(vec![Some(71.5), None, Some(95.2)])
        );
        assert_eq!(snapshot.metric("stroke_unit_access_percentage"), Some(85.0));
    }

    #[test]
    fn metric_text_formats_whole_and_fractional_percentages() {
        let snapshot = Snapshot::new(Vec::new())
            .with_metric("whole", 85.0)
            .with_metric("fractional", 71.5);
        assert_eq!(snapshot.metric_text("whole").as_deref(), Some("85%"));
        assert_eq!(snapshot.metric_text("fractional").as_deref(), Some("71.5%"));
    }

    #[test]
    fn deployment_absent_fields_read_as_none() {
        let snapshot: Snapshot = serde_json::from_str(WIRE_BODY).expect("wire body");
        assert_eq!(snapshot.series("telestroke_volume"), None);
        assert_eq!(snapshot.metric_text("telestroke_percentage"), None);
        assert!(!snapshot.has_series("telestroke_volume"));
    }

    #[test]
    fn scalar_field_is_not_a_series() {
        let snapshot: Snapshot = serde_json::from_str(WIRE_BODY).expect("wire body");
        assert_eq!(snapshot.series("stroke_unit_access_percentage"), None);
    }
}
