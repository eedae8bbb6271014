use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of a line-chart series: a shared label plus one value per tracked
/// series key.
///
/// The label is excluded from all numeric processing. On the wire the values
/// are flattened next to the label so the JSON shape is a flat record, e.g.
/// `{"date":"Jan","portfolio":0.0,"sp500":0.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(rename = "date")]
    pub label: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Value for one series key, if the record carries it.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// One entity on a relative rotation graph.
///
/// Both coordinates are centered around the neutral value 100. `size` and
/// `color` are display hints; an explicit `color` overrides the derived
/// quadrant color but never changes classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationPoint {
    pub name: String,
    pub relative_strength: f64,
    pub momentum: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RotationPoint {
    pub fn new(name: impl Into<String>, relative_strength: f64, momentum: f64) -> Self {
        Self {
            name: name.into(),
            relative_strength,
            momentum,
            size: None,
            color: None,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Chart payload handed to the rendering layer.
///
/// Discriminated by the `type` field so consumers can branch without probing
/// the data shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChartData {
    #[serde(rename = "line")]
    Line {
        title: String,
        #[serde(rename = "xAxisLabel", skip_serializing_if = "Option::is_none")]
        x_axis_label: Option<String>,
        #[serde(rename = "yAxisLabel", skip_serializing_if = "Option::is_none")]
        y_axis_label: Option<String>,
        data: Vec<SeriesPoint>,
    },
    #[serde(rename = "relative-rotation")]
    RelativeRotation {
        title: String,
        #[serde(rename = "xAxisLabel", skip_serializing_if = "Option::is_none")]
        x_axis_label: Option<String>,
        #[serde(rename = "yAxisLabel", skip_serializing_if = "Option::is_none")]
        y_axis_label: Option<String>,
        data: Vec<RotationPoint>,
    },
}

impl ChartData {
    pub fn title(&self) -> &str {
        match self {
            ChartData::Line { title, .. } => title,
            ChartData::RelativeRotation { title, .. } => title,
        }
    }
}
