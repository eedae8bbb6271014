pub mod catalog;
pub mod chat;
pub mod intent;


pub use intent::ChartIntent;

use chart_analysis::normalize_keys;
use chart_core::{ChartData, ChartError};
use serde::Serialize;

/// Assistant text returned alongside any line chart.
const LINE_RESPONSE: &str = "I've analyzed your request and created a chart \
comparing performance as percentage returns. The chart starts at 0% and shows \
relative profitability over time.";

/// Assistant text returned alongside the rotation chart.
const ROTATION_RESPONSE: &str = "I've created a relative rotation graph showing \
sector performance analysis. This quadrant chart helps visualize which sectors \
are in leading, improving, weakening, or lagging phases based on their relative \
strength and momentum.";

/// Payload for a chart request: assistant text plus the chart itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequestReply {
    pub response: String,
    pub chart_data: ChartData,
}

/// Classify a free-text message and build the matching chart.
pub fn build_chart_response(message: &str) -> Result<ChartRequestReply, ChartError> {
    build_chart_for_intent(ChartIntent::classify(message))
}

/// Build the chart for an already-classified intent.
///
/// Line datasets are normalized to percentage returns here, one series key
/// at a time against its own baseline; rotation data is already on the
/// neutral-100 scale and passes through untouched.
pub fn build_chart_for_intent(intent: ChartIntent) -> Result<ChartRequestReply, ChartError> {
    let chart_data = match catalog::line_dataset(intent) {
        None => ChartData::RelativeRotation {
            title: catalog::ROTATION_TITLE.to_string(),
            x_axis_label: Some(catalog::ROTATION_X_LABEL.to_string()),
            y_axis_label: Some(catalog::ROTATION_Y_LABEL.to_string()),
            data: catalog::sector_rotation(),
        },
        Some(dataset) => {
            let data = normalize_keys(&dataset.points, dataset.series_keys)?;
            ChartData::Line {
                title: dataset.title.to_string(),
                x_axis_label: Some(dataset.x_axis_label.to_string()),
                y_axis_label: Some(dataset.y_axis_label.to_string()),
                data,
            }
        }
    };

    let response = match &chart_data {
        ChartData::RelativeRotation { .. } => ROTATION_RESPONSE,
        ChartData::Line { .. } => LINE_RESPONSE,
    }
    .to_string();

    Ok(ChartRequestReply {
        response,
        chart_data,
    })
}
