//! Mocked assistant replies for the chat endpoint.
//!
//! Three canned responses: two line-chart replies over index-100 data and a
//! sector rotation reply. Rotation-flavored messages always get the rotation
//! reply; everything else alternates between the other two.

use chart_core::{ChartData, SeriesPoint};
use serde::Serialize;

use crate::catalog;
use crate::intent::ChartIntent;

/// Assistant reply: text plus zero or more charts.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub charts: Vec<ChartData>,
}

fn row(label: &str, values: &[(&str, f64)]) -> SeriesPoint {
    let mut point = SeriesPoint::new(label);
    for (key, value) in values {
        point = point.with_value(*key, *value);
    }
    point
}

/// Year-in-review reply: portfolio vs S&P 500, indexed to 100.
fn performance_reply() -> ChatReply {
    let rows = [
        ("Jan", 100.0, 100.0),
        ("Feb", 105.0, 103.0),
        ("Mar", 112.0, 108.0),
        ("Apr", 118.0, 115.0),
        ("May", 125.0, 120.0),
        ("Jun", 120.0, 118.0),
        ("Jul", 128.0, 125.0),
        ("Aug", 122.0, 120.0),
        ("Sep", 115.0, 115.0),
        ("Oct", 110.0, 112.0),
        ("Nov", 118.0, 116.0),
        ("Dec", 115.0, 112.0),
    ];

    ChatReply {
        response: "Based on your portfolio analysis, you achieved a 15.2% return \
in 2023, outperforming the S&P 500 by 2.7%. Your tech-heavy allocation \
contributed significantly to this outperformance."
            .to_string(),
        charts: vec![ChartData::Line {
            title: "Portfolio vs S&P 500 - 2023".to_string(),
            x_axis_label: None,
            y_axis_label: None,
            data: rows
                .iter()
                .map(|(label, portfolio, sp500)| {
                    row(label, &[("portfolio", *portfolio), ("sp500", *sp500)])
                })
                .collect(),
        }],
    }
}

/// Diversification reply: quarterly sector comparison, indexed to 100.
fn diversification_reply() -> ChatReply {
    let rows = [
        ("Q1", 115.0, 108.0, 105.0),
        ("Q2", 125.0, 112.0, 110.0),
        ("Q3", 118.0, 115.0, 108.0),
        ("Q4", 130.0, 118.0, 112.0),
    ];

    ChatReply {
        response: "Your portfolio shows strong diversification across sectors. \
However, I notice a 35% allocation to technology stocks, which while profitable \
in 2023, may expose you to sector-specific risks."
            .to_string(),
        charts: vec![ChartData::Line {
            title: "Sector Performance Comparison".to_string(),
            x_axis_label: None,
            y_axis_label: None,
            data: rows
                .iter()
                .map(|(label, tech, healthcare, finance)| {
                    row(
                        label,
                        &[
                            ("tech", *tech),
                            ("healthcare", *healthcare),
                            ("finance", *finance),
                        ],
                    )
                })
                .collect(),
        }],
    }
}

/// Sector rotation reply, reusing the catalog's rotation dataset.
fn rotation_reply() -> ChatReply {
    ChatReply {
        response: "Here's a relative rotation graph showing how different sectors \
are performing relative to the market. Technology and Communication Services are \
in the 'Leading' quadrant, showing strong relative strength and positive momentum."
            .to_string(),
        charts: vec![ChartData::RelativeRotation {
            title: catalog::ROTATION_TITLE.to_string(),
            x_axis_label: Some("Relative Strength vs S&P 500".to_string()),
            y_axis_label: Some(catalog::ROTATION_Y_LABEL.to_string()),
            data: catalog::sector_rotation(),
        }],
    }
}

/// Pick the reply for a chat message.
///
/// `cursor` is a caller-supplied monotonic counter; non-rotation messages
/// alternate between the two line replies so behavior stays deterministic.
pub fn select_reply(message: &str, cursor: usize) -> ChatReply {
    if ChartIntent::classify(message) == ChartIntent::SectorRotation {
        return rotation_reply();
    }

    if cursor % 2 == 0 {
        performance_reply()
    } else {
        diversification_reply()
    }
}
