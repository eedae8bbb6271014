//! Canned demo datasets backing each chart intent.
//!
//! Line datasets hold raw dollar values; the dispatcher converts them to
//! percentage returns before they leave the service. Rotation data is
//! already expressed on the neutral-100 scale and passes through as-is.

use chart_core::{RotationPoint, SeriesPoint};

use crate::intent::ChartIntent;

/// A raw line dataset plus the presentation metadata for its chart.
pub struct LineDataset {
    pub title: &'static str,
    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,
    /// Keys to normalize, each against its own first value.
    pub series_keys: &'static [&'static str],
    pub points: Vec<SeriesPoint>,
}

fn row(label: &str, values: &[(&str, f64)]) -> SeriesPoint {
    let mut point = SeriesPoint::new(label);
    for (key, value) in values {
        point = point.with_value(*key, *value);
    }
    point
}

/// $50K retail portfolio against the S&P 500 over a full year.
fn sp500_comparison() -> LineDataset {
    let rows = [
        ("Jan", 50000.0, 50000.0),
        ("Feb", 50300.0, 50150.0),
        ("Mar", 50900.0, 50600.0),
        ("Apr", 50200.0, 50100.0),
        ("May", 51100.0, 50800.0),
        ("Jun", 51600.0, 51200.0),
        ("Jul", 51400.0, 51000.0),
        ("Aug", 51800.0, 51300.0),
        ("Sep", 52200.0, 51600.0),
        ("Oct", 52500.0, 51800.0),
        ("Nov", 52800.0, 52000.0),
        ("Dec", 53200.0, 52200.0),
    ];

    LineDataset {
        title: "Portfolio vs S&P 500 (% Returns)",
        x_axis_label: "Month",
        y_axis_label: "Return (%)",
        series_keys: &["portfolio", "sp500"],
        points: rows
            .iter()
            .map(|(label, portfolio, sp500)| {
                row(label, &[("portfolio", *portfolio), ("sp500", *sp500)])
            })
            .collect(),
    }
}

/// $100K tech-leaning portfolio against the NASDAQ over a full year.
fn nasdaq_comparison() -> LineDataset {
    let rows = [
        ("Jan", 100000.0, 100000.0),
        ("Feb", 100500.0, 100200.0),
        ("Mar", 101800.0, 101400.0),
        ("Apr", 100900.0, 100700.0),
        ("May", 102600.0, 102000.0),
        ("Jun", 103400.0, 102800.0),
        ("Jul", 103100.0, 102500.0),
        ("Aug", 103800.0, 103100.0),
        ("Sep", 104500.0, 103700.0),
        ("Oct", 105200.0, 104300.0),
        ("Nov", 105800.0, 104800.0),
        ("Dec", 106500.0, 105400.0),
    ];

    LineDataset {
        title: "Portfolio vs NASDAQ (% Returns)",
        x_axis_label: "Month",
        y_axis_label: "Return (%)",
        series_keys: &["portfolio", "nasdaq"],
        points: rows
            .iter()
            .map(|(label, portfolio, nasdaq)| {
                row(label, &[("portfolio", *portfolio), ("nasdaq", *nasdaq)])
            })
            .collect(),
    }
}

/// $25K of selective tech picks against a tech sector index, six months.
fn tech_comparison() -> LineDataset {
    let rows = [
        ("Jan", 25000.0, 25000.0),
        ("Feb", 25150.0, 25075.0),
        ("Mar", 25450.0, 25300.0),
        ("Apr", 25200.0, 25100.0),
        ("May", 25800.0, 25600.0),
        ("Jun", 26100.0, 25850.0),
    ];

    LineDataset {
        title: "Tech Holdings vs Tech Sector Index (% Returns)",
        x_axis_label: "Month",
        y_axis_label: "Return (%)",
        series_keys: &["tech holdings", "tech index"],
        points: rows
            .iter()
            .map(|(label, holdings, index)| {
                row(label, &[("tech holdings", *holdings), ("tech index", *index)])
            })
            .collect(),
    }
}

/// $75K diversified portfolio against a blended benchmark, six months.
fn general_performance() -> LineDataset {
    let rows = [
        ("Jan", 75000.0, 75000.0),
        ("Feb", 75450.0, 75300.0),
        ("Mar", 76200.0, 75900.0),
        ("Apr", 75800.0, 75600.0),
        ("May", 77100.0, 76500.0),
        ("Jun", 77850.0, 77200.0),
    ];

    LineDataset {
        title: "Portfolio Performance Analysis (% Returns)",
        x_axis_label: "Month",
        y_axis_label: "Return (%)",
        series_keys: &["portfolio", "benchmark"],
        points: rows
            .iter()
            .map(|(label, portfolio, benchmark)| {
                row(label, &[("portfolio", *portfolio), ("benchmark", *benchmark)])
            })
            .collect(),
    }
}

/// Line dataset for an intent, or `None` for the rotation intent.
pub fn line_dataset(intent: ChartIntent) -> Option<LineDataset> {
    match intent {
        ChartIntent::SectorRotation => None,
        ChartIntent::Sp500Comparison => Some(sp500_comparison()),
        ChartIntent::NasdaqComparison => Some(nasdaq_comparison()),
        ChartIntent::TechComparison => Some(tech_comparison()),
        ChartIntent::GeneralPerformance => Some(general_performance()),
    }
}

pub const ROTATION_TITLE: &str = "Sector Relative Rotation Analysis";
pub const ROTATION_X_LABEL: &str = "Relative Strength vs Benchmark";
pub const ROTATION_Y_LABEL: &str = "Momentum (Rate of Change)";

/// Eight market sectors on the neutral-100 rotation scale.
pub fn sector_rotation() -> Vec<RotationPoint> {
    [
        ("Technology", 108.0, 105.0, 120.0),
        ("Healthcare", 102.0, 98.0, 100.0),
        ("Financial Services", 95.0, 92.0, 110.0),
        ("Energy", 112.0, 89.0, 90.0),
        ("Consumer Discretionary", 88.0, 103.0, 105.0),
        ("Real Estate", 85.0, 87.0, 80.0),
        ("Communication Services", 106.0, 107.0, 115.0),
        ("Utilities", 92.0, 95.0, 85.0),
    ]
    .iter()
    .map(|(name, relative_strength, momentum, size)| {
        RotationPoint::new(*name, *relative_strength, *momentum).with_size(*size)
    })
    .collect()
}
