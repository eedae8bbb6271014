use chart_core::RotationPoint;
use serde::{Deserialize, Serialize};

/// Neutral threshold on both rotation axes.
pub const NEUTRAL: f64 = 100.0;

/// Rotation quadrant classification.
///
/// The boundary value 100 belongs to the high side on both axes, so a point
/// at exactly (100, 100) is `Leading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// High relative strength, high momentum
    Leading,

    /// High relative strength, fading momentum
    Weakening,

    /// Low relative strength, low momentum
    Lagging,

    /// Low relative strength, rising momentum
    Improving,
}

impl Quadrant {
    /// Classify a (relative strength, momentum) pair against the neutral
    /// threshold.
    pub fn classify(relative_strength: f64, momentum: f64) -> Self {
        match (relative_strength >= NEUTRAL, momentum >= NEUTRAL) {
            (true, true) => Quadrant::Leading,
            (true, false) => Quadrant::Weakening,
            (false, false) => Quadrant::Lagging,
            (false, true) => Quadrant::Improving,
        }
    }

    pub fn for_point(point: &RotationPoint) -> Self {
        Self::classify(point.relative_strength, point.momentum)
    }

    /// Get human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Leading => "Leading",
            Quadrant::Weakening => "Weakening",
            Quadrant::Lagging => "Lagging",
            Quadrant::Improving => "Improving",
        }
    }

    /// Fixed display color. Consumers must take color from the quadrant,
    /// never re-derive it from the coordinates.
    pub fn color(&self) -> &'static str {
        match self {
            Quadrant::Leading => "#22c55e",
            Quadrant::Weakening => "#eab308",
            Quadrant::Lagging => "#ef4444",
            Quadrant::Improving => "#3b82f6",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::Leading => "Strong & Accelerating",
            Quadrant::Weakening => "Strong but Decelerating",
            Quadrant::Lagging => "Weak & Decelerating",
            Quadrant::Improving => "Weak but Accelerating",
        }
    }
}

/// Color used to render a point: an explicit override wins, otherwise the
/// derived quadrant color. The override never changes the classification.
pub fn display_color(point: &RotationPoint) -> String {
    point
        .color
        .clone()
        .unwrap_or_else(|| Quadrant::for_point(point).color().to_string())
}
