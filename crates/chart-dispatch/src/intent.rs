use serde::{Deserialize, Serialize};

/// Chart intent recognized from a free-text message.
///
/// Matching is case-insensitive substring search over fixed keyword sets,
/// checked in declaration order: sector rotation wins over the index
/// comparisons, and `GeneralPerformance` is the fallback when nothing
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartIntent {
    SectorRotation,
    Sp500Comparison,
    NasdaqComparison,
    TechComparison,
    GeneralPerformance,
}

/// Keyword intents in match priority order. `GeneralPerformance` is absent
/// because it matches everything.
const PRIORITY: [ChartIntent; 4] = [
    ChartIntent::SectorRotation,
    ChartIntent::Sp500Comparison,
    ChartIntent::NasdaqComparison,
    ChartIntent::TechComparison,
];

impl ChartIntent {
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ChartIntent::SectorRotation => &["relative", "rotation", "sector", "quadrant"],
            ChartIntent::Sp500Comparison => &["s&p", "sp500"],
            ChartIntent::NasdaqComparison => &["nasdaq"],
            ChartIntent::TechComparison => &["tech"],
            ChartIntent::GeneralPerformance => &[],
        }
    }

    /// Classify a free-text message into the highest-priority matching
    /// intent.
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        for intent in PRIORITY {
            if intent.keywords().iter().any(|kw| message.contains(kw)) {
                return intent;
            }
        }
        ChartIntent::GeneralPerformance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_keywords() {
        for message in [
            "show me a relative rotation graph",
            "sector breakdown please",
            "which QUADRANT is energy in?",
        ] {
            assert_eq!(ChartIntent::classify(message), ChartIntent::SectorRotation);
        }
    }

    #[test]
    fn test_index_keywords() {
        assert_eq!(
            ChartIntent::classify("compare me against the S&P this year"),
            ChartIntent::Sp500Comparison
        );
        assert_eq!(
            ChartIntent::classify("how did I do vs sp500?"),
            ChartIntent::Sp500Comparison
        );
        assert_eq!(
            ChartIntent::classify("portfolio vs nasdaq"),
            ChartIntent::NasdaqComparison
        );
        assert_eq!(
            ChartIntent::classify("my tech picks"),
            ChartIntent::TechComparison
        );
    }

    #[test]
    fn test_priority_rotation_beats_index_keywords() {
        // Contains both "sector" and "tech" -- rotation has higher priority
        assert_eq!(
            ChartIntent::classify("rotate the tech sector view"),
            ChartIntent::SectorRotation
        );
        // "s&p" outranks "nasdaq" and "tech"
        assert_eq!(
            ChartIntent::classify("s&p or nasdaq or tech, whichever"),
            ChartIntent::Sp500Comparison
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            ChartIntent::classify("how is my portfolio doing?"),
            ChartIntent::GeneralPerformance
        );
        assert_eq!(ChartIntent::classify(""), ChartIntent::GeneralPerformance);
    }
}
