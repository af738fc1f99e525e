//! Display rules for backend-computed match scores.
//!
//! Scores arrive normalised to [0, 1]. We only round them to percentages
//! and pick a colour bucket; no scoring happens on this side.

use serde::{Deserialize, Serialize};

const GOOD_ABOVE: f64 = 0.70;
const WARN_ABOVE: f64 = 0.50;

/// `round(100 * score)`, clamped to 0..=100
pub fn percent(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

/// "82%"
pub fn format_percent(score: f64) -> String {
    format!("{}%", percent(score))
}

/// Colour bucket for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBucket {
    /// Above 0.70
    Good,
    /// Above 0.50 up to 0.70
    Warn,
    /// 0.50 and below
    Bad,
}

impl ScoreBucket {
    pub fn from_score(score: f64) -> Self {
        if score > GOOD_ABOVE {
            ScoreBucket::Good
        } else if score > WARN_ABOVE {
            ScoreBucket::Warn
        } else {
            ScoreBucket::Bad
        }
    }

    /// Colour name used by the web dashboard
    pub fn color_name(&self) -> &'static str {
        match self {
            ScoreBucket::Good => "emerald",
            ScoreBucket::Warn => "yellow",
            ScoreBucket::Bad => "red",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBucket::Good => "Strong",
            ScoreBucket::Warn => "Fair",
            ScoreBucket::Bad => "Weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(0.82), 82);
        assert_eq!(percent(0.8251), 83);
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(1.0), 100);
        assert_eq!(percent(0.004), 0);
        assert_eq!(percent(0.0051), 1);
    }

    #[test]
    fn test_percent_stays_in_range_for_unit_interval() {
        for i in 0..=1000 {
            let s = i as f64 / 1000.0;
            let p = percent(s);
            assert!(p <= 100);
            assert_eq!(p as f64, (s * 100.0).round());
        }
    }

    #[test]
    fn test_percent_clamps_garbage() {
        assert_eq!(percent(1.7), 100);
        assert_eq!(percent(-0.2), 0);
        assert_eq!(percent(f64::NAN), 0);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(ScoreBucket::from_score(0.71), ScoreBucket::Good);
        assert_eq!(ScoreBucket::from_score(0.70), ScoreBucket::Warn);
        assert_eq!(ScoreBucket::from_score(0.51), ScoreBucket::Warn);
        assert_eq!(ScoreBucket::from_score(0.50), ScoreBucket::Bad);
        assert_eq!(ScoreBucket::from_score(0.0), ScoreBucket::Bad);
        assert_eq!(ScoreBucket::from_score(1.0), ScoreBucket::Good);
    }

    #[test]
    fn test_example_match_renders_emerald() {
        assert_eq!(format_percent(0.82), "82%");
        assert_eq!(ScoreBucket::from_score(0.82).color_name(), "emerald");
        assert_eq!(format_percent(0.9), "90%");
        assert_eq!(format_percent(0.6), "60%");
    }
}
