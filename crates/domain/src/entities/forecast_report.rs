//! Forecast report entity
//!
//! The human-readable result handed back to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ForecastPeriod;

/// Maximum number of periods included in a report
pub const MAX_REPORT_PERIODS: usize = 5;

/// Separator placed between rendered period blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// An ordered, truncated selection of forecast periods
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    periods: Vec<ForecastPeriod>,
}

impl ForecastReport {
    /// Build a report from upstream periods, keeping upstream order
    ///
    /// Only the first [`MAX_REPORT_PERIODS`] periods are kept.
    #[must_use]
    pub fn from_periods(periods: impl IntoIterator<Item = ForecastPeriod>) -> Self {
        Self {
            periods: periods.into_iter().take(MAX_REPORT_PERIODS).collect(),
        }
    }

    /// Periods included in the report
    #[must_use]
    pub fn periods(&self) -> &[ForecastPeriod] {
        &self.periods
    }

    /// Number of period blocks
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the report has no periods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Render the report text
    ///
    /// An empty report renders as the empty string.
    #[must_use]
    pub fn render(&self) -> String {
        self.periods
            .iter()
            .map(ForecastPeriod::render)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }
}

impl fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(n: usize) -> Vec<ForecastPeriod> {
        (0..n)
            .map(|i| ForecastPeriod::new(format!("Period {i}"), format!("Summary {i}")))
            .collect()
    }

    #[test]
    fn renders_two_block_report() {
        let report = ForecastReport::from_periods(vec![
            ForecastPeriod::new("Today", "Sunny").with_temperature(22.0, "C"),
            ForecastPeriod::new("Tonight", "Clear").with_temperature(10.0, "C"),
        ]);

        assert_eq!(report.render(), "Today:\nSunny\n---\n\nTonight:\nClear\n---");
    }

    #[test]
    fn truncates_to_five_periods() {
        let report = ForecastReport::from_periods(periods(14));
        assert_eq!(report.len(), MAX_REPORT_PERIODS);
        assert_eq!(report.periods()[0].label, "Period 0");
        assert_eq!(report.periods()[4].label, "Period 4");
        assert!(!report.render().contains("Period 5"));
    }

    #[test]
    fn keeps_all_when_fewer_than_five() {
        let report = ForecastReport::from_periods(periods(3));
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn empty_report_renders_empty_string() {
        let report = ForecastReport::from_periods(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.render(), "");
    }

    #[test]
    fn single_period_has_no_separator() {
        let report = ForecastReport::from_periods(periods(1));
        assert_eq!(report.render(), "Period 0:\nSummary 0\n---");
    }

    #[test]
    fn display_matches_render() {
        let report = ForecastReport::from_periods(periods(2));
        assert_eq!(report.to_string(), report.render());
    }
}
