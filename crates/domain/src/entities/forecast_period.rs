//! Forecast period entity
//!
//! One named time window ("Today", "Tonight", ...) from an upstream forecast.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Temperature reading attached to a forecast period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Numeric value
    pub value: f64,
    /// Unit as reported upstream (e.g. "F", "C")
    pub unit: String,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}°{}", self.value, self.unit)
    }
}

/// A single forecast period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Period label, e.g. "Today" or "Tuesday Night"
    pub label: String,
    /// Textual forecast for the period
    pub summary: String,
    /// Temperature, when upstream provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
}

impl ForecastPeriod {
    /// Create a period without a temperature
    #[must_use]
    pub fn new(label: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            summary: summary.into(),
            temperature: None,
        }
    }

    /// Attach a temperature
    #[must_use]
    pub fn with_temperature(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.temperature = Some(Temperature {
            value,
            unit: unit.into(),
        });
        self
    }

    /// Render this period as a report block
    ///
    /// The block is `"<label>:\n<summary>\n---"`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}:\n{}\n---", self.label, self.summary)
    }
}

impl fmt::Display for ForecastPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.temperature {
            Some(temp) => write!(f, "{} ({temp}): {}", self.label, self.summary),
            None => write!(f, "{}: {}", self.label, self.summary),
        }
    }
}
