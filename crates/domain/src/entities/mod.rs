//! Domain entities - Objects produced while answering a forecast request

mod forecast_period;
mod forecast_report;

pub use forecast_period::{ForecastPeriod, Temperature};
pub use forecast_report::{ForecastReport, MAX_REPORT_PERIODS};
