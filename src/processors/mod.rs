pub mod dispatcher;
pub mod period_filter;
pub mod reports;
pub mod year_index;

pub use dispatcher::ReportDispatcher;
pub use period_filter::{filter_by_month, filter_by_year};
pub use reports::{MonthlyAveragesReport, MonthlyBarChartReport, WeatherReport, YearlyExtremesReport};
pub use year_index::YearIndex;
