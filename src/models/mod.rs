pub mod observation;
pub mod period;
pub mod results;

pub use observation::{ObservationRecord, RecordStore, WeatherField};
pub use period::{Period, PeriodKind};
pub use results::{Extreme, MonthlyAverages, MonthlyExtremeSeries, YearlyExtremes};
