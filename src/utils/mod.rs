pub mod constants;
pub mod dates;
pub mod parsing;
pub mod progress;
pub mod validation;

pub use constants::*;
pub use dates::{extract_year, extract_year_month};
pub use parsing::{parse_float_or_absent, round_to};
pub use progress::ProgressReporter;
pub use validation::PeriodValidator;
