/// Observation field names as they appear in the file headers
pub const DATE_FIELD: &str = "PKT";
pub const MAX_TEMPERATURE_FIELD: &str = "Max TemperatureC";
pub const MIN_TEMPERATURE_FIELD: &str = "Min TemperatureC";
pub const MAX_HUMIDITY_FIELD: &str = "Max Humidity";
pub const MEAN_HUMIDITY_FIELD: &str = "Mean Humidity";

/// Period input shapes
pub const YEAR_PATTERN: &str = r"^\d{4}$";
pub const YEAR_MONTH_PATTERN: &str = r"^\d{4}-\d{2}$";
pub const YEAR_SHAPE: &str = "YYYY";
pub const YEAR_MONTH_SHAPE: &str = "YYYY-MM";
pub const MIN_MONTH: u32 = 1;
pub const MAX_MONTH: u32 = 12;

/// Loader defaults
pub const DEFAULT_FILE_EXTENSION: &str = "txt";
pub const DEFAULT_DELIMITER: &str = ",";

/// Report defaults
pub const DEFAULT_BAR_SYMBOL: &str = "+";
pub const MAX_BAR_LENGTH: usize = 200;
pub const AVERAGE_DECIMAL_PLACES: i32 = 2;

/// Configuration
pub const CONFIG_FILE_STEM: &str = "weatherman";
pub const ENV_PREFIX: &str = "WEATHERMAN";
