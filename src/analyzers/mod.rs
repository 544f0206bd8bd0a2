pub mod weather_analyzer;

pub use weather_analyzer::WeatherAnalyzer;
