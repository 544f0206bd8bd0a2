//! Weather observation reports.
//!
//! Loads header-keyed observation files from a directory and answers three
//! questions about them: the extremes of a year, the averages of a month,
//! and a day-by-day temperature bar chart for a month.

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{Result, WeatherError};
