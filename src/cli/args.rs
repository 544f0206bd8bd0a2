use crate::writers::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weatherman")]
#[command(about = "Weather reports from delimited observation files")]
#[command(version)]
pub struct Cli {
    /// Path to weather data files directory
    pub directory: PathBuf,

    #[arg(short = 'e', value_name = "YYYY", help = "Year to display extremes for")]
    pub extremes: Option<String>,

    #[arg(short = 'a', value_name = "YYYY-MM", help = "Month to display averages for")]
    pub averages: Option<String>,

    #[arg(short = 'c', value_name = "YYYY-MM", help = "Month to display a bar chart for")]
    pub chart: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Configuration file [default: ./weatherman.toml if present]")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the loading progress bar")]
    pub quiet: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn has_reports(&self) -> bool {
        self.extremes.is_some() || self.averages.is_some() || self.chart.is_some()
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
