use crate::analyzers::WeatherAnalyzer;
use crate::cli::args::Cli;
use crate::config::WeathermanConfig;
use crate::error::Result;
use crate::models::RecordStore;
use crate::processors::{
    MonthlyAveragesReport, MonthlyBarChartReport, ReportDispatcher, WeatherReport, YearIndex,
    YearlyExtremesReport,
};
use crate::readers::ObservationReader;
use crate::writers::ReportWriter;
use anyhow::Context;
use std::fs::File;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Loaded data plus everything needed to answer report requests.
pub struct WeatherApp {
    store: RecordStore,
    year_index: YearIndex,
    analyzer: WeatherAnalyzer,
    writer: ReportWriter,
}

impl WeatherApp {
    pub fn new(store: RecordStore, writer: ReportWriter) -> Self {
        let year_index = YearIndex::from_records(store.records());
        debug!("Years with data: {:?}", year_index.years());

        Self {
            store,
            year_index,
            analyzer: WeatherAnalyzer::new(),
            writer,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn year_index(&self) -> &YearIndex {
        &self.year_index
    }

    pub fn yearly_extremes(&self, year: &str) -> Result<String> {
        let report = YearlyExtremesReport::new(&self.store, &self.analyzer, &self.writer);
        self.dispatch(year, &report)
    }

    pub fn monthly_averages(&self, year_month: &str) -> Result<String> {
        let report = MonthlyAveragesReport::new(&self.store, &self.analyzer, &self.writer);
        self.dispatch(year_month, &report)
    }

    pub fn monthly_bar_chart(&self, year_month: &str) -> Result<String> {
        let report = MonthlyBarChartReport::new(&self.store, &self.analyzer, &self.writer);
        self.dispatch(year_month, &report)
    }

    fn dispatch<R: WeatherReport>(&self, period: &str, report: &R) -> Result<String> {
        ReportDispatcher::new(&self.year_index)?.process(period, report)
    }

    /// Run every requested report in `-e`, `-a`, `-c` order.
    ///
    /// A failing report becomes a one-line message and never stops the
    /// others.
    pub fn run_reports(&self, cli: &Cli) -> Vec<String> {
        let requests: [(Option<&String>, fn(&Self, &str) -> Result<String>); 3] = [
            (cli.extremes.as_ref(), Self::yearly_extremes),
            (cli.averages.as_ref(), Self::monthly_averages),
            (cli.chart.as_ref(), Self::monthly_bar_chart),
        ];

        requests
            .into_iter()
            .filter_map(|(period, report)| period.map(|p| (p, report)))
            .map(|(period, report)| {
                report(self, period).unwrap_or_else(|e| {
                    warn!("Report for '{}' failed: {}", period, e);
                    format!("An error occurred: {}", e)
                })
            })
            .collect()
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_logging(&cli)?;

    let config = WeathermanConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if !config.color {
        colored::control::set_override(false);
    }

    let reader = ObservationReader::new()
        .with_extension(config.file_extension.as_str())
        .with_delimiter(config.delimiter_byte()?)
        .with_progress(!cli.quiet);
    let store = reader.read_directory(&cli.directory).with_context(|| {
        format!(
            "Failed to load weather data from {}",
            cli.directory.display()
        )
    })?;

    if !cli.has_reports() {
        println!(
            "Loaded {} records. Use -e YYYY, -a YYYY-MM or -c YYYY-MM to request a report.",
            store.len()
        );
        return Ok(());
    }

    let writer = ReportWriter::new()
        .with_format(cli.format)
        .with_bar_symbol(config.bar_symbol.as_str());
    let app = WeatherApp::new(store, writer);

    for report in app.run_reports(&cli) {
        println!("{}", report);
    }

    Ok(())
}

/// Set up structured logging to stderr, or to `--log-file` when given.
pub fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weatherman={}", cli.log_level())));

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()?;
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_level(true)
                        .with_timer(fmt::time::uptime())
                        .with_writer(std::io::stderr)
                        .compact(),
                )
                .try_init()?;
        }
    }

    debug!("Logging initialized at level: {}", cli.log_level());
    Ok(())
}
