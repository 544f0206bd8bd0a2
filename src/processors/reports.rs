use crate::analyzers::WeatherAnalyzer;
use crate::error::Result;
use crate::models::{
    MonthlyAverages, MonthlyExtremeSeries, PeriodKind, RecordStore, YearlyExtremes,
};
use crate::processors::period_filter::{filter_by_month, filter_by_year};
use crate::writers::ReportWriter;

/// A report the dispatcher can run: how to compute it for a period and how
/// to render the result.
pub trait WeatherReport {
    type Output;

    fn period_kind(&self) -> PeriodKind;

    fn compute(&self, period: &str) -> Result<Self::Output>;

    fn format(&self, output: &Self::Output) -> Result<String>;
}

/// `-e YYYY`: highest/lowest temperature and highest humidity of a year.
pub struct YearlyExtremesReport<'a> {
    store: &'a RecordStore,
    analyzer: &'a WeatherAnalyzer,
    writer: &'a ReportWriter,
}

impl<'a> YearlyExtremesReport<'a> {
    pub fn new(
        store: &'a RecordStore,
        analyzer: &'a WeatherAnalyzer,
        writer: &'a ReportWriter,
    ) -> Self {
        Self {
            store,
            analyzer,
            writer,
        }
    }
}

impl WeatherReport for YearlyExtremesReport<'_> {
    type Output = YearlyExtremes;

    fn period_kind(&self) -> PeriodKind {
        PeriodKind::Year
    }

    fn compute(&self, period: &str) -> Result<YearlyExtremes> {
        let records = filter_by_year(self.store.records(), period)?;
        Ok(self.analyzer.compute_yearly_extremes(&records))
    }

    fn format(&self, output: &YearlyExtremes) -> Result<String> {
        self.writer.write_yearly_extremes(output)
    }
}

/// `-a YYYY-MM`: average highest/lowest temperature and mean humidity.
pub struct MonthlyAveragesReport<'a> {
    store: &'a RecordStore,
    analyzer: &'a WeatherAnalyzer,
    writer: &'a ReportWriter,
}

impl<'a> MonthlyAveragesReport<'a> {
    pub fn new(
        store: &'a RecordStore,
        analyzer: &'a WeatherAnalyzer,
        writer: &'a ReportWriter,
    ) -> Self {
        Self {
            store,
            analyzer,
            writer,
        }
    }
}

impl WeatherReport for MonthlyAveragesReport<'_> {
    type Output = MonthlyAverages;

    fn period_kind(&self) -> PeriodKind {
        PeriodKind::YearMonth
    }

    fn compute(&self, period: &str) -> Result<MonthlyAverages> {
        let records = filter_by_month(self.store.records(), period)?;
        Ok(self.analyzer.compute_monthly_averages(&records))
    }

    fn format(&self, output: &MonthlyAverages) -> Result<String> {
        self.writer.write_monthly_averages(output)
    }
}

/// `-c YYYY-MM`: one high/low bar pair per day of the month.
pub struct MonthlyBarChartReport<'a> {
    store: &'a RecordStore,
    analyzer: &'a WeatherAnalyzer,
    writer: &'a ReportWriter,
}

impl<'a> MonthlyBarChartReport<'a> {
    pub fn new(
        store: &'a RecordStore,
        analyzer: &'a WeatherAnalyzer,
        writer: &'a ReportWriter,
    ) -> Self {
        Self {
            store,
            analyzer,
            writer,
        }
    }
}

impl WeatherReport for MonthlyBarChartReport<'_> {
    type Output = MonthlyExtremeSeries;

    fn period_kind(&self) -> PeriodKind {
        PeriodKind::YearMonth
    }

    fn compute(&self, period: &str) -> Result<MonthlyExtremeSeries> {
        let records = filter_by_month(self.store.records(), period)?;
        Ok(self.analyzer.compute_monthly_extreme_series(&records))
    }

    fn format(&self, output: &MonthlyExtremeSeries) -> Result<String> {
        self.writer.write_bar_chart(output)
    }
}
