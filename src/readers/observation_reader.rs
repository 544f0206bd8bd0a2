use crate::error::{Result, WeatherError};
use crate::models::{ObservationRecord, RecordStore};
use crate::utils::constants::DEFAULT_FILE_EXTENSION;
use crate::utils::progress::ProgressReporter;
use csv::{ReaderBuilder, Trim};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loads header-keyed observation files from a directory.
pub struct ObservationReader {
    extension: String,
    delimiter: u8,
    silent: bool,
}

impl ObservationReader {
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_FILE_EXTENSION.to_string(),
            delimiter: b',',
            silent: true,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Show a progress bar on stderr while files are read.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.silent = !show;
        self
    }

    /// Read every matching file in `dir`, in file-name order.
    pub fn read_directory(&self, dir: &Path) -> Result<RecordStore> {
        if !dir.is_dir() {
            return Err(WeatherError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let files = self.find_files(dir)?;
        info!(
            "Found {} .{} files in {}",
            files.len(),
            self.extension,
            dir.display()
        );

        let progress =
            ProgressReporter::new(files.len() as u64, "Loading observations", self.silent);
        let mut records = Vec::new();

        for path in &files {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                progress.set_message(name);
            }
            records.extend(self.read_file(path)?);
            progress.increment(1);
        }

        progress.finish_and_clear();
        info!("Loaded {} observation records", records.len());

        Ok(RecordStore::new(records))
    }

    /// Files in `dir` with the configured extension, sorted by name.
    pub fn find_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let matches = path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == self.extension);
            if matches {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Read one file. The first non-blank line names the fields and every
    /// following line is one row, quotes included; rows whose field count
    /// differs from the header are skipped.
    pub fn read_file(&self, path: &Path) -> Result<Vec<ObservationRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let mut records: Vec<ObservationRecord> = Vec::new();
        let mut skipped = 0usize;

        for result in reader.records() {
            let row = match result {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable row in {}: {}", path.display(), e);
                    skipped += 1;
                    continue;
                }
            };

            if row.len() != headers.len() {
                skipped += 1;
                continue;
            }

            records.push(headers.iter().zip(row.iter()).collect());
        }

        debug!(
            "Read {} records from {} ({} rows skipped)",
            records.len(),
            path.display(),
            skipped
        );

        Ok(records)
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherField;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const HEADER: &str = "PKT,Max TemperatureC,Mean TemperatureC,Min TemperatureC,Max Humidity, Mean Humidity, Min Humidity";

    #[test]
    fn test_read_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file)?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "2004-8-1,33,28,23,94,71,42")?;
        writeln!(temp_file, "2004-8-2,,27,,90,,40")?;
        writeln!(temp_file, "2004-8-3,35,29")?;
        writeln!(temp_file, "<!-- 0.216:0:0 -->")?;

        let records = ObservationReader::new().read_file(temp_file.path())?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date(), Some("2004-8-1"));
        assert_eq!(records[0].get(WeatherField::MeanHumidity), Some("71"));
        assert_eq!(records[1].get(WeatherField::MaxTemperature), Some(""));

        Ok(())
    }

    #[test]
    fn test_quotes_do_not_join_lines() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "PKT,Max TemperatureC,Events")?;
        writeln!(temp_file, "2004-8-1,30,\"Rain")?;
        writeln!(temp_file, "2004-8-2,31,Fog")?;
        writeln!(temp_file, "2004-8-3,32,")?;

        let records = ObservationReader::new().read_file(temp_file.path())?;
        let dates: Vec<_> = records.iter().map(|r| r.date()).collect();

        assert_eq!(
            dates,
            vec![Some("2004-8-1"), Some("2004-8-2"), Some("2004-8-3")]
        );
        assert_eq!(records[0].get_raw("Events"), Some("\"Rain"));

        Ok(())
    }

    #[test]
    fn test_read_directory_filters_and_orders() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(
            dir.path().join("Murree_weather_2004_Sep.txt"),
            format!("{}\n2004-9-1,30,25,20,80,60,40\n", HEADER),
        )?;
        std::fs::write(
            dir.path().join("Murree_weather_2004_Aug.txt"),
            format!("{}\n2004-8-1,33,28,23,94,71,42\n", HEADER),
        )?;
        std::fs::write(dir.path().join("notes.md"), "PKT\n2099-1-1\n")?;

        let store = ObservationReader::new().read_directory(dir.path())?;

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].date(), Some("2004-8-1"));
        assert_eq!(store.records()[1].date(), Some("2004-9-1"));

        Ok(())
    }

    #[test]
    fn test_custom_extension_and_delimiter() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(
            dir.path().join("lahore.tsv"),
            "PKT\tMax TemperatureC\n2011-3-1\t26\n",
        )?;

        let store = ObservationReader::new()
            .with_extension(".tsv")
            .with_delimiter(b'\t')
            .read_directory(dir.path())?;

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.records()[0].get(WeatherField::MaxTemperature),
            Some("26")
        );

        Ok(())
    }

    #[test]
    fn test_missing_directory() {
        let err = ObservationReader::new()
            .read_directory(Path::new("/definitely/not/here"))
            .unwrap_err();
        assert!(matches!(err, WeatherError::DirectoryNotFound { .. }));
    }
}
