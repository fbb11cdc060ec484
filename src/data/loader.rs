use std::collections::HashSet;
use std::path::Path;

use crate::config::ExplorerConfig;
use crate::error::ExplorerError;

use super::classify::classify_columns;
use super::model::{Recording, TimeSeriesDataset};
use super::scanner::scan_lines;

/// Name of the time column after normalization.
pub const TIME_COLUMN: &str = "Time";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a recording from disk and classify its channels.
pub fn load_file(path: &Path, config: &ExplorerConfig) -> Result<Recording, ExplorerError> {
    let text = std::fs::read_to_string(path).map_err(|source| ExplorerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_recording(&text, &source_name, config)
}

/// Scan the preamble, load the table below the header and classify the
/// columns. No partial recording is returned on failure.
pub fn parse_recording(
    text: &str,
    source_name: &str,
    config: &ExplorerConfig,
) -> Result<Recording, ExplorerError> {
    let lines: Vec<&str> = text.lines().collect();
    let scan = scan_lines(lines.iter().copied(), config.default_sample_rate)?;
    let dataset = load_table(&lines[scan.header_line..])?;
    let channels = classify_columns(&dataset.column_names);

    log::info!(
        "Loaded {source_name}: {} rows, {} columns, {} signal channels at {} Hz",
        dataset.len(),
        dataset.column_names.len(),
        channels.len(),
        scan.metadata.sample_rate
    );

    Ok(Recording {
        source_name: source_name.to_string(),
        metadata: scan.metadata,
        dataset,
        channels,
    })
}

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Strip `**` emphasis markers, turn `:` into `_` and trim.
pub fn normalize_column_name(raw: &str) -> String {
    raw.replace("**", "").replace(':', "_").trim().to_string()
}

/// Repeated names get `.1`, `.2`, … suffixes so every column stays addressable.
/// Blank names stay blank so classification still drops them.
fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    names
        .into_iter()
        .map(|name| {
            if name.is_empty() {
                return name;
            }
            let mut out = name.clone();
            let mut suffix = 1;
            while taken.contains(&out) {
                out = format!("{name}.{suffix}");
                suffix += 1;
            }
            taken.insert(out.clone());
            out
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Table body
// ---------------------------------------------------------------------------

/// Parse the header line and the rows below it into a dataset.
///
/// `lines[0]` must be the header. The delimiter follows the header: tab when
/// it begins `Time\t`, comma otherwise.
pub fn load_table(lines: &[&str]) -> Result<TimeSeriesDataset, ExplorerError> {
    let header = lines
        .first()
        .ok_or_else(|| ExplorerError::format("no header found"))?;
    let delimiter = if header.trim_start().starts_with("Time\t") {
        b'\t'
    } else {
        b','
    };
    let body = lines.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ExplorerError::format(format!("reading header: {e}")))?;
    let names = dedupe_names(headers.iter().map(normalize_column_name).collect());

    let time_idx = names
        .iter()
        .position(|n| n == TIME_COLUMN)
        .ok_or_else(|| ExplorerError::format("header has no 'Time' column"))?;

    let mut time = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    let mut non_numeric = vec![0usize; names.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            ExplorerError::format(format!("row {}: {e}", row_no + 1))
        })?;

        for (col_idx, cell) in record.iter().enumerate() {
            let cell = cell.trim();
            if col_idx == time_idx {
                let t = cell.parse::<f64>().map_err(|_| {
                    ExplorerError::format(format!(
                        "row {}: time value {cell:?} is not a number",
                        row_no + 1
                    ))
                })?;
                time.push(t);
            } else {
                let value = match cell.parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => {
                        if !cell.is_empty() {
                            non_numeric[col_idx] += 1;
                        }
                        f64::NAN
                    }
                };
                columns[col_idx].push(value);
            }
        }
    }

    for (name, count) in names.iter().zip(&non_numeric) {
        if *count > 0 {
            log::warn!("Column {name:?}: {count} non-numeric cells read as NaN");
        }
    }
    if time.windows(2).any(|w| w[1] < w[0]) {
        log::warn!("Time column is not monotonically non-decreasing");
    }

    let columns = names
        .into_iter()
        .zip(columns)
        .enumerate()
        .filter(|(idx, _)| *idx != time_idx)
        .map(|(_, col)| col)
        .collect();

    Ok(TimeSeriesDataset::from_columns(time, columns))
}
