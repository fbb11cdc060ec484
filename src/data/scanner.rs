use crate::error::ExplorerError;

use super::model::ParsedMetadata;

/// Label of the preamble line carrying the sample rate.
pub const SAMPLE_FREQUENCY_LABEL: &str = "Sample_Frequency_(Hz)";

/// Outcome of scanning the raw lines once.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Zero-based index of the `Time` header line.
    pub header_line: usize,
    pub metadata: ParsedMetadata,
}

/// Whether a line is the table header: `Time` followed by a comma or tab.
pub fn is_header_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("Time,") || trimmed.starts_with("Time\t")
}

/// Walk the preamble in a single pass, collecting the sample rate and
/// stopping at the first header line.
///
/// A sample-frequency line whose value does not parse leaves the previous
/// rate in place. Running out of lines before a header is fatal.
pub fn scan_lines<'a, I>(lines: I, default_sample_rate: f64) -> Result<ScanResult, ExplorerError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut metadata = ParsedMetadata::with_sample_rate(default_sample_rate);

    for (idx, line) in lines.into_iter().enumerate() {
        if is_header_line(line) {
            log::debug!("Header found on line {idx}");
            return Ok(ScanResult {
                header_line: idx,
                metadata,
            });
        }

        let trimmed = line.trim();
        if trimmed.contains(SAMPLE_FREQUENCY_LABEL) {
            match trimmed.split(',').nth(1).map(|v| v.trim().parse::<f64>()) {
                Some(Ok(rate)) => metadata.sample_rate = rate,
                _ => log::debug!("Ignoring unreadable sample frequency on line {idx}: {trimmed:?}"),
            }
        }

        if let Some((key, value)) = trimmed.split_once(',') {
            let key = key.trim();
            if !key.is_empty() {
                metadata
                    .entries
                    .push((key.to_string(), value.trim_end_matches(',').trim().to_string()));
            }
        }
    }

    Err(ExplorerError::format(
        "no header found: expected a line starting with 'Time'",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DEFAULT_SAMPLE_RATE;

    #[test]
    fn finds_header_and_sample_rate() {
        let lines = ["junk", "Sample_Frequency_(Hz),256", "Time,C1,C2,Trigger", "0,1,2,3"];
        let scan = scan_lines(lines, DEFAULT_SAMPLE_RATE).unwrap();
        assert_eq!(scan.header_line, 2);
        assert_eq!(scan.metadata.sample_rate, 256.0);
    }

    #[test]
    fn defaults_sample_rate_without_frequency_line() {
        let lines = ["Subject,42", "Time,C1", "0,1"];
        let scan = scan_lines(lines, DEFAULT_SAMPLE_RATE).unwrap();
        assert_eq!(scan.header_line, 1);
        assert_eq!(scan.metadata.sample_rate, 200.0);
    }

    #[test]
    fn malformed_frequency_keeps_previous_rate() {
        let lines = [
            "Sample_Frequency_(Hz),300",
            "Sample_Frequency_(Hz),abc",
            "Sample_Frequency_(Hz)",
            "Time,C1",
        ];
        let scan = scan_lines(lines, DEFAULT_SAMPLE_RATE).unwrap();
        assert_eq!(scan.metadata.sample_rate, 300.0);
    }

    #[test]
    fn accepts_tab_delimited_header() {
        let lines = ["  Time\tC1\tC2", "0\t1\t2"];
        assert_eq!(scan_lines(lines, 200.0).unwrap().header_line, 0);
    }

    #[test]
    fn first_header_wins() {
        let lines = ["Time,A", "Time,B"];
        assert_eq!(scan_lines(lines, 200.0).unwrap().header_line, 0);
    }

    #[test]
    fn rejects_time_prefix_without_delimiter() {
        assert!(!is_header_line("Timestamp,1"));
        assert!(!is_header_line("Time"));
        assert!(is_header_line(" Time,C1 "));
    }

    #[test]
    fn missing_header_is_format_error() {
        let err = scan_lines(["a,b", "1,2"], 200.0).unwrap_err();
        assert!(matches!(err, ExplorerError::Format(_)));
        assert!(err.to_string().contains("no header found"));
    }

    #[test]
    fn collects_preamble_entries() {
        let lines = ["Device,Headset 7,", "Sample_Frequency_(Hz),256", "Time,C1"];
        let scan = scan_lines(lines, 200.0).unwrap();
        assert_eq!(
            scan.metadata.entries,
            vec![
                ("Device".to_string(), "Headset 7".to_string()),
                ("Sample_Frequency_(Hz)".to_string(), "256".to_string()),
            ]
        );
    }
}
