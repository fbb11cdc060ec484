use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Sample rate assumed when the preamble carries no sample-frequency line.
pub const DEFAULT_SAMPLE_RATE: f64 = 200.0;

// ---------------------------------------------------------------------------
// ParsedMetadata – the advisory preamble
// ---------------------------------------------------------------------------

/// Values pulled from the lines preceding the `Time` header.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMetadata {
    /// Samples per second, for display only.
    pub sample_rate: f64,
    /// `key,value` pairs found in the preamble, in file order.
    pub entries: Vec<(String, String)>,
}

impl ParsedMetadata {
    pub fn with_sample_rate(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            entries: Vec::new(),
        }
    }
}

impl Default for ParsedMetadata {
    fn default() -> Self {
        Self::with_sample_rate(DEFAULT_SAMPLE_RATE)
    }
}

// ---------------------------------------------------------------------------
// Channel categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelCategory {
    Eeg,
    Ecg,
    Reference,
}

impl fmt::Display for ChannelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelCategory::Eeg => write!(f, "EEG"),
            ChannelCategory::Ecg => write!(f, "ECG"),
            ChannelCategory::Reference => write!(f, "Reference"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub category: ChannelCategory,
}

/// Retained channels split by category, each list in original column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedChannels {
    pub eeg: Vec<String>,
    pub ecg: Vec<String>,
    pub reference: Vec<String>,
}

impl ClassifiedChannels {
    /// EEG, then ECG, then Reference. Concatenated, never re-sorted.
    pub fn ordered(&self) -> Vec<Channel> {
        let tag = |names: &[String], category: ChannelCategory| {
            names
                .iter()
                .map(move |name| Channel {
                    name: name.clone(),
                    category,
                })
                .collect::<Vec<_>>()
        };
        let mut out = tag(&self.eeg, ChannelCategory::Eeg);
        out.extend(tag(&self.ecg, ChannelCategory::Ecg));
        out.extend(tag(&self.reference, ChannelCategory::Reference));
        out
    }

    pub fn len(&self) -> usize {
        self.eeg.len() + self.ecg.len() + self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// TimeSeriesDataset – the tabular body
// ---------------------------------------------------------------------------

/// Time vector plus one value vector per normalized column.
///
/// Every column has exactly `time.len()` samples; the loader rejects
/// non-rectangular bodies. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct TimeSeriesDataset {
    pub time: Vec<f64>,
    /// Normalized column names in header order, `Time` excluded.
    pub column_names: Vec<String>,
    values: BTreeMap<String, Vec<f64>>,
}

impl TimeSeriesDataset {
    /// Assemble a dataset from `(name, samples)` columns in header order.
    pub fn from_columns(time: Vec<f64>, columns: Vec<(String, Vec<f64>)>) -> Self {
        let column_names = columns.iter().map(|(name, _)| name.clone()).collect();
        let values = columns.into_iter().collect();
        Self {
            time,
            column_names,
            values,
        }
    }

    pub fn values(&self, column: &str) -> Option<&[f64]> {
        self.values.get(column).map(Vec::as_slice)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// First and last time stamp, if any rows were loaded.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((*self.time.first()?, *self.time.last()?))
    }
}

// ---------------------------------------------------------------------------
// Recording – one loaded file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Recording {
    /// File name shown in the plot subtitle.
    pub source_name: String,
    pub metadata: ParsedMetadata,
    pub dataset: TimeSeriesDataset,
    pub channels: ClassifiedChannels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_concatenates_categories() {
        let channels = ClassifiedChannels {
            eeg: vec!["Fp1".into(), "Fp2".into()],
            ecg: vec!["X1_LEOG".into()],
            reference: vec!["CM".into()],
        };
        let ordered = channels.ordered();
        let names: Vec<&str> = ordered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Fp1", "Fp2", "X1_LEOG", "CM"]);
        assert_eq!(ordered[2].category, ChannelCategory::Ecg);
        assert_eq!(ordered[3].category, ChannelCategory::Reference);
        assert_eq!(channels.len(), 4);
    }

    #[test]
    fn dataset_lookup_and_span() {
        let ds = TimeSeriesDataset::from_columns(
            vec![0.0, 0.5, 1.0],
            vec![("C1".into(), vec![1.0, 2.0, 3.0])],
        );
        assert_eq!(ds.values("C1"), Some(&[1.0, 2.0, 3.0][..]));
        assert!(ds.values("C2").is_none());
        assert_eq!(ds.time_span(), Some((0.0, 1.0)));
        assert_eq!(ds.len(), 3);
    }
}
