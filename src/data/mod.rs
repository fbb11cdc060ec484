/// Data layer: preamble scanning, table loading and channel classification.
///
/// Architecture:
/// ```text
///   raw text lines
///        │
///        ▼
///   ┌──────────┐
///   │ scanner  │  sample rate + header line index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  table below the header → TimeSeriesDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify │  exclusion + rule table → EEG / ECG / Reference
///   └──────────┘
/// ```

pub mod classify;
pub mod loader;
pub mod model;
pub mod scanner;
