use crate::data::model::DEFAULT_SAMPLE_RATE;

/// Default cap on the number of stacked panels.
pub const DEFAULT_MAX_CHANNELS: usize = 30;

/// Settings handed to every stage explicitly; nothing reads process state.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Rate reported when the preamble has no sample-frequency line.
    pub default_sample_rate: f64,
    /// `None` plots every classified channel.
    pub max_channels: Option<usize>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_sample_rate: DEFAULT_SAMPLE_RATE,
            max_channels: Some(DEFAULT_MAX_CHANNELS),
        }
    }
}
