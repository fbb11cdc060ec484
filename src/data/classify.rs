use super::model::{ChannelCategory, ClassifiedChannels};

// ---------------------------------------------------------------------------
// Exclusion: columns that never carry a signal
// ---------------------------------------------------------------------------

/// Name fragments of trigger, status, sequence, event and comment columns.
pub const EXCLUDED_FRAGMENTS: &[&str] = &[
    "Trigger",
    "Time_Offset",
    "ADC_Status",
    "ADC_Sequence",
    "Event",
    "X3_",
    "Comments",
    "CMF",
];

/// Whether a column is dropped before classification.
pub fn is_excluded(name: &str) -> bool {
    let name = name.trim();
    name.is_empty() || EXCLUDED_FRAGMENTS.iter().any(|frag| name.contains(frag))
}

// ---------------------------------------------------------------------------
// Classification rules
// ---------------------------------------------------------------------------

/// One row of the rule table: any marker contained in the name selects the
/// category. Case-sensitive.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub markers: &'static [&'static str],
    pub category: ChannelCategory,
}

impl ClassificationRule {
    pub fn matches(&self, name: &str) -> bool {
        self.markers.iter().any(|marker| name.contains(marker))
    }
}

/// Evaluated top-down, first match wins. Unmatched names are EEG.
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        markers: &["X1_LEOG", "X2_REOG"],
        category: ChannelCategory::Ecg,
    },
    ClassificationRule {
        markers: &["CM"],
        category: ChannelCategory::Reference,
    },
];

/// Category of a single retained column name.
pub fn categorize(name: &str) -> ChannelCategory {
    RULES
        .iter()
        .find(|rule| rule.matches(name))
        .map(|rule| rule.category)
        .unwrap_or(ChannelCategory::Eeg)
}

/// Split column names (time column already removed) into category lists,
/// dropping excluded columns and keeping column order within each list.
pub fn classify_columns<S: AsRef<str>>(columns: &[S]) -> ClassifiedChannels {
    let mut out = ClassifiedChannels::default();
    for name in columns.iter().map(AsRef::as_ref) {
        if is_excluded(name) {
            log::debug!("Excluding non-signal column {name:?}");
            continue;
        }
        let target = match categorize(name) {
            ChannelCategory::Eeg => &mut out.eeg,
            ChannelCategory::Ecg => &mut out.ecg,
            ChannelCategory::Reference => &mut out.reference,
        };
        target.push(name.to_string());
    }
    out
}
