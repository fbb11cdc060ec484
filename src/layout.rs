//! Panel layout for a loaded recording.
//!
//! One vertically stacked panel per plotted channel. Every panel after the
//! first tracks the first panel's time domain; vertical axes scale on their
//! own. The resulting [`PlotSpec`] holds styling only: trace samples are
//! looked up in the dataset by channel name when drawing.

use serde::Serialize;

use crate::color::{axis_colors, trace_color};
use crate::data::model::{ChannelCategory, Recording};
use crate::error::ExplorerError;

/// Height given to every panel, in pixels.
pub const PANEL_HEIGHT: u32 = 150;
/// Room above the panels for the title and mode buttons.
pub const HEADER_HEIGHT: u32 = 100;
pub const X_AXIS_TITLE: &str = "Time (seconds)";

/// Total canvas height for `n_channels` stacked panels.
pub fn canvas_height(n_channels: usize) -> u32 {
    PANEL_HEIGHT * n_channels as u32 + HEADER_HEIGHT
}

// ---------------------------------------------------------------------------
// Interaction modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    #[default]
    Pan,
    Zoom,
    Select,
}

impl DragMode {
    pub const ALL: [DragMode; 3] = [DragMode::Pan, DragMode::Zoom, DragMode::Select];

    pub fn label(self) -> &'static str {
        match self {
            DragMode::Pan => "Pan",
            DragMode::Zoom => "Zoom",
            DragMode::Select => "Select",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectDirection {
    Horizontal,
}

// ---------------------------------------------------------------------------
// Spec types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxisSpec {
    /// Row whose x-domain this axis follows; `None` for the reference row.
    pub matches: Option<usize>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSpec {
    pub channel: String,
    pub category: ChannelCategory,
    /// Category suffix such as `(μV) - EEG`.
    pub unit_label: String,
    /// Panel heading: channel name followed by the unit label.
    pub title: String,
    pub y_axis_title: String,
    pub grid_color: String,
    pub zero_line_color: String,
    pub trace_color: String,
    /// 1-based position from the top.
    pub row_index: usize,
    pub x_axis: XAxisSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    pub title: String,
    pub subtitle: String,
    pub height: u32,
    pub panel_height: u32,
    pub header_height: u32,
    pub default_drag_mode: DragMode,
    pub drag_modes: Vec<DragMode>,
    /// Applies in [`DragMode::Select`] only.
    pub select_direction: SelectDirection,
    pub panels: Vec<PanelSpec>,
}

impl PlotSpec {
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

fn category_labels(category: ChannelCategory) -> (&'static str, &'static str) {
    match category {
        ChannelCategory::Ecg => ("(mV) - ECG", "mV"),
        ChannelCategory::Reference => ("(Reference)", "μV (Ref)"),
        ChannelCategory::Eeg => ("(μV) - EEG", "μV"),
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Lay out the first `max_channels` channels (EEG, then ECG, then Reference)
/// of a recording. `None` plots them all.
///
/// Pure: building twice from the same recording yields the same spec.
pub fn build_plot_spec(
    recording: &Recording,
    max_channels: Option<usize>,
) -> Result<PlotSpec, ExplorerError> {
    let mut selected = recording.channels.ordered();
    if let Some(cap) = max_channels {
        selected.truncate(cap);
    }
    selected.retain(|ch| {
        let present = recording.dataset.contains(&ch.name);
        if !present {
            log::warn!("Channel {:?} has no data column, skipping", ch.name);
        }
        present
    });
    if selected.is_empty() {
        return Err(ExplorerError::EmptyChannelSet);
    }

    let n = selected.len();
    let panels: Vec<PanelSpec> = selected
        .into_iter()
        .enumerate()
        .map(|(i, ch)| {
            let row_index = i + 1;
            let (unit_label, y_axis_title) = category_labels(ch.category);
            let colors = axis_colors(ch.category);
            PanelSpec {
                title: format!("{} {unit_label}", ch.name),
                channel: ch.name,
                category: ch.category,
                unit_label: unit_label.to_string(),
                y_axis_title: y_axis_title.to_string(),
                grid_color: colors.grid.to_string(),
                zero_line_color: colors.zero_line.to_string(),
                trace_color: trace_color(row_index).to_string(),
                row_index,
                x_axis: XAxisSpec {
                    matches: (row_index > 1).then_some(1),
                    title: (row_index == n).then(|| X_AXIS_TITLE.to_string()),
                },
            }
        })
        .collect();

    let spec = PlotSpec {
        title: "EEG/ECG Multi-Channel".to_string(),
        subtitle: format!(
            "File: {} | {} channels | {:?}Hz",
            recording.source_name,
            recording.channels.len(),
            recording.metadata.sample_rate
        ),
        height: canvas_height(n),
        panel_height: PANEL_HEIGHT,
        header_height: HEADER_HEIGHT,
        default_drag_mode: DragMode::default(),
        drag_modes: DragMode::ALL.to_vec(),
        select_direction: SelectDirection::Horizontal,
        panels,
    };
    log::info!("Built layout: {} panels, {} px tall", spec.len(), spec.height);
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::classify_columns;
    use crate::data::model::{ParsedMetadata, TimeSeriesDataset};

    fn recording(columns: &[&str]) -> Recording {
        let dataset = TimeSeriesDataset::from_columns(
            vec![0.0, 1.0],
            columns
                .iter()
                .map(|c| (c.to_string(), vec![0.0, 1.0]))
                .collect(),
        );
        Recording {
            source_name: "test.csv".into(),
            metadata: ParsedMetadata::with_sample_rate(256.0),
            channels: classify_columns(&dataset.column_names),
            dataset,
        }
    }

    #[test]
    fn height_is_linear_in_panel_count() {
        assert_eq!(canvas_height(5), 850);
        let spec = build_plot_spec(&recording(&["A", "B", "C", "D", "E"]), None).unwrap();
        assert_eq!(spec.height, 850);
    }

    #[test]
    fn cap_keeps_first_channels_in_category_order() {
        let mut names: Vec<String> = (0..30).map(|i| format!("E{i}")).collect();
        names.extend((0..5).map(|i| format!("CM{i}")));
        names.insert(3, "X1_LEOG".to_string());
        names.extend((0..4).map(|i| format!("F{i}")));
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let rec = recording(&refs);
        assert_eq!(rec.channels.len(), 40);

        let spec = build_plot_spec(&rec, Some(30)).unwrap();
        assert_eq!(spec.len(), 30);
        let expected: Vec<String> = rec
            .channels
            .ordered()
            .into_iter()
            .take(30)
            .map(|c| c.name)
            .collect();
        let got: Vec<String> = spec.panels.iter().map(|p| p.channel.clone()).collect();
        assert_eq!(got, expected);
        assert!(spec.panels.iter().all(|p| p.category == ChannelCategory::Eeg));
    }

    #[test]
    fn uncapped_plots_everything() {
        let spec = build_plot_spec(&recording(&["A", "X2_REOG", "CM"]), None).unwrap();
        let names: Vec<&str> = spec.panels.iter().map(|p| p.channel.as_str()).collect();
        assert_eq!(names, ["A", "X2_REOG", "CM"]);
    }

    #[test]
    fn panels_carry_category_styling() {
        let spec = build_plot_spec(&recording(&["CM_ref", "Fp1", "X1_LEOG"]), Some(30)).unwrap();
        let fp1 = &spec.panels[0];
        assert_eq!(fp1.title, "Fp1 (μV) - EEG");
        assert_eq!(fp1.y_axis_title, "μV");
        assert_eq!(fp1.grid_color, "#ADD8E6");
        let eog = &spec.panels[1];
        assert_eq!(eog.unit_label, "(mV) - ECG");
        assert_eq!(eog.zero_line_color, "#000000");
        let cm = &spec.panels[2];
        assert_eq!(cm.title, "CM_ref (Reference)");
        assert_eq!(cm.grid_color, "#D3D3D3");
    }

    #[test]
    fn x_axes_follow_first_row_and_only_last_is_titled() {
        let spec = build_plot_spec(&recording(&["A", "B", "C"]), None).unwrap();
        let rows: Vec<usize> = spec.panels.iter().map(|p| p.row_index).collect();
        assert_eq!(rows, [1, 2, 3]);
        assert_eq!(spec.panels[0].x_axis.matches, None);
        assert_eq!(spec.panels[1].x_axis.matches, Some(1));
        assert_eq!(spec.panels[2].x_axis.matches, Some(1));
        assert_eq!(spec.panels[0].x_axis.title, None);
        assert_eq!(spec.panels[2].x_axis.title.as_deref(), Some(X_AXIS_TITLE));
    }

    #[test]
    fn colors_are_deterministic() {
        let rec = recording(&["A", "B", "C", "D"]);
        let first = build_plot_spec(&rec, None).unwrap();
        let second = build_plot_spec(&rec, None).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.panels[0].trace_color, "#E41A1C");
        assert_eq!(first.panels[1].trace_color, "#377EB8");
    }

    #[test]
    fn only_excluded_columns_is_fatal() {
        let err = build_plot_spec(&recording(&["Trigger", "Comments", "ADC_Status"]), None)
            .unwrap_err();
        assert!(matches!(err, ExplorerError::EmptyChannelSet));
    }

    #[test]
    fn zero_cap_is_fatal() {
        let err = build_plot_spec(&recording(&["A"]), Some(0)).unwrap_err();
        assert!(matches!(err, ExplorerError::EmptyChannelSet));
    }

    #[test]
    fn declares_drag_modes_and_subtitle() {
        let spec = build_plot_spec(&recording(&["A", "Event"]), None).unwrap();
        assert_eq!(spec.default_drag_mode, DragMode::Pan);
        assert_eq!(spec.drag_modes, DragMode::ALL);
        assert_eq!(spec.select_direction, SelectDirection::Horizontal);
        assert_eq!(spec.subtitle, "File: test.csv | 1 channels | 256.0Hz");
    }

    #[test]
    fn serializes_modes_lowercase() {
        let spec = build_plot_spec(&recording(&["A"]), None).unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["default_drag_mode"], "pan");
        assert_eq!(json["drag_modes"][2], "select");
        assert_eq!(json["panels"][0]["category"], "eeg");
    }
}
