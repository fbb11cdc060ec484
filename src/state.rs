use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ExplorerConfig;
use crate::data::loader::load_file;
use crate::data::model::Recording;
use crate::layout::{build_plot_spec, DragMode, PlotSpec};
use crate::selection::{describe_selection, SelectionEvent, SelectionWindow};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ExplorerConfig,

    /// Loaded recording (None until a file is opened).
    pub recording: Option<Recording>,

    /// Layout built once per load and reused on every frame.
    pub plot_spec: Option<PlotSpec>,

    pub drag_mode: DragMode,

    /// Start of an in-progress select drag, in seconds.
    pub drag_anchor: Option<f64>,
    /// Latest pointer time of an in-progress select drag.
    pub drag_current: Option<f64>,

    /// Last completed selection.
    pub selection: Option<SelectionWindow>,

    /// Text shown in the status area.
    pub selection_status: String,

    /// Error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            recording: None,
            plot_spec: None,
            drag_mode: DragMode::default(),
            drag_anchor: None,
            drag_current: None,
            selection: None,
            selection_status: describe_selection(None),
            status_message: None,
        }
    }

    /// Build the layout for a freshly loaded recording and make it current.
    /// On failure the previous recording stays in place.
    pub fn set_recording(&mut self, recording: Recording) -> Result<()> {
        let spec = build_plot_spec(&recording, self.config.max_channels)
            .with_context(|| format!("laying out {}", recording.source_name))?;
        self.drag_mode = spec.default_drag_mode;
        self.plot_spec = Some(spec);
        self.recording = Some(recording);
        self.status_message = None;
        self.clear_selection();
        Ok(())
    }

    /// Load a file from disk and make it current.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let recording = load_file(path, &self.config)
            .with_context(|| format!("loading {}", path.display()))?;
        self.set_recording(recording)
    }

    pub fn set_drag_mode(&mut self, mode: DragMode) {
        self.drag_mode = mode;
        self.drag_anchor = None;
        self.drag_current = None;
    }

    pub fn begin_selection(&mut self, time: f64) {
        self.drag_anchor = Some(time);
        self.drag_current = Some(time);
    }

    pub fn update_selection(&mut self, time: f64) {
        if self.drag_anchor.is_some() {
            self.drag_current = Some(time);
        }
    }

    /// Close an in-progress drag and report it.
    pub fn finish_selection(&mut self) {
        let (Some(start), Some(end)) = (self.drag_anchor.take(), self.drag_current.take()) else {
            return;
        };
        let window = SelectionWindow::from_drag(start, end);
        self.selection = Some(window);
        self.selection_status = describe_selection(Some(&SelectionEvent::from_window(window)));
        log::debug!("{}", self.selection_status);
    }

    pub fn clear_selection(&mut self) {
        self.drag_anchor = None;
        self.drag_current = None;
        self.selection = None;
        self.selection_status = describe_selection(None);
    }

    /// The window to highlight: the drag in progress, else the last one.
    pub fn highlighted_window(&self) -> Option<SelectionWindow> {
        match (self.drag_anchor, self.drag_current) {
            (Some(start), Some(end)) => Some(SelectionWindow::from_drag(start, end)),
            _ => self.selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_recording;
    use crate::selection::NO_SELECTION;

    fn state_with(text: &str) -> Result<AppState> {
        let mut state = AppState::new(ExplorerConfig::default());
        let rec = parse_recording(text, "mem.csv", &state.config)?;
        state.set_recording(rec)?;
        Ok(state)
    }

    #[test]
    fn selection_round_trip_updates_status() {
        let mut state = state_with("Time,C1\n0,1\n1,2\n").unwrap();
        assert_eq!(state.selection_status, NO_SELECTION);

        state.set_drag_mode(DragMode::Select);
        state.begin_selection(2.5);
        state.update_selection(0.25);
        assert_eq!(
            state.highlighted_window(),
            Some(SelectionWindow::from_drag(0.25, 2.5))
        );
        state.finish_selection();
        assert_eq!(state.selection_status, "Selected time window: 0.25–2.50 seconds");

        state.clear_selection();
        assert_eq!(state.selection_status, NO_SELECTION);
        assert_eq!(state.highlighted_window(), None);
    }

    #[test]
    fn update_without_anchor_is_ignored() {
        let mut state = AppState::new(ExplorerConfig::default());
        state.update_selection(1.0);
        state.finish_selection();
        assert_eq!(state.selection, None);
    }

    #[test]
    fn empty_channel_set_keeps_previous_recording() {
        let mut state = state_with("Time,C1\n0,1\n").unwrap();
        let bad = parse_recording("Time,Trigger,Comments\n0,1,2\n", "bad.csv", &state.config)
            .unwrap();
        let err = state.set_recording(bad).unwrap_err();
        assert!(format!("{err:#}").contains("no channels to plot"));
        assert_eq!(
            state.recording.as_ref().map(|r| r.source_name.as_str()),
            Some("mem.csv")
        );
    }

    #[test]
    fn plot_spec_follows_config_cap() {
        let mut state = AppState::new(ExplorerConfig {
            max_channels: Some(1),
            ..ExplorerConfig::default()
        });
        let rec = parse_recording("Time,A,B\n0,1,2\n", "mem.csv", &state.config).unwrap();
        state.set_recording(rec).unwrap();
        assert_eq!(state.plot_spec.as_ref().map(PlotSpec::len), Some(1));
    }
}
