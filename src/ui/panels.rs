use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::to_color32;
use crate::layout::DragMode;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – recording details
// ---------------------------------------------------------------------------

/// Render the recording metadata and the plotted channel table.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Recording");
    ui.separator();

    let (Some(recording), Some(spec)) = (&state.recording, &state.plot_spec) else {
        ui.label("No recording loaded.");
        return;
    };

    ui.label(format!("Sample rate: {} Hz", recording.metadata.sample_rate));
    ui.label(format!("Rows: {}", recording.dataset.len()));
    if let Some((start, end)) = recording.dataset.time_span() {
        ui.label(format!("Span: {start:.3} – {end:.3} s"));
    }

    if !recording.metadata.entries.is_empty() {
        egui::CollapsingHeader::new(RichText::new("Header").strong())
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                for (key, value) in &recording.metadata.entries {
                    ui.label(format!("{key}: {value}"));
                }
            });
    }

    ui.separator();
    ui.strong(format!(
        "Channels ({} of {})",
        spec.len(),
        recording.channels.len()
    ));

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                header.col(|ui| {
                    ui.strong("Channel");
                });
                header.col(|ui| {
                    ui.strong("Type");
                });
            })
            .body(|body| {
                body.rows(18.0, spec.panels.len(), |mut row| {
                    let panel = &spec.panels[row.index()];
                    row.col(|ui| {
                        ui.label(panel.row_index.to_string());
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(&panel.channel).color(to_color32(&panel.trace_color)),
                        );
                    });
                    row.col(|ui| {
                        ui.label(panel.category.to_string());
                    });
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu, drag-mode buttons and plot title.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let modes = state
            .plot_spec
            .as_ref()
            .map(|spec| spec.drag_modes.clone())
            .unwrap_or_else(|| DragMode::ALL.to_vec());
        for mode in modes {
            if ui
                .selectable_label(state.drag_mode == mode, mode.label())
                .clicked()
            {
                state.set_drag_mode(mode);
            }
        }

        ui.separator();

        if let Some(spec) = &state.plot_spec {
            ui.strong(&spec.title);
            ui.label(RichText::new(&spec.subtitle).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – selection readout
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(&state.selection_status);
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open recording")
        .add_filter("Recordings", &["csv", "txt", "tsv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.open(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
