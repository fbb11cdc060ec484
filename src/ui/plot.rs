use eframe::egui::{self, Color32, PointerButton, RichText, ScrollArea, Stroke, Ui};
use egui_plot::{HLine, Line, Plot, PlotPoints, VLine};

use crate::color::to_color32;
use crate::layout::DragMode;
use crate::state::AppState;

/// Link group shared by every panel's time axis.
const TIME_AXIS_GROUP: &str = "time_axis";

const SELECTION_COLOR: Color32 = Color32::from_rgb(255, 140, 0);

// ---------------------------------------------------------------------------
// Stacked channel panels (central panel)
// ---------------------------------------------------------------------------

/// Render one panel per channel, time axes locked together.
pub fn channel_panels(ui: &mut Ui, state: &mut AppState) {
    let (Some(recording), Some(spec)) = (&state.recording, &state.plot_spec) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a recording to view channels  (File → Open…)");
        });
        return;
    };

    let time = &recording.dataset.time;
    let mode = state.drag_mode;
    let highlight = state.highlighted_window();
    let panel_height = spec.panel_height as f32;

    // Drag events are collected first and applied once the borrows end.
    let mut drag_start = None;
    let mut drag_to = None;
    let mut drag_done = false;
    let mut clicked = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for panel in &spec.panels {
                let Some(values) = recording.dataset.values(&panel.channel) else {
                    continue;
                };

                egui::Frame::default()
                    .stroke(Stroke::new(1.0, to_color32(&panel.grid_color)))
                    .inner_margin(4.0)
                    .show(ui, |ui: &mut Ui| {
                        ui.label(RichText::new(&panel.title).strong());
                        let mut plot = Plot::new(("channel_panel", panel.row_index))
                            .height(panel_height)
                            .link_axis(TIME_AXIS_GROUP, [true, false])
                            .link_cursor(TIME_AXIS_GROUP, [true, false])
                            .y_axis_label(panel.y_axis_title.as_str())
                            .allow_scroll([true, false])
                            .allow_zoom([true, false])
                            .show_grid(true);
                        if let Some(title) = &panel.x_axis.title {
                            plot = plot.x_axis_label(title.as_str());
                        }
                        plot = match mode {
                            DragMode::Pan => plot.allow_drag([true, false]).allow_boxed_zoom(false),
                            DragMode::Zoom => plot
                                .allow_drag(false)
                                .allow_boxed_zoom(true)
                                .boxed_zoom_pointer_button(PointerButton::Primary),
                            DragMode::Select => plot.allow_drag(false).allow_boxed_zoom(false),
                        };

                        let response = plot.show(ui, |plot_ui| {
                            let points: PlotPoints = time
                                .iter()
                                .zip(values)
                                .map(|(&t, &v)| [t, v])
                                .collect();
                            plot_ui.line(
                                Line::new(points)
                                    .name(&panel.channel)
                                    .color(to_color32(&panel.trace_color))
                                    .width(1.0),
                            );
                            plot_ui.hline(
                                HLine::new(0.0)
                                    .color(to_color32(&panel.zero_line_color))
                                    .width(0.5),
                            );
                            if let Some(w) = highlight {
                                for x in [w.min_time, w.max_time] {
                                    plot_ui.vline(
                                        VLine::new(x).color(SELECTION_COLOR).width(1.5),
                                    );
                                }
                            }
                            plot_ui.pointer_coordinate()
                        });

                        if mode != DragMode::Select {
                            return;
                        }
                        let pointer_time = response.inner.map(|p| p.x);
                        if response.response.drag_started() {
                            drag_start = pointer_time;
                        } else if response.response.dragged() {
                            if let Some(t) = pointer_time {
                                drag_to = Some(t);
                            }
                        }
                        if response.response.drag_stopped() {
                            drag_done = true;
                        }
                        if response.response.clicked() {
                            clicked = true;
                        }
                    });
            }
        });

    if let Some(t) = drag_start {
        state.begin_selection(t);
    }
    if let Some(t) = drag_to {
        state.update_selection(t);
    }
    if drag_done {
        state.finish_selection();
    } else if clicked {
        state.clear_selection();
    }
}
