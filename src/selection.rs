use serde::Deserialize;

pub const NO_SELECTION: &str = "No region selected.";

/// A time interval picked by dragging in select mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionWindow {
    pub min_time: f64,
    pub max_time: f64,
}

impl SelectionWindow {
    /// Window spanned by two drag endpoints, in either order.
    pub fn from_drag(start: f64, end: f64) -> Self {
        Self {
            min_time: start.min(end),
            max_time: start.max(end),
        }
    }
}

/// Selection payload in the shape the plot host reports:
/// `{"range": {"x": [min, max]}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SelectionEvent {
    #[serde(default)]
    pub range: Option<SelectionRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SelectionRange {
    #[serde(default)]
    pub x: Option<[f64; 2]>,
}

impl SelectionEvent {
    pub fn from_window(window: SelectionWindow) -> Self {
        Self {
            range: Some(SelectionRange {
                x: Some([window.min_time, window.max_time]),
            }),
        }
    }

    /// The usable time range, if the event carries one.
    pub fn window(&self) -> Option<SelectionWindow> {
        let [min_time, max_time] = self.range.as_ref()?.x?;
        if !(min_time.is_finite() && max_time.is_finite()) {
            return None;
        }
        Some(SelectionWindow { min_time, max_time })
    }
}

/// Status line for the current selection.
pub fn describe_selection(event: Option<&SelectionEvent>) -> String {
    match event.and_then(SelectionEvent::window) {
        Some(w) => format!(
            "Selected time window: {:.2}–{:.2} seconds",
            w.min_time, w.max_time
        ),
        None => NO_SELECTION.to_string(),
    }
}

/// Decode a host payload (`null`, `{}`, or a range object) and describe it.
///
/// Only text that is not JSON at all is an error. A payload whose range
/// has the wrong shape carries no usable window.
pub fn describe_json(payload: &str) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let event = match serde_json::from_value::<Option<SelectionEvent>>(value) {
        Ok(event) => event,
        Err(e) => {
            log::debug!("Selection payload has no usable range: {e}");
            None
        }
    };
    Ok(describe_selection(event.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_range_to_two_decimals() {
        let msg = describe_json(r#"{"range": {"x": [1.005, 2.004]}}"#).unwrap();
        assert_eq!(msg, "Selected time window: 1.00–2.00 seconds");
    }

    #[test]
    fn null_and_empty_events_mean_nothing_selected() {
        assert_eq!(describe_json("null").unwrap(), NO_SELECTION);
        assert_eq!(describe_json("{}").unwrap(), NO_SELECTION);
        assert_eq!(describe_json(r#"{"range": {}}"#).unwrap(), NO_SELECTION);
        assert_eq!(describe_selection(None), NO_SELECTION);
    }

    #[test]
    fn ignores_unrelated_keys() {
        let msg = describe_json(r#"{"points": [], "range": {"x": [0.5, 3.25], "y": [0, 1]}}"#)
            .unwrap();
        assert_eq!(msg, "Selected time window: 0.50–3.25 seconds");
    }

    #[test]
    fn drag_endpoints_are_ordered() {
        let w = SelectionWindow::from_drag(4.0, 1.5);
        assert_eq!(w.min_time, 1.5);
        assert_eq!(w.max_time, 4.0);
        let event = SelectionEvent::from_window(w);
        assert_eq!(
            describe_selection(Some(&event)),
            "Selected time window: 1.50–4.00 seconds"
        );
    }

    #[test]
    fn non_finite_range_is_not_usable() {
        let event = SelectionEvent::from_window(SelectionWindow {
            min_time: f64::NAN,
            max_time: 1.0,
        });
        assert_eq!(event.window(), None);
    }

    #[test]
    fn misshapen_range_means_nothing_selected() {
        for payload in [
            r#"{"range": {"x": [1.0]}}"#,
            r#"{"range": {"x": [1.0, 2.0, 3.0]}}"#,
            r#"{"range": {"x": "wide"}}"#,
            r#"{"range": {"x": [null, 2.0]}}"#,
            r#"{"range": {"x": null}}"#,
            r#"{"range": 5}"#,
        ] {
            assert_eq!(describe_json(payload).unwrap(), NO_SELECTION, "{payload}");
        }
    }

    #[test]
    fn text_that_is_not_json_is_an_error() {
        assert!(describe_json("range=1..2").is_err());
    }
}
