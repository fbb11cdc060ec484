use eframe::egui::Color32;
use palette::Srgb;

use crate::data::model::ChannelCategory;

// ---------------------------------------------------------------------------
// Trace palette
// ---------------------------------------------------------------------------

/// Qualitative trace colours (Set1 followed by Set2), indexed by panel row.
pub const TRACE_PALETTE: [&str; 17] = [
    "#E41A1C", "#377EB8", "#4DAF4A", "#984EA3", "#FF7F00", "#FFFF33", "#A65628", "#F781BF",
    "#999999", "#66C2A5", "#FC8D62", "#8DA0CB", "#E78AC3", "#A6D854", "#FFD92F", "#E5C494",
    "#B3B3B3",
];

/// Trace colour for a 1-based panel row; wraps around the palette.
pub fn trace_color(row_index: usize) -> &'static str {
    TRACE_PALETTE[row_index.saturating_sub(1) % TRACE_PALETTE.len()]
}

// ---------------------------------------------------------------------------
// Per-category axis styling
// ---------------------------------------------------------------------------

/// Grid and zero-line colours fixed by channel category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisColors {
    pub grid: &'static str,
    pub zero_line: &'static str,
}

pub fn axis_colors(category: ChannelCategory) -> AxisColors {
    match category {
        ChannelCategory::Eeg => AxisColors {
            grid: "#ADD8E6",
            zero_line: "#0000FF",
        },
        ChannelCategory::Ecg => AxisColors {
            grid: "#F08080",
            zero_line: "#000000",
        },
        ChannelCategory::Reference => AxisColors {
            grid: "#D3D3D3",
            zero_line: "#000000",
        },
    }
}

// ---------------------------------------------------------------------------
// Hex → Color32
// ---------------------------------------------------------------------------

/// Convert a `#RRGGBB` string for egui, falling back to grey.
pub fn to_color32(hex: &str) -> Color32 {
    match hex.parse::<Srgb<u8>>() {
        Ok(rgb) => Color32::from_rgb(rgb.red, rgb.green, rgb.blue),
        Err(_) => {
            log::warn!("Unrecognised colour {hex:?}");
            Color32::GRAY
        }
    }
}
