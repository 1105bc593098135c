//! Formatting utilities for terminal output

use crate::core::CategoryIndex;
use colored::Color;

/// Label for each category colour, easiest first
pub const DIFFICULTY: [&str; 4] = ["Straightforward", "Moderate", "Challenging", "Tricky"];

/// Category palette in definition order: peach, gray, orange, navy
///
/// Matches the share-text emoji for the same index (🟨 ⬜ 🟧 🟦).
pub const CATEGORY_RGB: [(u8, u8, u8); 4] = [
    (0xF9, 0xDC, 0xBE),
    (0xC9, 0xCB, 0xD2),
    (0xE5, 0x72, 0x00),
    (0x23, 0x2D, 0x4B),
];

/// RGB fill for a category
#[must_use]
pub const fn category_rgb(index: CategoryIndex) -> (u8, u8, u8) {
    CATEGORY_RGB[index.get()]
}

/// RGB for text drawn on a category fill
#[must_use]
pub const fn category_text_rgb(index: CategoryIndex) -> (u8, u8, u8) {
    let (r, g, b) = category_rgb(index);
    // Rec. 601 luma, integer form
    if (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000 < 128 {
        (0xFF, 0xFF, 0xFF)
    } else {
        (0x00, 0x00, 0x00)
    }
}

/// Terminal colour for a category row
#[must_use]
pub const fn category_color(index: CategoryIndex) -> Color {
    let (r, g, b) = category_rgb(index);
    Color::TrueColor { r, g, b }
}

/// Terminal colour for text on a category row
#[must_use]
pub const fn category_text_color(index: CategoryIndex) -> Color {
    let (r, g, b) = category_text_rgb(index);
    Color::TrueColor { r, g, b }
}

/// Mistake budget as filled and empty dots
#[must_use]
pub fn mistake_dots(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    format!("{}{}", "●".repeat(remaining), "○".repeat(max - remaining))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
