use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::DisplayConfig;

/// Characters used for separators, the list selector and stat bars
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    /// Joins a horizontal separator to a vertical bar below it
    pub connector: String,
    pub selector: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub ellipsis: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            connector: "┬".to_string(),
            selector: "►".to_string(),
            bar_filled: "█".to_string(),
            bar_empty: "░".to_string(),
            ellipsis: "…".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            connector: "+".to_string(),
            selector: ">".to_string(),
            bar_filled: "#".to_string(),
            bar_empty: ".".to_string(),
            ellipsis: "~".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// One decimal place, e.g. `66.7%`
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Cut `text` to at most `width` terminal columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, width: usize, ellipsis: &str) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(ellipsis.width());
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if width >= ellipsis.width() {
        out.push_str(ellipsis);
    }
    out
}

/// Horizontal bar `width` cells wide, filled proportionally to `percentage`
pub fn stat_bar(percentage: f64, width: usize, box_chars: &BoxChars) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "{}{}",
        box_chars.bar_filled.repeat(filled),
        box_chars.bar_empty.repeat(width - filled)
    )
}
