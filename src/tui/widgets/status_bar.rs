/// StatusBar widget - key hints and catalog load time at the bottom of the screen
///
/// Two lines:
/// - Top line: horizontal separator with a connector above the vertical bar
/// - Bottom line: key hints (or an error) │ time of the last catalog load
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// A keyboard hint displayed in the status bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The keyboard key (e.g., "/", "Tab")
    pub key: String,
    /// The action description (e.g., "Search")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug)]
pub struct StatusBar {
    pub last_refresh: Option<DateTime<Local>>,
    /// chrono format for `last_refresh`
    pub time_format: String,
    /// Shown instead of the hints when present
    pub error_message: Option<String>,
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            last_refresh: None,
            time_format: "%H:%M:%S".to_string(),
            error_message: None,
            hints: vec![
                KeyHint::new("/", "Search"),
                KeyHint::new("Tab", "Sport"),
                KeyHint::new("1-9", "Stats filter"),
                KeyHint::new("Enter", "Badge"),
                KeyHint::new("r", "Reload"),
                KeyHint::new("q", "Quit"),
            ],
        }
    }

    pub fn with_last_refresh(mut self, last_refresh: Option<DateTime<Local>>) -> Self {
        self.last_refresh = last_refresh;
        self
    }

    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error_message = Some(error.into());
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    fn build_right_text(&self) -> String {
        match self.last_refresh {
            Some(time) => format!("Loaded {}", time.format(&self.time_format)),
            None => "Not loaded".to_string(),
        }
    }

    /// Left side segments: the error, or the key hints
    fn build_left_segments(&self, error_fg: Color) -> Vec<(String, Style)> {
        if let Some(msg) = &self.error_message {
            return vec![(format!("ERROR: {}", msg), Style::default().fg(error_fg))];
        }

        let mut segments = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                segments.push(("  ".to_string(), Style::default()));
            }
            segments.push((hint.key.clone(), Style::default().add_modifier(Modifier::BOLD)));
            segments.push((format!(" {}", hint.action), Style::default()));
        }
        segments
    }

    fn build_separator_line(&self, area_width: usize, bar_position: u16, config: &DisplayConfig) -> String {
        let left_part = config.box_chars.horizontal.repeat(bar_position as usize);
        let right_part = config
            .box_chars
            .horizontal
            .repeat(area_width.saturating_sub(bar_position as usize + 1));
        format!("{}{}{}", left_part, config.box_chars.connector, right_part)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let right_text = self.build_right_text();
        // Layout: [space] [left content] [padding] │ [space] [right_text] [space]
        let bar_position = area.width.saturating_sub(right_text.width() as u16 + 3);

        let separator_line = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_string(area.x, area.y, &separator_line, Style::default());

        let y = area.y + 1;
        let left_limit = area.x + bar_position;
        let mut x = area.x + 1;
        for (text, style) in self.build_left_segments(config.error_fg) {
            if x >= left_limit {
                break;
            }
            let (next_x, _) = buf.set_stringn(x, y, &text, (left_limit - x) as usize, style);
            x = next_x;
        }

        buf.set_string(left_limit, y, &config.box_chars.vertical, Style::default());
        buf.set_string(left_limit + 2, y, &right_text, Style::default());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
