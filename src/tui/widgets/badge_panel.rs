/// Overlay with the badge of the selected league's first season
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::config::DisplayConfig;
use crate::selection::SelectionState;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct BadgePanel<'a> {
    pub league_name: &'a str,
    pub state: &'a SelectionState,
}

impl BadgePanel<'_> {
    fn lines(&self, config: &DisplayConfig) -> Vec<Line<'static>> {
        match self.state {
            SelectionState::Idle => Vec::new(),
            SelectionState::Loading { .. } => vec![Line::from("Loading badge...")],
            SelectionState::Failed { message, .. } => vec![Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(config.error_fg),
            ))],
            SelectionState::Loaded { season: None, .. } => {
                vec![Line::from("No season data available for this league.")]
            }
            SelectionState::Loaded {
                season: Some(season),
                ..
            } => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("Season: {}", season.season),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                ];
                match &season.badge {
                    Some(badge) => lines.push(Line::from(Span::styled(
                        badge.clone(),
                        Style::default().fg(config.selection_fg),
                    ))),
                    None => lines.push(Line::from("No badge available for this season.")),
                }
                if let Some(description) = season.description.as_deref().filter(|d| !d.is_empty()) {
                    lines.push(Line::from(""));
                    lines.push(Line::from(description.to_string()));
                }
                lines
            }
        }
    }
}

impl RenderableWidget for BadgePanel<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.league_name))
            .title_bottom(" Enter/Esc: close ");
        Paragraph::new(self.lines(config))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
