//! Title header rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Window/application title
pub const TITLE: &str = "Sorting Algorithm Visualiser";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(TITLE))
        .style(
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}
