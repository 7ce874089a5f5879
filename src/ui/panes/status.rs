//! Status bar rendering with run state and key hints

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    moves: usize,
    sorting: bool,
    done: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: state chip, message, move count
    let (chip_text, chip_bg) = if sorting {
        (" Sorting ", DEFAULT_THEME.status_run)
    } else if done {
        (" Done ", DEFAULT_THEME.status_done)
    } else {
        (" Idle ", DEFAULT_THEME.status_idle)
    };

    let left_spans = vec![
        Span::styled(
            chip_text,
            Style::default()
                .bg(chip_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.status_fg),
        ),
        Span::styled(
            format!(" moves: {} ", moves),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.status_fg),
        ),
    ];

    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    // Right side: key hints
    let key_style = Style::default()
        .bg(DEFAULT_THEME.status_key)
        .fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.status_fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.status_key);

    let right_spans = vec![
        Span::styled(" s ", key_style),
        Span::styled(" start/reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" a ", key_style),
        Span::styled(" algorithm ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" d ", key_style),
        Span::styled(" direction ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
