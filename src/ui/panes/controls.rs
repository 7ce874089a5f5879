//! Control buttons: layout, rendering, and hit-testing
//!
//! Buttons are fixed-width rounded-border rectangles with centered labels.
//! They are created once at startup, repositioned into a centered row
//! whenever the controls area is laid out, and dispatched in declaration
//! order on pointer presses.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Cells between adjacent buttons
const SPACING: u16 = 2;

/// Action bound to a button, dispatched by the app loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    StartOrReset,
    ToggleAlgorithm,
    ToggleOrder,
}

/// A rectangular clickable control with a label
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub fill: Color,
    pub border: Color,
    pub action: ButtonAction,
}

impl Button {
    /// Create a button at the origin; [`position_buttons`] places it.
    ///
    /// `width` must cover the longest label the button can carry, plus
    /// the two border cells.
    pub fn new(label: &str, width: u16, fill: Color, border: Color, action: ButtonAction) -> Self {
        Button {
            rect: Rect::new(0, 0, width, 3),
            label: label.to_string(),
            fill,
            border,
            action,
        }
    }

    /// Containment test for a pointer press at cell (`column`, `row`).
    ///
    /// Every drawn cell counts, boundary included; the first cell past
    /// the right/bottom edge does not.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        column >= self.rect.x
            && column < self.rect.x + self.rect.width
            && row >= self.rect.y
            && row < self.rect.y + self.rect.height
    }
}

/// Place `buttons` in a single centered row at the top of `area`.
pub fn position_buttons(buttons: &mut [Button], area: Rect) {
    if buttons.is_empty() {
        return;
    }
    let total: u16 = buttons.iter().map(|b| b.rect.width).sum::<u16>()
        + SPACING * (buttons.len() as u16 - 1);
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    for button in buttons {
        button.rect.x = x;
        button.rect.y = area.y;
        x = x.saturating_add(button.rect.width + SPACING);
    }
}

/// Resolve a press to the first hit button, in declaration order.
pub fn hit_test(buttons: &[Button], column: u16, row: u16) -> Option<ButtonAction> {
    buttons
        .iter()
        .find(|button| button.hit(column, row))
        .map(|button| button.action)
}

pub fn render_controls(frame: &mut Frame, buttons: &[Button]) {
    for button in buttons {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(button.border).bg(button.fill));
        let label = Paragraph::new(Line::from(button.label.as_str()))
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.button_text)
                    .bg(button.fill),
            )
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(label, button.rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_at(x: u16, y: u16, width: u16, action: ButtonAction) -> Button {
        let mut button = Button::new("Test", width, Color::Reset, Color::Reset, action);
        button.rect.x = x;
        button.rect.y = y;
        button
    }

    #[test]
    fn boundary_cells_hit_and_outside_misses() {
        let button = button_at(10, 5, 8, ButtonAction::StartOrReset);

        // all four corners of the drawn rectangle
        assert!(button.hit(10, 5));
        assert!(button.hit(17, 5));
        assert!(button.hit(10, 7));
        assert!(button.hit(17, 7));

        // one cell outside each side
        assert!(!button.hit(9, 6));
        assert!(!button.hit(18, 6));
        assert!(!button.hit(12, 4));
        assert!(!button.hit(12, 8));
    }

    #[test]
    fn first_declared_button_wins_on_overlap() {
        let buttons = vec![
            button_at(0, 0, 10, ButtonAction::StartOrReset),
            button_at(5, 0, 10, ButtonAction::ToggleOrder),
        ];
        assert_eq!(hit_test(&buttons, 7, 1), Some(ButtonAction::StartOrReset));
        assert_eq!(hit_test(&buttons, 12, 1), Some(ButtonAction::ToggleOrder));
        assert_eq!(hit_test(&buttons, 30, 1), None);
    }

    #[test]
    fn positioning_centers_the_row() {
        let mut buttons = vec![
            button_at(0, 0, 11, ButtonAction::StartOrReset),
            button_at(0, 0, 16, ButtonAction::ToggleAlgorithm),
            button_at(0, 0, 12, ButtonAction::ToggleOrder),
        ];
        position_buttons(&mut buttons, Rect::new(0, 4, 80, 3));

        // total row width 11 + 2 + 16 + 2 + 12 = 43, centered in 80
        assert_eq!(buttons[0].rect.x, 18);
        assert_eq!(buttons[1].rect.x, 31);
        assert_eq!(buttons[2].rect.x, 49);
        assert!(buttons.iter().all(|b| b.rect.y == 4));
    }
}
