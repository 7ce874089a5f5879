//! Bar plot rendering
//!
//! Bars are drawn bottom-aligned inside the chart area.  Fill color cycles
//! through the theme gradient by position unless the highlight map carries
//! an override for that index.

use crate::dataset::Dataset;
use crate::sorter::Highlight;
use crate::ui::geometry::ChartLayout;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use rustc_hash::FxHashMap;

pub fn render_chart_pane(
    frame: &mut Frame,
    area: Rect,
    dataset: &Dataset,
    layout: &ChartLayout,
    highlight: &FxHashMap<usize, Highlight>,
) {
    for (i, &value) in dataset.values().iter().enumerate() {
        let x = area.x.saturating_add(layout.bar_x(i));
        if x >= area.right() {
            break;
        }
        let width = layout.bar_width.min(area.right() - x);
        let height = layout.bar_height(value).min(area.height);
        if width == 0 || height == 0 {
            continue;
        }

        let color = match highlight.get(&i) {
            Some(Highlight::Primary) => DEFAULT_THEME.highlight_primary,
            Some(Highlight::Secondary) => DEFAULT_THEME.highlight_secondary,
            None => DEFAULT_THEME.bar_gradient[i % DEFAULT_THEME.bar_gradient.len()],
        };

        let bar = Rect::new(x, area.bottom() - height, width, height);
        frame.render_widget(Block::default().style(Style::default().bg(color)), bar);
    }
}
