//! Main TUI application state and logic

use crate::dataset::{Dataset, DatasetError};
use crate::sorter::{Algorithm, Highlight, Stepper};
use crate::ui::geometry::ChartLayout;
use crate::ui::panes;
use crate::ui::panes::{Button, ButtonAction};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use rand::rngs::ThreadRng;
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// Default number of values to sort
pub const DEFAULT_LIST_LEN: usize = 36;

/// Generation range, sized so the default layout yields visible bars on a
/// conventional 80x24 terminal
pub const VALUE_MIN: u32 = 1;
pub const VALUE_MAX: u32 = 16;

/// Frame pacing: the poll timeout is the sole animation speed control
const TICK_RATE: Duration = Duration::from_millis(30);

/// The main application state
pub struct App {
    /// The values being visualized
    pub dataset: Dataset,

    /// Bar geometry, cached with the chart area it was computed for
    pub layout: Option<(Rect, ChartLayout)>,

    /// Whether a step sequence is currently running
    pub sorting: bool,

    /// Whether the last run finished (start button shows "Reset")
    pub sorting_done: bool,

    /// Comparison direction for the next run
    pub ascending: bool,

    /// Algorithm bound to the next run
    pub algorithm: Algorithm,

    /// Active step sequence while sorting
    pub stepper: Option<Box<dyn Stepper>>,

    /// Highlight emitted by the most recent step, valid for one frame
    pub highlight: FxHashMap<usize, Highlight>,

    /// Mutated steps performed by the current/last run
    pub moves: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// The three control buttons, in dispatch order
    pub buttons: Vec<Button>,

    /// Regeneration size for reset
    list_len: usize,

    rng: ThreadRng,
}

impl App {
    /// Create an app with a freshly generated dataset of `list_len` values.
    pub fn new(list_len: usize) -> Result<Self, DatasetError> {
        let mut rng = rand::thread_rng();
        let dataset = Dataset::generate(&mut rng, list_len, VALUE_MIN, VALUE_MAX)?;

        let buttons = vec![
            Button::new(
                "Start",
                11,
                DEFAULT_THEME.start_fill,
                DEFAULT_THEME.start_border,
                ButtonAction::StartOrReset,
            ),
            Button::new(
                Algorithm::Bubble.label(),
                16,
                DEFAULT_THEME.algorithm_fill,
                DEFAULT_THEME.algorithm_border,
                ButtonAction::ToggleAlgorithm,
            ),
            Button::new(
                "Ascending",
                12,
                DEFAULT_THEME.order_fill,
                DEFAULT_THEME.order_border,
                ButtonAction::ToggleOrder,
            ),
        ];

        Ok(App {
            dataset,
            layout: None,
            sorting: false,
            sorting_done: false,
            ascending: true,
            algorithm: Algorithm::Bubble,
            stepper: None,
            highlight: FxHashMap::default(),
            moves: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            buttons,
            list_len,
            rng,
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.sorting {
                self.advance_sort();
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(TICK_RATE)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key)
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Resume the active step sequence once.
    pub fn advance_sort(&mut self) {
        let Some(stepper) = self.stepper.as_mut() else {
            self.sorting = false;
            return;
        };

        let step = stepper.advance(&mut self.dataset);
        if step.done {
            self.sorting = false;
            self.sorting_done = true;
            self.stepper = None;
            self.highlight.clear();
            self.set_button_label(ButtonAction::StartOrReset, "Reset");
            self.status_message = format!("{} complete", self.algorithm.label());
        } else {
            if step.mutated {
                self.moves += 1;
            }
            self.highlight = step.highlight;
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
            size,
        );

        // Title | buttons | bar plot | status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_header(frame, chunks[0]);

        panes::position_buttons(&mut self.buttons, chunks[1]);
        panes::render_controls(frame, &self.buttons);

        let chart_area = chunks[2];
        let layout = match self.layout {
            Some((area, layout)) if area == chart_area => layout,
            _ => {
                let layout = ChartLayout::new(chart_area.width, chart_area.height, &self.dataset);
                self.layout = Some((chart_area, layout));
                layout
            }
        };
        panes::render_chart_pane(frame, chart_area, &self.dataset, &layout, &self.highlight);

        panes::render_status_bar(
            frame,
            chunks[3],
            &self.status_message,
            self.moves,
            self.sorting,
            self.sorting_done,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('s') => self.apply_action(ButtonAction::StartOrReset),
            KeyCode::Char('a') => self.apply_action(ButtonAction::ToggleAlgorithm),
            KeyCode::Char('d') => self.apply_action(ButtonAction::ToggleOrder),
            _ => {}
        }
    }

    /// Handle mouse events: left presses resolve against the buttons
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(action) = panes::hit_test(&self.buttons, mouse.column, mouse.row) {
            self.apply_action(action);
        }
    }

    /// Dispatch a button action against the current state.
    ///
    /// While a sort is running every action is ignored: only completion or
    /// quitting ends a run.
    pub fn apply_action(&mut self, action: ButtonAction) {
        if self.sorting {
            return;
        }

        match action {
            ButtonAction::StartOrReset => {
                if self.sorting_done {
                    self.reset();
                } else {
                    self.start_sort();
                }
            }
            ButtonAction::ToggleAlgorithm => {
                self.algorithm = self.algorithm.toggle();
                self.set_button_label(ButtonAction::ToggleAlgorithm, self.algorithm.label());
                self.status_message = format!("Algorithm: {}", self.algorithm.label());
            }
            ButtonAction::ToggleOrder => {
                self.ascending = !self.ascending;
                let label = if self.ascending {
                    "Ascending"
                } else {
                    "Descending"
                };
                self.set_button_label(ButtonAction::ToggleOrder, label);
                self.status_message = format!("Order: {}", label);
            }
        }
    }

    /// Begin a run with the selected algorithm and direction.
    fn start_sort(&mut self) {
        self.sorting = true;
        self.moves = 0;
        self.stepper = Some(self.algorithm.stepper(self.ascending));
        self.set_button_label(ButtonAction::StartOrReset, "Reset");
        self.status_message = format!(
            "Sorting: {} ({})",
            self.algorithm.label(),
            if self.ascending {
                "ascending"
            } else {
                "descending"
            }
        );
    }

    /// Regenerate the dataset and return to the initial idle state.
    fn reset(&mut self) {
        match Dataset::generate(&mut self.rng, self.list_len, VALUE_MIN, VALUE_MAX) {
            Ok(dataset) => self.dataset = dataset,
            Err(e) => {
                self.status_message = format!("Reset failed: {}", e);
                return;
            }
        }
        self.layout = None;
        self.sorting = false;
        self.sorting_done = false;
        self.stepper = None;
        self.highlight.clear();
        self.moves = 0;
        self.set_button_label(ButtonAction::StartOrReset, "Start");
        self.status_message = String::from("Ready!");
    }

    fn set_button_label(&mut self, action: ButtonAction, label: &str) {
        if let Some(button) = self.buttons.iter_mut().find(|b| b.action == action) {
            button.label = label.to_string();
        }
    }

    /// Label currently shown on the button bound to `action`
    pub fn button_label(&self, action: ButtonAction) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.label.as_str())
    }
}
