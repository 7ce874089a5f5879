use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    /// Cyclic fill colors for the bars, indexed by position
    pub bar_gradient: [Color; 3],
    pub highlight_primary: Color,   // Red
    pub highlight_secondary: Color, // Yellow
    pub button_text: Color,
    pub start_fill: Color,
    pub start_border: Color,
    pub algorithm_fill: Color,
    pub algorithm_border: Color,
    pub order_fill: Color,
    pub order_border: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub status_key: Color,  // Key hint chips
    pub status_idle: Color, // State chip while idle
    pub status_run: Color,  // State chip while sorting
    pub status_done: Color, // State chip after completion
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(0, 0, 0),
    fg: Color::Rgb(255, 255, 255),
    bar_gradient: [
        Color::Rgb(34, 139, 34),   // Forest green
        Color::Rgb(60, 179, 113),  // Medium sea green
        Color::Rgb(144, 238, 144), // Light green
    ],
    highlight_primary: Color::Rgb(255, 0, 0),
    highlight_secondary: Color::Rgb(255, 255, 0),
    button_text: Color::Rgb(255, 255, 255),
    start_fill: Color::Rgb(41, 170, 225), // Blue
    start_border: Color::Rgb(6, 109, 185),
    algorithm_fill: Color::Rgb(255, 105, 180), // Pink
    algorithm_border: Color::Rgb(180, 0, 69),
    order_fill: Color::Rgb(255, 165, 0), // Orange
    order_border: Color::Rgb(221, 87, 28),
    status_bg: Color::Rgb(40, 40, 50),
    status_fg: Color::Rgb(205, 214, 244),
    status_key: Color::Rgb(108, 112, 134),
    status_idle: Color::Rgb(137, 180, 250),
    status_run: Color::Rgb(249, 226, 175),
    status_done: Color::Rgb(166, 227, 161),
};
