//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, the tick loop, key and mouse dispatch
//! - **[`geometry`]** — bar chart layout derived from the dataset range
//! - **[`panes`]** — stateless render functions for each visible region
//!   (header, controls, chart, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a list size
//! and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod geometry;
pub mod panes;
pub mod theme;

pub use app::App;
