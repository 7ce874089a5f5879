//! # Introduction
//!
//! sortty animates comparison-based sorting algorithms in the terminal.
//! A dataset of random values is rendered as vertical bars, and each
//! swap/shift performed by the selected algorithm becomes one animation
//! frame, paced by the UI tick loop built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Frame pipeline
//!
//! ```text
//! Dataset → Stepper (one mutation per resume) → Highlight map → Panes → Terminal
//! ```
//!
//! 1. [`dataset`] — random value generation and the in-place swap the
//!    sorters are allowed to perform.
//! 2. [`sorter`] — the two resumable step sequences ([`sorter::BubbleStepper`]
//!    and [`sorter::InsertionStepper`]); each resume performs exactly one
//!    observable mutation and reports the indices it touched.
//! 3. [`ui`] — ratatui-based TUI: bar geometry, themed panes, clickable
//!    buttons, and the application loop that paces the stepper.
//!
//! ## Controls
//!
//! Three on-screen buttons (mouse) with key equivalents: start/reset (`s`),
//! algorithm toggle (`a`), direction toggle (`d`), and `q` to quit.

pub mod dataset;
pub mod sorter;
pub mod ui;
