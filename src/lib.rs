//! # Introduction
//!
//! Society Desk keeps track of student societies and events from a terminal.
//! Admins create and remove societies and events and read the participation
//! report. Students join them, leave feedback and check notifications.
//!
//! ## Layout
//!
//! ```text
//! containers → registry → ui
//!                 ↑
//!        config / auth / report
//! ```
//!
//! 1. [`containers`]: hand-built linked list, stack and append-only queue.
//! 2. [`registry`]: the application state that owns one container of each
//!    kind and performs every admin and student action.
//! 3. [`report`]: participation tally shown as a chart.
//! 4. [`auth`]: the admin password check.
//! 5. [`config`] and [`logging`]: TOML/CLI settings and file-backed tracing.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Everything below [`ui`] is infallible. [`error::AppError`] only covers
//! config, logging and terminal I/O.

pub mod auth;
pub mod config;
pub mod containers;
pub mod error;
pub mod logging;
pub mod registry;
pub mod report;
pub mod ui;
