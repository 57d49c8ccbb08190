//! TUI pane rendering modules
//!
//! Stateless render functions for everything drawn on screen.
//!
//! # Pane Modules
//!
//! - [`menu`]: the action list for the current screen
//! - [`overview`]: live counts and name lists from the registry
//! - [`dialog`]: modal input, choice, message and notification boxes
//! - [`report`]: participation bar chart
//! - [`status`]: status bar with keybindings
//! - `utils`: border styling and modal placement shared by the panes

mod utils;

pub mod dialog;
pub mod menu;
pub mod overview;
pub mod report;
pub mod status;

// Re-export render functions for convenience
pub use dialog::render_dialog;
pub use menu::render_menu_pane;
pub use overview::render_overview_pane;
pub use report::render_report_chart;
pub use status::render_status_bar;
