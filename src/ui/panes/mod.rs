//! TUI pane rendering modules
//!
//! Each pane exports one stateless `render_*` function; scroll state lives in
//! [`App`](crate::ui::App) and is passed in by reference.
//!
//! # Pane Modules
//!
//! - [`array`]: value cells with compare/swap/settled colors and marker rows
//! - [`graph`]: node states, adjacency, frontier and traversal order
//! - [`narration`]: narration log up to the cursor
//! - [`stats`]: counters, input parameters and catalog complexities
//! - [`status`]: status bar with keybindings and playback badge

pub mod array;
pub mod graph;
pub mod narration;
pub mod stats;
pub mod status;

pub use array::render_array_pane;
pub use graph::render_graph_pane;
pub use narration::render_narration_pane;
pub use stats::{render_stats_pane, StatsRenderData};
pub use status::render_status_bar;
