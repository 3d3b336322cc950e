//! # Introduction
//!
//! stepviz records textbook algorithms step by step and replays the recording
//! in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! Each run is executed eagerly to completion and captured as an immutable
//! list of snapshots. Playback only moves a cursor over that list, so pausing,
//! stepping backward or changing speed never re-executes algorithm code.
//!
//! ## Pipeline
//!
//! ```text
//! AlgorithmInput → Recorder → StepSequence → Replayer → DisplayState → TUI
//! ```
//!
//! 1. [`input`]: arrays, targets, window sizes and graphs; parsing,
//!    validation and seeded randomization.
//! 2. [`recorder`]: runs one algorithm and emits [`step::Step`]s through a
//!    [`step::StepLog`].
//! 3. [`replay`]: the Idle/Playing/Paused/Completed state machine with
//!    generation-checked ticks.
//! 4. [`session`]: one visualization holding algorithm, input and replayer.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorting: bubble (basic and optimized), selection, insertion, merge,
//! counting. Searching: linear, binary, interpolation. Techniques:
//! two-pointer pair sum, sliding window maximum sum. Graphs: BFS, DFS.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod recorder;
pub mod replay;
pub mod session;
pub mod step;
pub mod ui;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
