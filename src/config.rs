//! Compile-time settings. The viewer takes no arguments.

/// Timing file read at startup, relative to the working directory.
pub const INPUT_CSV: &str = "2024-01-19T16_51_04.csv";

pub const WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [480.0, 320.0];
