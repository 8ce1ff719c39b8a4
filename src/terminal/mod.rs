//! Shared terminal utilities.
//!
//! Box drawing, the strength bar, and ANSI helpers.

mod output;

pub use output::*;
