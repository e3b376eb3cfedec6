//! Incremental clicker: a progression engine and the browser terminal UI
//! that drives it.

pub mod clicker;
pub mod input;
pub mod progression;
pub mod time;
pub mod widgets;
