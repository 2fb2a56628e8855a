pub mod cli;
pub mod discover;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod splice;

pub use discover::{DayEntry, YearEntry, YearIndex};
pub use error::{Error, Result};
pub use generate::{IndexGenerator, Mode, Outcome, Stats};
