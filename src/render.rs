//! Markdown rendering of the year/day index.
//!
//! Each year becomes a collapsible `<details>` block:
//!
//! ```text
//! <details><summary>2022</summary>
//! <p>
//!
//!  - [Day 1](./2022/day1/src/main.rs)
//!  - [Day 2](./2022/day2/src/main.rs)
//!
//! </p>
//! </details>
//! ```
//!
//! Blocks are joined with a single newline. Link targets follow the fixed
//! `./{year}/{dayFolder}/src/main.rs` layout and are not checked on disk.

use crate::discover::{DayEntry, YearEntry, YearIndex};

pub fn day_link(year: &YearEntry, day: &DayEntry) -> String {
    format!(
        " - [Day {day}](./{year}/{folder}/src/main.rs)",
        day = day.day,
        year = year.name,
        folder = day.folder_name
    )
}

pub fn render_index(index: &[YearIndex]) -> String {
    let mut lines = Vec::new();
    for entry in index {
        lines.push(format!("<details><summary>{}</summary>\n<p>\n", entry.year.name));
        for day in &entry.days {
            lines.push(day_link(&entry.year, day));
        }
        lines.push("\n</p>\n</details>".to_string());
    }
    lines.join("\n")
}
