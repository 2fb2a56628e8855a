use crate::discover::YearIndex;
use crate::generate::{Outcome, Stats};
use similar::{ChangeTag, TextDiff};
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
    quiet: bool,
}

impl Output {
    pub fn new(color: bool, quiet: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
            quiet,
        }
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_fg(Some(color)))
    }

    fn set_bold(&mut self) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_bold(true))
    }

    fn set_dim(&mut self) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_dimmed(true))
    }

    fn reset(&mut self) -> io::Result<()> {
        self.stdout.reset()
    }

    pub fn print_outcome(&mut self, document: &Path, outcome: &Outcome, stats: Stats) -> io::Result<()> {
        let stale = matches!(outcome, Outcome::Stale { .. });
        if self.quiet && !stale {
            return Ok(());
        }

        let (label, color) = match outcome {
            Outcome::Updated => ("Updated", Color::Green),
            Outcome::Unchanged => ("Up to date", Color::Green),
            Outcome::Stale { .. } => ("Out of date", Color::Red),
            Outcome::MarkersMissing => ("No index markers", Color::Yellow),
        };

        self.set_color(color)?;
        write!(self.stdout, "{}", label)?;
        self.reset()?;
        write!(self.stdout, ": {}", document.display())?;
        self.set_dim()?;
        writeln!(
            self.stdout,
            " ({} {}, {} {})",
            stats.years,
            plural(stats.years, "year", "years"),
            stats.days,
            plural(stats.days, "day", "days")
        )?;
        self.reset()?;

        if let Outcome::Stale { current, expected } = outcome {
            writeln!(self.stdout)?;
            self.print_diff(document, current, expected)?;
        }
        self.stdout.flush()
    }

    /// Unified-style hunks between the document on disk and the regenerated one.
    pub fn print_diff(&mut self, document: &Path, current: &str, expected: &str) -> io::Result<()> {
        let diff = TextDiff::from_lines(current, expected);
        let mut unified = diff.unified_diff();
        unified.context_radius(2);

        self.set_bold()?;
        writeln!(self.stdout, "--- {}", document.display())?;
        writeln!(self.stdout, "+++ {} (regenerated)", document.display())?;
        self.reset()?;

        for hunk in unified.iter_hunks() {
            self.set_color(Color::Cyan)?;
            writeln!(self.stdout, "{}", hunk.header())?;
            self.reset()?;

            for change in hunk.iter_changes() {
                let sign = match change.tag() {
                    ChangeTag::Delete => {
                        self.set_color(Color::Red)?;
                        '-'
                    }
                    ChangeTag::Insert => {
                        self.set_color(Color::Green)?;
                        '+'
                    }
                    ChangeTag::Equal => ' ',
                };
                write!(self.stdout, "{}{}", sign, change.value())?;
                if change.missing_newline() {
                    writeln!(self.stdout)?;
                }
                self.reset()?;
            }
        }
        Ok(())
    }

    pub fn print_list(&mut self, index: &[YearIndex]) -> io::Result<()> {
        for entry in index {
            self.set_bold()?;
            write!(self.stdout, "{}", entry.year.name)?;
            self.reset()?;
            self.set_dim()?;
            writeln!(
                self.stdout,
                " ({} {})",
                entry.days.len(),
                plural(entry.days.len(), "day", "days")
            )?;
            self.reset()?;

            for day in &entry.days {
                writeln!(self.stdout, "  {} → day {}", day.folder_name, day.day)?;
            }
        }
        self.stdout.flush()
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
