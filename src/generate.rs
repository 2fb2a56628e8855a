use crate::discover::{discover_index, YearIndex};
use crate::error::{Error, Result};
use crate::render::render_index;
use crate::splice::splice_index;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Rewrite the document in place.
    #[default]
    Write,
    /// Compare against the document without writing.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Unchanged,
    Stale { current: String, expected: String },
    MarkersMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub years: usize,
    pub days: usize,
}

impl Stats {
    fn of(index: &[YearIndex]) -> Self {
        Self {
            years: index.len(),
            days: index.iter().map(|y| y.days.len()).sum(),
        }
    }
}

/// The document as read from disk and the spliced replacement, if the
/// document has an index region.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub current: String,
    pub updated: Option<String>,
    pub stats: Stats,
}

#[derive(Debug, Clone)]
pub struct IndexGenerator {
    base_dir: PathBuf,
    document: PathBuf,
    strict: bool,
}

impl IndexGenerator {
    /// `document` is resolved against `base_dir` unless it is absolute.
    pub fn new(base_dir: impl Into<PathBuf>, document: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.into();
        let document = base_dir.join(document);
        Self {
            base_dir,
            document,
            strict: false,
        }
    }

    /// Treat a document without an index region as an error.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn document(&self) -> &Path {
        &self.document
    }

    pub fn scan(&self) -> Result<Vec<YearIndex>> {
        discover_index(&self.base_dir)
    }

    pub fn render(&self) -> Result<Rendered> {
        let current =
            std::fs::read_to_string(&self.document).map_err(|source| Error::ReadDocument {
                path: self.document.clone(),
                source,
            })?;

        let index = self.scan()?;
        let stats = Stats::of(&index);
        let body = render_index(&index);
        let updated = splice_index(&current, &body);

        if updated.is_none() {
            if self.strict {
                return Err(Error::MissingMarkers {
                    path: self.document.clone(),
                });
            }
            tracing::warn!(path = %self.document.display(), "index markers not found");
        }

        Ok(Rendered {
            current,
            updated,
            stats,
        })
    }

    pub fn run(&self, mode: Mode) -> Result<(Outcome, Stats)> {
        let Rendered {
            current,
            updated,
            stats,
        } = self.render()?;

        let outcome = match (mode, updated) {
            (Mode::Check, None) => Outcome::MarkersMissing,
            (Mode::Check, Some(expected)) if expected == current => Outcome::Unchanged,
            (Mode::Check, Some(expected)) => Outcome::Stale { current, expected },
            (Mode::Write, updated) => {
                let missing = updated.is_none();
                let changed = updated.as_ref().is_some_and(|u| *u != current);
                let content = updated.unwrap_or(current);
                std::fs::write(&self.document, content).map_err(|source| {
                    Error::WriteDocument {
                        path: self.document.clone(),
                        source,
                    }
                })?;
                tracing::info!(
                    path = %self.document.display(),
                    years = stats.years,
                    days = stats.days,
                    "wrote document"
                );
                if missing {
                    Outcome::MarkersMissing
                } else if changed {
                    Outcome::Updated
                } else {
                    Outcome::Unchanged
                }
            }
        };

        Ok((outcome, stats))
    }
}
