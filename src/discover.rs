use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^day(\d+)$").unwrap());

/// A top-level directory whose name is all decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearEntry {
    pub year: u32,
    pub name: String,
    pub path: PathBuf,
}

/// A `day<digits>` directory inside a year directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub day: u32,
    pub folder_name: String,
}

/// A year together with its sorted days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearIndex {
    pub year: YearEntry,
    pub days: Vec<DayEntry>,
}

impl YearIndex {
    pub fn new(year: YearEntry, days: Vec<DayEntry>) -> Self {
        Self { year, days }
    }
}

pub fn parse_year_name(name: &str) -> Option<u32> {
    if !YEAR_PATTERN.is_match(name) {
        return None;
    }
    name.parse().ok()
}

pub fn parse_day_name(name: &str) -> Option<u32> {
    let caps = DAY_PATTERN.captures(name)?;
    caps[1].parse().ok()
}

/// Names of the immediate subdirectories of `dir`. Symlinks are followed when
/// deciding whether an entry is a directory; non-UTF-8 names are dropped.
fn list_subdirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let meta = std::fs::metadata(dir).map_err(|source| Error::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| Error::ListDir {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => entries.push((name.to_string(), path.to_path_buf())),
            None => tracing::debug!(path = %path.display(), "skipping non-UTF-8 directory name"),
        }
    }
    Ok(entries)
}

/// Year directories under `base_dir`, newest first.
pub fn discover_years(base_dir: &Path) -> Result<Vec<YearEntry>> {
    let mut years: Vec<YearEntry> = list_subdirs(base_dir)?
        .into_iter()
        .filter_map(|(name, path)| {
            let year = parse_year_name(&name)?;
            Some(YearEntry { year, name, path })
        })
        .collect();

    years.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| a.name.cmp(&b.name)));

    for year in &years {
        tracing::debug!(year = year.year, path = %year.path.display(), "found year directory");
    }
    Ok(years)
}

/// Day directories inside `year`, in ascending numeric order.
pub fn discover_days(year: &YearEntry) -> Result<Vec<DayEntry>> {
    let mut days: Vec<DayEntry> = list_subdirs(&year.path)?
        .into_iter()
        .filter_map(|(folder_name, _)| {
            let day = parse_day_name(&folder_name)?;
            Some(DayEntry { day, folder_name })
        })
        .collect();

    days.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.folder_name.cmp(&b.folder_name)));

    tracing::debug!(year = year.year, days = days.len(), "scanned year directory");
    Ok(days)
}

pub fn discover_index(base_dir: &Path) -> Result<Vec<YearIndex>> {
    discover_years(base_dir)?
        .into_iter()
        .map(|year| {
            let days = discover_days(&year)?;
            Ok(YearIndex::new(year, days))
        })
        .collect()
}
