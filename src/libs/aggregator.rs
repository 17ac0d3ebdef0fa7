//! Aggregation of tracked rows into per-day time entries.
//!
//! Rows are grouped by the triple (project, description, date). The first
//! row of a triple creates a [`TimeEntry`]; every later row only adds its
//! duration, carrying whole hours out of the minutes. Identity fields and the
//! config-resolved task ID are fixed at creation time.
//!
//! Task references typed into descriptions are not looked at here. Two rows
//! whose descriptions differ only by such a reference stay separate entries;
//! see [`crate::libs::submission`] for where references are resolved.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use twlog::libs::aggregator::Aggregator;
//! use twlog::libs::config::Config;
//! use twlog::libs::row::RawRow;
//!
//! # fn run(config: &Config, rows: Vec<RawRow>) -> anyhow::Result<()> {
//! let mut aggregator = Aggregator::new(config);
//! for row in &rows {
//!     aggregator.aggregate(row)?;
//! }
//! let entries = aggregator.into_entries();
//! # Ok(())
//! # }
//! ```

use super::config::Config;
use super::duration::Duration;
use super::error::TwLogError;
use super::row::{ParsedRow, RawRow};
use chrono::NaiveDate;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Aggregation key: one entry per project, description and day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryKey {
    pub project: String,
    pub description: String,
    /// Day as `YYYYMMDD`.
    pub date: String,
}

/// Accumulated time for one project, description and day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    /// Project display name as it appears in the source.
    pub project: String,
    pub project_id: String,
    pub person_id: String,
    pub description: String,
    /// Day as `YYYYMMDD`.
    pub date: String,
    pub duration: Duration,
    pub is_billable: bool,
    /// Task name from the source row, if any.
    pub task: Option<String>,
    /// Teamwork task ID resolved from the configured task names.
    pub task_id: Option<String>,
}

impl TimeEntry {
    fn from_row(row: &ParsedRow, config: &Config) -> Self {
        let project_id = config.project(&row.project).map(|project| project.id.clone()).unwrap_or_default();

        Self {
            project: row.project.clone(),
            project_id,
            person_id: config.person_id.clone(),
            description: row.description.clone(),
            date: row.date_key(),
            duration: row.duration,
            is_billable: true,
            task: row.task.clone(),
            task_id: row.task_id.clone(),
        }
    }

    pub fn key(&self) -> EntryKey {
        EntryKey {
            project: self.project.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
        }
    }
}

/// Inclusive day range; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start.map_or(true, |start| *date >= start) && self.end.map_or(true, |end| *date <= end)
    }
}

/// What happened to a row handed to [`Aggregator::aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregated {
    Created,
    Merged,
    /// Valid, but outside the configured date range.
    Skipped,
}

/// Owns the aggregation map for one run.
pub struct Aggregator<'a> {
    config: &'a Config,
    range: DateRange,
    entries: BTreeMap<EntryKey, TimeEntry>,
}

impl<'a> Aggregator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            range: DateRange::default(),
            entries: BTreeMap::new(),
        }
    }

    /// Restricts aggregation to rows dated within `range`.
    ///
    /// Rows outside the range are still validated.
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Validates, parses and folds one row into the map.
    ///
    /// # Errors
    ///
    /// Any validation or parse failure. The caller is expected to abort the
    /// run; the map is left as it was before the call.
    pub fn aggregate(&mut self, row: &RawRow) -> Result<Aggregated, TwLogError> {
        let parsed = row.parse(self.config)?;
        self.insert(parsed)
    }

    /// Folds an already parsed row into the map.
    ///
    /// # Errors
    ///
    /// [`crate::libs::error::ParseError::InvalidDuration`] when the merged total no longer fits;
    /// the existing entry keeps its previous duration.
    pub fn insert(&mut self, row: ParsedRow) -> Result<Aggregated, TwLogError> {
        if !self.range.contains(&row.date) {
            tracing::debug!(project = %row.project, date = %row.date, "row outside date range");
            return Ok(Aggregated::Skipped);
        }

        let entry = TimeEntry::from_row(&row, self.config);
        match self.entries.entry(entry.key()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(Aggregated::Created)
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().duration.add(entry.duration)?;
                Ok(Aggregated::Merged)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &EntryKey) -> Option<&TimeEntry> {
        self.entries.get(key)
    }

    pub fn into_entries(self) -> Vec<TimeEntry> {
        self.entries.into_values().collect()
    }
}
