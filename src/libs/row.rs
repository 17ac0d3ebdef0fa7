//! Raw records and their validated, typed form.
//!
//! A [`RawRow`] is a plain column → value record as it comes out of a CSV
//! export. [`RawRow::parse`] checks it against the configured column and
//! project mappings and turns it into a [`ParsedRow`] ready for aggregation.
//!
//! Validation is strict: a missing column or an unconfigured project fails
//! the row, and the caller aborts the whole run instead of silently
//! importing part of the file.

use super::config::Config;
use super::description::compose_description;
use super::duration::Duration;
use super::error::{ParseError, TwLogError, ValidationError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::collections::HashMap;

/// Fixed date representation used for aggregation keys and submissions.
pub const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// Accepted date-only layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%Y%m%d", "%b %d, %Y", "%B %d, %Y", "%d %b %Y"];

/// Accepted date-and-time layouts; the time of day is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M", "%d.%m.%Y %H:%M"];

/// One record from a row source, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or_default()
    }

    /// Checks that every required column is present and the project is configured.
    ///
    /// The task column is optional; rows without it are simply not linked to
    /// a configured task.
    pub fn validate(&self, config: &Config) -> Result<(), ValidationError> {
        let columns = &config.map.csv;
        let required = [
            ("date", &columns.date),
            ("notes", &columns.notes),
            ("project", &columns.project),
            ("time", &columns.time),
        ];

        for (field, column) in required {
            if self.get(column).is_none() {
                return Err(ValidationError::MissingColumn {
                    column: column.clone(),
                    field,
                });
            }
        }

        let project = self.value(&columns.project);
        if config.project(project).is_none() {
            return Err(ValidationError::UnknownProject(project.to_string()));
        }

        Ok(())
    }

    /// Validates the row and derives its aggregation fields.
    pub fn parse(&self, config: &Config) -> Result<ParsedRow, TwLogError> {
        self.validate(config)?;

        let columns = &config.map.csv;
        let project = self.value(&columns.project).to_string();
        let task = self.get(&columns.task).filter(|task| !task.is_empty());
        let notes = Some(self.value(&columns.notes));

        let task_id = task
            .and_then(|task| config.project(&project).and_then(|project| project.task_id(task)))
            .map(str::to_string);

        Ok(ParsedRow {
            date: parse_date(self.value(&columns.date))?,
            description: compose_description(task, notes),
            duration: Duration::parse(self.value(&columns.time))?,
            task: task.map(str::to_string),
            task_id,
            project,
        })
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RawRow {
    fn from(fields: [(&str, &str); N]) -> Self {
        Self::new(fields.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }
}

/// A validated row, typed and ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub project: String,
    pub description: String,
    pub date: NaiveDate,
    pub duration: Duration,
    pub task: Option<String>,
    /// Teamwork task ID when the row's task name is configured for its project.
    pub task_id: Option<String>,
}

impl ParsedRow {
    pub fn date_key(&self) -> String {
        self.date.format(DATE_KEY_FORMAT).to_string()
    }
}

/// Reads a calendar day out of the common textual date layouts.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let value = raw.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }
    if let Some(date) = DATE_FORMATS.iter().find_map(|format| NaiveDate::parse_from_str(value, format).ok()) {
        return Ok(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| ParseError::InvalidDate(raw.to_string()))
}
