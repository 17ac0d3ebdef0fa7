//! Turns aggregated entries into outbound Teamwork records.
//!
//! Each [`TimeEntry`] becomes exactly one [`SubmissionRecord`]:
//!
//! 1. A task ID resolved from the configuration wins; the description is left alone.
//! 2. Otherwise the description is searched for an embedded task reference.
//!    On a match the entry targets that task and the reference is cut out of
//!    the description.
//! 3. With no task at all, the entry is logged against its project.

use super::aggregator::TimeEntry;
use super::duration::Duration;
use super::inference::TaskReferenceInferencer;
use serde::Serialize;
use std::fmt;

const PROJECT_PATH: &str = "projects";
const TASK_PATH: &str = "tasks";
const TIME_ENTRIES_RESOURCE: &str = "time_entries.json";

/// Where a time entry is posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Project(String),
    Task(String),
}

impl Endpoint {
    pub fn kind(&self) -> &'static str {
        match self {
            Endpoint::Project(_) => "project",
            Endpoint::Task(_) => "task",
        }
    }

    pub fn target_id(&self) -> &str {
        match self {
            Endpoint::Project(id) | Endpoint::Task(id) => id,
        }
    }

    /// Path relative to the API base URL, e.g. `/tasks/42/time_entries.json`.
    pub fn path(&self) -> String {
        let collection = match self {
            Endpoint::Project(_) => PROJECT_PATH,
            Endpoint::Task(_) => TASK_PATH,
        };
        format!("/{}/{}/{}", collection, self.target_id(), TIME_ENTRIES_RESOURCE)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.target_id())
    }
}

/// The `time-entry` object of the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntryPayload {
    #[serde(rename = "project-id")]
    pub project_id: String,
    pub description: String,
    #[serde(rename = "person-id")]
    pub person_id: String,
    pub date: String,
    pub hours: u32,
    pub minutes: u32,
    #[serde(rename = "isbillable")]
    pub is_billable: bool,
}

impl TimeEntryPayload {
    pub fn duration(&self) -> Duration {
        Duration {
            hours: self.hours,
            minutes: self.minutes,
        }
    }
}

/// Request body wrapper: `{"time-entry": {...}}`.
#[derive(Debug, Serialize)]
pub struct TimeEntryEnvelope<'a> {
    #[serde(rename = "time-entry")]
    pub time_entry: &'a TimeEntryPayload,
}

/// One outbound record, ready for a submission sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Project display name, kept for reporting.
    pub project: String,
    pub endpoint: Endpoint,
    pub payload: TimeEntryPayload,
}

impl SubmissionRecord {
    pub fn envelope(&self) -> TimeEntryEnvelope<'_> {
        TimeEntryEnvelope { time_entry: &self.payload }
    }
}

/// Resolves the endpoint of `entry`, rewriting its description when a task
/// reference is inferred from it.
pub fn resolve_endpoint(entry: &mut TimeEntry, inferencer: &TaskReferenceInferencer) -> Endpoint {
    if let Some(task_id) = &entry.task_id {
        return Endpoint::Task(task_id.clone());
    }

    match inferencer.infer(&entry.description) {
        Some(reference) => {
            entry.description = reference.description;
            Endpoint::Task(reference.task_id)
        }
        None => Endpoint::Project(entry.project_id.clone()),
    }
}

pub fn build_submission(mut entry: TimeEntry, inferencer: &TaskReferenceInferencer) -> SubmissionRecord {
    let endpoint = resolve_endpoint(&mut entry, inferencer);

    SubmissionRecord {
        project: entry.project,
        endpoint,
        payload: TimeEntryPayload {
            project_id: entry.project_id,
            description: entry.description,
            person_id: entry.person_id,
            date: entry.date,
            hours: entry.duration.hours,
            minutes: entry.duration.minutes,
            is_billable: entry.is_billable,
        },
    }
}

/// Builds one record per entry with the default task reference conventions.
pub fn build_submissions(entries: impl IntoIterator<Item = TimeEntry>) -> Vec<SubmissionRecord> {
    let inferencer = TaskReferenceInferencer::default();
    entries.into_iter().map(|entry| build_submission(entry, &inferencer)).collect()
}
