//! Submission of time entries to remote time-tracking APIs.
//!
//! A [`SubmissionSink`] posts one [`SubmissionRecord`] and reports how the
//! server answered. [`submit_all`] walks the records in order, keeps going
//! past failures and collects every outcome into a [`SubmissionSummary`].
//! Nothing is retried.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use twlog::api::{submit_all, teamwork::Teamwork};
//!
//! # async fn run(config: &twlog::libs::config::Config, records: Vec<twlog::libs::submission::SubmissionRecord>) {
//! let summary = submit_all(&Teamwork::new(config), &records, false).await;
//! println!("{} failed", summary.failed());
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::submission::SubmissionRecord;
use crate::{msg_error, msg_print};
use reqwest::StatusCode;
use thiserror::Error;

pub mod teamwork;

pub use teamwork::Teamwork;

/// Why a single record was not accepted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Final state of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 201: a new time entry was created.
    Created,
    /// 200: an existing time entry was updated.
    Updated,
    /// Dry run; nothing was sent.
    Simulated,
    Failed(SubmissionError),
}

impl SubmissionOutcome {
    /// Maps an HTTP answer to an outcome. Only 200 and 201 count as success.
    pub fn from_response(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::CREATED => SubmissionOutcome::Created,
            StatusCode::OK => SubmissionOutcome::Updated,
            status => SubmissionOutcome::Failed(SubmissionError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SubmissionOutcome::Failed(_))
    }

    pub fn label(&self) -> String {
        match self {
            SubmissionOutcome::Created => "created".to_string(),
            SubmissionOutcome::Updated => "updated".to_string(),
            SubmissionOutcome::Simulated => "simulated".to_string(),
            SubmissionOutcome::Failed(error) => format!("failed ({})", error),
        }
    }
}

/// Status and body of the server's answer to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Destination for outbound records.
#[allow(async_fn_in_trait)]
pub trait SubmissionSink {
    /// Sends one record. Transport failures are errors; any HTTP answer,
    /// successful or not, is a response.
    async fn submit(&self, record: &SubmissionRecord) -> Result<SinkResponse, SubmissionError>;
}

/// A record paired with what happened to it.
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    pub record: SubmissionRecord,
    pub outcome: SubmissionOutcome,
}

/// Outcomes of a run, in submission order.
#[derive(Debug, Clone, Default)]
pub struct SubmissionSummary {
    pub results: Vec<SubmissionResult>,
}

impl SubmissionSummary {
    fn count(&self, predicate: impl Fn(&SubmissionOutcome) -> bool) -> usize {
        self.results.iter().filter(|result| predicate(&result.outcome)).count()
    }

    pub fn created(&self) -> usize {
        self.count(|outcome| *outcome == SubmissionOutcome::Created)
    }

    pub fn updated(&self) -> usize {
        self.count(|outcome| *outcome == SubmissionOutcome::Updated)
    }

    pub fn simulated(&self) -> usize {
        self.count(|outcome| *outcome == SubmissionOutcome::Simulated)
    }

    pub fn failed(&self) -> usize {
        self.count(SubmissionOutcome::is_failure)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Submits every record in order, or only announces them when `simulate` is set.
///
/// Failures are reported as they happen and recorded in the summary; they
/// never stop the remaining submissions.
pub async fn submit_all<S: SubmissionSink>(sink: &S, records: &[SubmissionRecord], simulate: bool) -> SubmissionSummary {
    let mut summary = SubmissionSummary::default();

    for record in records {
        msg_print!(Message::LoggingEntry {
            duration: record.payload.duration().to_string(),
            project: record.project.clone(),
            description: record.payload.description.clone(),
        });

        let outcome = if simulate {
            SubmissionOutcome::Simulated
        } else {
            match sink.submit(record).await {
                Ok(response) => SubmissionOutcome::from_response(response.status, response.body),
                Err(error) => SubmissionOutcome::Failed(error),
            }
        };

        if let SubmissionOutcome::Failed(error) = &outcome {
            msg_error!(Message::SubmissionFailed(record.endpoint.to_string(), error.to_string()));
        }
        tracing::debug!(endpoint = %record.endpoint, outcome = %outcome.label(), "time entry processed");

        summary.results.push(SubmissionResult {
            record: record.clone(),
            outcome,
        });
    }

    summary
}
