//! Display implementation for twlog messages.
//!
//! All user-facing text lives here, so the wording of a message can change
//! without touching the code that emits it.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === RUN MESSAGES ===
            Message::SimulatedMode => "Running in simulated mode.".to_string(),
            Message::ParsingFile(path) => format!("Parsing file {}...", path),
            Message::ParsingCompleted { rows, entries, skipped } => {
                if *skipped > 0 {
                    format!(
                        "Parsing completed: {} rows aggregated into {} time entries ({} outside the date range).",
                        rows, entries, skipped
                    )
                } else {
                    format!("Parsing completed: {} rows aggregated into {} time entries.", rows, entries)
                }
            }
            Message::NoEntriesToLog => "No time entries to log.".to_string(),
            Message::LoggingStarted => "Logging time...".to_string(),
            Message::LoggingCompleted => "Logging completed.".to_string(),
            Message::LoggingCancelled => "Logging cancelled.".to_string(),
            Message::LoggingEntry {
                duration,
                project,
                description,
            } => format!("Logging {} hrs for project {}, description: \"{}\".", duration, project, description),
            Message::SubmissionFailed(endpoint, error) => format!("Could not log time for {}: {}", endpoint, error),
            Message::SubmissionSummary {
                created,
                updated,
                simulated,
                failed,
            } => format!(
                "{} created, {} updated, {} simulated, {} failed.",
                created, updated, simulated, failed
            ),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigNoProjects => "No projects are configured.".to_string(),
            Message::ProjectsHeader => "Configured projects:".to_string(),

            // === PROMPTS ===
            Message::PromptConfirmLogging(count) => format!("Log {} time entries to Teamwork?", count),
            Message::PromptFailed(error) => format!("Could not read confirmation: {}", error),
        };
        write!(f, "{}", s)
    }
}
