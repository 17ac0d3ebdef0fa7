#[derive(Debug, Clone)]
pub enum Message {
    // === RUN MESSAGES ===
    SimulatedMode,
    ParsingFile(String), // path
    ParsingCompleted {
        rows: usize,
        entries: usize,
        skipped: usize,
    },
    NoEntriesToLog,
    LoggingStarted,
    LoggingCompleted,
    LoggingCancelled,
    LoggingEntry {
        duration: String,
        project: String,
        description: String,
    },
    SubmissionFailed(String, String), // endpoint, error
    SubmissionSummary {
        created: usize,
        updated: usize,
        simulated: usize,
        failed: usize,
    },

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String), // path
    ConfigNoProjects,
    ProjectsHeader,

    // === PROMPTS ===
    PromptConfirmLogging(usize), // entry count
    PromptFailed(String),        // error
}
