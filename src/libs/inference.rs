//! Task references embedded in free-text descriptions.
//!
//! People who track time without picking a configured task often type the
//! Teamwork task ID into the description instead. Two notations are
//! recognized, tried in this order:
//!
//! - **Dash**: `"123 - Fix login bug"`
//! - **Bracket**: `"[TW:1234567] Fix login bug"` (fixed width, case-insensitive tag)
//!
//! The first notation that matches wins. A match yields the task ID plus the
//! description with the reference removed, which replaces the stored
//! description before the entry is submitted.

/// Separator between a numeric task ID and the rest of the description.
pub const DASH_SEPARATOR: &str = " - ";

/// Opening tag of the bracket notation, compared case-insensitively.
pub const BRACKET_TAG: &str = "[TW:";

/// Char offset where the bracketed ID starts (right after the tag).
pub const BRACKET_ID_START: usize = 4;

/// Width of the window scanned for ID digits.
///
/// Teamwork task IDs run up to 8 digits; the window also covers the closing
/// bracket and an optional space after the tag.
pub const BRACKET_ID_WIDTH: usize = 9;

/// Char offset where the description text starts for a 7-digit ID,
/// i.e. `"[TW:"` + 7 digits + `"]"`.
pub const BRACKET_TEXT_START: usize = 12;

const BRACKET_CLOSE: char = ']';

/// A task ID found in a description, with the description that remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReference {
    pub task_id: String,
    pub description: String,
}

/// One textual notation for embedding a task ID in a description.
pub trait TaskReferenceConvention {
    fn name(&self) -> &'static str;
    fn extract(&self, description: &str) -> Option<TaskReference>;
}

/// `"<digits> - <text>"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DashConvention;

impl TaskReferenceConvention for DashConvention {
    fn name(&self) -> &'static str {
        "dash"
    }

    fn extract(&self, description: &str) -> Option<TaskReference> {
        let (head, rest) = description.split_once(DASH_SEPARATOR)?;
        let task_id = head.trim();
        if !is_numeric(task_id) {
            return None;
        }

        Some(TaskReference {
            task_id: task_id.to_string(),
            description: rest.trim().to_string(),
        })
    }
}

/// `"[TW:<id>] <text>"`.
///
/// The ID is read from a fixed-width window after the tag with every
/// non-digit dropped. When the closing bracket falls inside the window, only
/// the part before it counts as the ID and the text resumes right after it;
/// otherwise the text resumes at [`BRACKET_TEXT_START`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketConvention;

impl TaskReferenceConvention for BracketConvention {
    fn name(&self) -> &'static str {
        "bracket"
    }

    fn extract(&self, description: &str) -> Option<TaskReference> {
        let chars: Vec<char> = description.chars().collect();
        let tag: String = chars.iter().take(BRACKET_ID_START).collect();
        if !tag.eq_ignore_ascii_case(BRACKET_TAG) {
            return None;
        }

        let window_end = (BRACKET_ID_START + BRACKET_ID_WIDTH).min(chars.len());
        let window = &chars[BRACKET_ID_START..window_end];

        let (id_chars, text_start) = match window.iter().position(|c| *c == BRACKET_CLOSE) {
            Some(close) => (&window[..close], BRACKET_ID_START + close + 1),
            None => (window, BRACKET_TEXT_START),
        };

        let task_id: String = id_chars.iter().filter(|c| c.is_ascii_digit()).collect();
        if task_id.is_empty() {
            return None;
        }

        let rest: String = chars.iter().skip(text_start).collect();
        Some(TaskReference {
            task_id,
            description: rest.trim().to_string(),
        })
    }
}

/// Ordered set of conventions, tried first to last.
pub struct TaskReferenceInferencer {
    conventions: Vec<Box<dyn TaskReferenceConvention + Send + Sync>>,
}

impl Default for TaskReferenceInferencer {
    fn default() -> Self {
        Self {
            conventions: vec![Box::new(DashConvention), Box::new(BracketConvention)],
        }
    }
}

impl TaskReferenceInferencer {
    pub fn new(conventions: Vec<Box<dyn TaskReferenceConvention + Send + Sync>>) -> Self {
        Self { conventions }
    }

    pub fn infer(&self, description: &str) -> Option<TaskReference> {
        self.conventions.iter().find_map(|convention| {
            let reference = convention.extract(description)?;
            tracing::debug!(convention = convention.name(), task_id = %reference.task_id, "task reference found");
            Some(reference)
        })
    }
}

/// Runs the default conventions against `description`.
pub fn infer_task_reference(description: &str) -> Option<TaskReference> {
    TaskReferenceInferencer::default().infer(description)
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
