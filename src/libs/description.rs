//! Builds the free-text description submitted with a time entry.

/// Joins the optional task name and notes of a row.
///
/// Empty values count as absent, so a row with neither yields an empty
/// description, which is still a valid aggregation key.
pub fn compose_description(task: Option<&str>, notes: Option<&str>) -> String {
    let task = task.filter(|value| !value.is_empty());
    let notes = notes.filter(|value| !value.is_empty());

    match (task, notes) {
        (Some(task), Some(notes)) => format!("{}: {}", task, notes),
        (Some(task), None) => task.to_string(),
        (None, Some(notes)) => notes.to_string(),
        (None, None) => String::new(),
    }
}

