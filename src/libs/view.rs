use super::config::Config;
use crate::api::SubmissionSummary;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn projects(config: &Config) {
        let mut table = Table::new();

        table.add_row(row!["PROJECT", "PROJECT ID", "TASK", "TASK ID"]);
        for (name, project) in &config.map.project {
            if project.task.is_empty() {
                table.add_row(row![name, project.id, "", ""]);
                continue;
            }
            for (task, task_id) in &project.task {
                table.add_row(row![name, project.id, task, task_id]);
            }
        }
        table.printstd();
    }

    pub fn submissions(summary: &SubmissionSummary) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "PROJECT", "ENDPOINT", "DESCRIPTION", "TIME", "RESULT"]);
        for result in &summary.results {
            let record = &result.record;
            table.add_row(row![
                record.payload.date,
                record.project,
                record.endpoint,
                record.payload.description,
                record.payload.duration(),
                result.outcome.label()
            ]);
        }
        table.printstd();
    }
}
