use std::fmt;

use crate::model::task::Task;

/// One heading to display above a group, with its depth in the group path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDisplayHeading {
    /// 0 = outermost grouping rule.
    pub nesting_level: usize,
    pub display_name: String,
}

/// One leaf group: its full key path, the headings actually displayed for
/// it (leading segments shared with the previous group are suppressed),
/// and its tasks in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    pub groups: Vec<String>,
    pub group_headings: Vec<GroupDisplayHeading>,
    pub tasks: Vec<Task>,
}

impl fmt::Display for TaskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for heading in &self.group_headings {
            writeln!(
                f,
                "{} {}",
                "#".repeat(4 + heading.nesting_level),
                heading.display_name
            )?;
        }
        for task in &self.tasks {
            writeln!(f, "{}", task.to_file_line_string())?;
        }
        Ok(())
    }
}

/// Selects the headings to display for each group in emission order,
/// suppressing leading path segments identical to the previous group's
/// (classic collapsed headers in sorted report output).
pub struct GroupDisplayHeadingSelector {
    previous_path: Option<Vec<String>>,
}

impl GroupDisplayHeadingSelector {
    pub fn new() -> Self {
        GroupDisplayHeadingSelector {
            previous_path: None,
        }
    }

    /// Headings for the next group in emission order.
    pub fn headings_for(&mut self, path: &[String]) -> Vec<GroupDisplayHeading> {
        let first_shown = match &self.previous_path {
            None => 0,
            Some(previous) => path
                .iter()
                .zip(previous.iter())
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| previous.len().min(path.len())),
        };
        self.previous_path = Some(path.to_vec());

        path.iter()
            .enumerate()
            .skip(first_shown)
            .map(|(level, name)| GroupDisplayHeading {
                nesting_level: level,
                display_name: name.clone(),
            })
            .collect()
    }
}

impl Default for GroupDisplayHeadingSelector {
    fn default() -> Self {
        GroupDisplayHeadingSelector::new()
    }
}
