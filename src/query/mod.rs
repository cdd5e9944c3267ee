pub mod explain;
pub mod grouper;
pub mod grouping_tree;
pub mod task_group;
pub mod task_groups;

pub use explain::explain_results;
pub use grouper::Grouper;
pub use grouping_tree::TaskGroupingTree;
pub use task_group::{GroupDisplayHeading, GroupDisplayHeadingSelector, TaskGroup};
pub use task_groups::TaskGroups;

use crate::model::task::Task;

/// One filter line of a query, kept with its source text for explanations.
pub struct Filter {
    instruction: String,
    predicate: Box<dyn Fn(&Task) -> bool>,
}

impl Filter {
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn matches(&self, task: &Task) -> bool {
        (self.predicate)(task)
    }
}

/// A parsed query block: filters plus `group by` rules.
///
/// Parsing is total. An unrecognized instruction does not panic or abort;
/// it is recorded as the query's error and reported by `explain_query`
/// (and such a query matches nothing when applied).
pub struct Query {
    source: String,
    filters: Vec<Filter>,
    groupers: Vec<Grouper>,
    error: Option<String>,
}

impl Query {
    /// Parse a query block, line by line. Blank lines and `#` comment
    /// lines are skipped.
    pub fn from_source(source: &str) -> Query {
        let mut query = Query {
            source: source.to_string(),
            filters: Vec::new(),
            groupers: Vec::new(),
            error: None,
        };

        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(property) = line.strip_prefix("group by ") {
                match Grouper::from_property(property.trim()) {
                    Some(grouper) => query.groupers.push(grouper),
                    None => {
                        query.error = Some(format!("do not understand query grouping: {}", line));
                        break;
                    }
                }
            } else if let Some(filter) = parse_filter(line) {
                query.filters.push(filter);
            } else {
                query.error = Some(format!("do not understand query instruction: {}", line));
                break;
            }
        }

        query
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn groupers(&self) -> &[Grouper] {
        &self.groupers
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A human-readable explanation of this query's filters.
    ///
    /// Each filter line is terminated with a newline; the no-filter text is
    /// not. `explain_results` relies on this to separate the global query
    /// section from the block query section with a blank line.
    pub fn explain_query(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Query has an error:\n{}", error);
        }
        if self.filters.is_empty() {
            return "No filters supplied. All tasks will match the query.".to_string();
        }
        self.filters
            .iter()
            .map(|f| format!("{}\n", f.instruction()))
            .collect()
    }

    /// Filter and group the given tasks. Input order is preserved within
    /// groups. A query with an error matches nothing.
    pub fn apply(&self, tasks: &[Task]) -> TaskGroups {
        let matching: Vec<Task> = if self.error.is_some() {
            Vec::new()
        } else {
            tasks
                .iter()
                .filter(|task| self.filters.iter().all(|f| f.matches(task)))
                .cloned()
                .collect()
        };
        TaskGroups::new(&self.groupers, &matching)
    }
}

fn parse_filter(line: &str) -> Option<Filter> {
    let predicate: Box<dyn Fn(&Task) -> bool> = match line {
        "done" => Box::new(|task: &Task| task.status.is_done()),
        "not done" => Box::new(|task: &Task| !task.status.is_done()),
        "recurring" => Box::new(|task: &Task| task.recurrence.is_some()),
        "not recurring" => Box::new(|task: &Task| task.recurrence.is_none()),
        _ => {
            if let Some(text) = line.strip_prefix("description includes ") {
                let text = text.trim().to_string();
                Box::new(move |task: &Task| task.description.contains(&text))
            } else if let Some(text) = line.strip_prefix("tag includes ") {
                let text = text.trim().trim_start_matches('#').to_string();
                Box::new(move |task: &Task| task.tags.iter().any(|tag| tag.contains(&text)))
            } else if let Some(text) = line.strip_prefix("path includes ") {
                let text = text.trim().to_string();
                Box::new(move |task: &Task| task.location.path().contains(&text))
            } else if let Some(name) = line.strip_prefix("priority is ") {
                let name = name.trim().to_lowercase();
                Box::new(move |task: &Task| task.priority.name().to_lowercase() == name)
            } else {
                return None;
            }
        }
    };
    Some(Filter {
        instruction: line.to_string(),
        predicate,
    })
}
