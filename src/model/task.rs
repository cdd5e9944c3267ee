use chrono::NaiveDate;

use crate::model::recurrence::Recurrence;
use crate::model::settings::Settings;
use crate::model::status::{Status, StatusRegistry};
use crate::parse::{TASK_REGEX, serialize};

/// Task priority, marked on the line with an emoji signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Highest,
    High,
    Medium,
    #[default]
    None,
    Low,
    Lowest,
}

impl Priority {
    pub fn from_emoji(emoji: &str) -> Option<Priority> {
        match emoji {
            "🔺" => Some(Priority::Highest),
            "⏫" => Some(Priority::High),
            "🔼" => Some(Priority::Medium),
            "🔽" => Some(Priority::Low),
            "⏬" => Some(Priority::Lowest),
            _ => None,
        }
    }

    /// The emoji signature, or `None` for the default priority (which is
    /// never written to the line).
    pub fn emoji(self) -> Option<&'static str> {
        match self {
            Priority::Highest => Some("🔺"),
            Priority::High => Some("⏫"),
            Priority::Medium => Some("🔼"),
            Priority::None => None,
            Priority::Low => Some("🔽"),
            Priority::Lowest => Some("⏬"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::Highest => "Highest",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::None => "None",
            Priority::Low => "Low",
            Priority::Lowest => "Lowest",
        }
    }

    /// Ordering rank: 0 = highest urgency.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Highest => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::None => 3,
            Priority::Low => 4,
            Priority::Lowest => 5,
        }
    }
}

/// Where a task lives in the vault: a file path plus a stable per-file
/// ordinal. The ordinal survives re-renders that shift line numbers; the
/// "unknown position" form carries only the path (enough for toggling).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLocation {
    path: String,
    ordinal: Option<usize>,
}

impl TaskLocation {
    pub fn new(path: &str, ordinal: usize) -> Self {
        TaskLocation {
            path: path.to_string(),
            ordinal: Some(ordinal),
        }
    }

    pub fn from_unknown_position(path: &str) -> Self {
        TaskLocation {
            path: path.to_string(),
            ordinal: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn ordinal(&self) -> Option<usize> {
        self.ordinal
    }
}

/// One task occurrence, parsed from a single checkbox line.
///
/// Immutable once constructed: every edit produces new `Task` values,
/// which makes toggling safe to run speculatively (e.g. for previews).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub start_date: Option<NaiveDate>,
    pub created_date: Option<NaiveDate>,
    pub scheduled_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub done_date: Option<NaiveDate>,
    pub recurrence: Option<Recurrence>,
    /// Tags found in the description, without the `#` prefix. The tags
    /// also remain inline in the description for lossless re-serialization.
    pub tags: Vec<String>,
    pub indentation: String,
    pub list_marker: String,
    pub location: TaskLocation,
}

impl Task {
    /// Parse a line into a task.
    ///
    /// Returns `None` when the line does not match the checkbox grammar,
    /// or when a global filter is configured and the line does not contain
    /// it. Neither case is an error; callers fall back to weaker line
    /// transforms (see `ops::toggle`).
    pub fn from_line(
        line: &str,
        location: TaskLocation,
        registry: &StatusRegistry,
        settings: &Settings,
    ) -> Option<Task> {
        let caps = TASK_REGEX.captures(line)?;
        if !settings.matches_global_filter(line) {
            return None;
        }

        let symbol = caps[3].chars().next()?;
        let details = crate::parse::deserialize(&caps[4]);

        Some(Task {
            description: details.description,
            status: registry.by_symbol(symbol),
            priority: details.priority,
            start_date: details.start_date,
            created_date: details.created_date,
            scheduled_date: details.scheduled_date,
            due_date: details.due_date,
            done_date: details.done_date,
            recurrence: details.recurrence,
            tags: details.tags,
            indentation: caps[1].to_string(),
            list_marker: caps[2].to_string(),
            location,
        })
    }

    /// Render the complete file line for this task.
    pub fn to_file_line_string(&self) -> String {
        format!(
            "{}{} [{}] {}",
            self.indentation,
            self.list_marker,
            self.status.symbol(),
            serialize(self)
        )
    }

    /// Toggle this task to its next status.
    ///
    /// Returns one or two new tasks, in file order. When completing a
    /// recurring task, the next instance comes first (it is inserted above
    /// the completed line); otherwise the single toggled task is returned.
    /// `today` is passed in so completion dates are deterministic in tests.
    pub fn toggle(&self, registry: &StatusRegistry, today: NaiveDate) -> Vec<Task> {
        let next_status = registry.by_symbol(self.status.next_status_symbol());

        let mut toggled = self.clone();
        toggled.done_date = if next_status.is_done() {
            Some(today)
        } else {
            None
        };
        toggled.status = next_status.clone();

        let mut result = Vec::new();

        if next_status.is_done()
            && !self.status.is_done()
            && let Some(rule) = &self.recurrence
            && let Some(next) =
                rule.next_occurrence(today, self.start_date, self.scheduled_date, self.due_date)
        {
            let mut next_task = self.clone();
            next_task.status = registry.todo_status();
            next_task.done_date = None;
            next_task.start_date = next.start_date;
            next_task.scheduled_date = next.scheduled_date;
            next_task.due_date = next.due_date;
            result.push(next_task);
        }

        result.push(toggled);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn from_line(line: &str) -> Option<Task> {
        Task::from_line(
            line,
            TaskLocation::from_unknown_position("x.md"),
            &StatusRegistry::default(),
            &Settings::default(),
        )
    }

    #[test]
    fn test_from_line_parses_fields() {
        let task =
            from_line("- [ ] Water the plants #garden 🔼 🔁 every week 📅 2022-09-04").unwrap();
        assert_eq!(task.description, "Water the plants #garden");
        assert_eq!(task.tags, vec!["garden"]);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, Some(date("2022-09-04")));
        assert!(task.recurrence.is_some());
        assert_eq!(task.status.symbol(), ' ');
    }

    #[test]
    fn test_from_line_rejects_non_task_lines() {
        assert!(from_line("just some text").is_none());
        assert!(from_line("- a list item").is_none());
        assert!(from_line("## a heading").is_none());
    }

    #[test]
    fn test_from_line_honours_global_filter() {
        let settings = Settings {
            global_filter: "#task".to_string(),
            ..Default::default()
        };
        let registry = StatusRegistry::default();
        let loc = TaskLocation::from_unknown_position("x.md");
        assert!(
            Task::from_line("- [ ] no filter here", loc.clone(), &registry, &settings).is_none()
        );
        assert!(Task::from_line("- [ ] #task with filter", loc, &registry, &settings).is_some());
    }

    #[test]
    fn test_toggle_sets_and_clears_done_date() {
        let registry = StatusRegistry::default();
        let today = date("2022-09-04");

        let task = from_line("- [ ] write report").unwrap();
        let toggled = task.toggle(&registry, today);
        assert_eq!(toggled.len(), 1);
        assert!(toggled[0].status.is_done());
        assert_eq!(toggled[0].done_date, Some(today));

        let back = toggled[0].toggle(&registry, today);
        assert_eq!(back.len(), 1);
        assert!(!back[0].status.is_done());
        assert_eq!(back[0].done_date, None);
    }

    #[test]
    fn test_double_toggle_restores_original_fields() {
        let registry = StatusRegistry::default();
        let today = date("2022-09-04");
        let task = from_line("- [ ] pay rent 🛫 2022-09-01 📅 2022-09-30").unwrap();
        let once = task.toggle(&registry, today);
        let twice = once[0].toggle(&registry, today);
        assert_eq!(twice[0], task);
    }

    #[test]
    fn test_toggle_recurring_emits_next_instance_first() {
        let registry = StatusRegistry::default();
        let today = date("2022-09-04");
        let task = from_line("- [ ] T 🔁 every day 📅 2022-09-04").unwrap();

        let toggled = task.toggle(&registry, today);
        assert_eq!(toggled.len(), 2);
        assert_eq!(toggled[0].due_date, Some(date("2022-09-05")));
        assert_eq!(toggled[0].status.symbol(), ' ');
        assert_eq!(toggled[0].done_date, None);
        assert!(toggled[0].recurrence.is_some());
        assert_eq!(toggled[1].due_date, Some(date("2022-09-04")));
        assert!(toggled[1].status.is_done());
        assert_eq!(toggled[1].done_date, Some(today));
    }

    #[test]
    fn test_toggle_recurring_without_dates_fires_nothing() {
        let registry = StatusRegistry::default();
        let task = from_line("- [ ] T 🔁 every day").unwrap();
        let toggled = task.toggle(&registry, date("2022-09-04"));
        assert_eq!(toggled.len(), 1);
    }

    #[test]
    fn test_toggle_unknown_status_is_a_self_loop() {
        let registry = StatusRegistry::default();
        let task = from_line("- [?] strange").unwrap();
        let toggled = task.toggle(&registry, date("2022-09-04"));
        assert_eq!(toggled.len(), 1);
        assert_eq!(toggled[0].status.symbol(), '?');
    }

    #[test]
    fn test_to_file_line_string_preserves_indent_and_marker() {
        let task = from_line("  * [ ] nested item").unwrap();
        assert_eq!(task.to_file_line_string(), "  * [ ] nested item");
    }
}
