use std::cmp::Ordering;

use crate::model::task::Task;

/// A `group by` rule: maps a task to zero or more group-key strings, plus
/// the ordering used for those keys when groups are emitted.
///
/// A rule may produce several keys for one task (grouping by tag fans a
/// task out into one group per tag); such tasks are rendered once per
/// group but counted once in totals.
pub struct Grouper {
    property: String,
    keys: fn(&Task) -> Vec<String>,
    compare: fn(&str, &str) -> Ordering,
}

impl Grouper {
    fn new(property: &str, keys: fn(&Task) -> Vec<String>) -> Self {
        Grouper {
            property: property.to_string(),
            keys,
            compare: |a, b| a.cmp(b),
        }
    }

    /// The `group by` property name this rule was built from.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The group keys this task belongs under.
    pub fn keys(&self, task: &Task) -> Vec<String> {
        (self.keys)(task)
    }

    /// Ordering of two keys at this rule's level of the group path.
    pub fn compare_keys(&self, a: &str, b: &str) -> Ordering {
        (self.compare)(a, b)
    }

    /// Look up a built-in rule by its `group by` property name.
    pub fn from_property(property: &str) -> Option<Grouper> {
        match property {
            "status" => Some(Grouper::new("status", |task| {
                vec![task.status.name().to_string()]
            })),
            "priority" => Some(Grouper {
                property: "priority".to_string(),
                keys: |task| vec![task.priority.name().to_string()],
                // Highest first, not alphabetical
                compare: |a, b| priority_rank(a).cmp(&priority_rank(b)),
            }),
            "tag" | "tags" => Some(Grouper::new("tags", |task| {
                if task.tags.is_empty() {
                    vec!["(No tags)".to_string()]
                } else {
                    task.tags.iter().map(|tag| format!("#{}", tag)).collect()
                }
            })),
            "path" => Some(Grouper::new("path", |task| {
                let path = task.location.path();
                vec![path.strip_suffix(".md").unwrap_or(path).to_string()]
            })),
            "folder" => Some(Grouper::new("folder", |task| {
                let path = task.location.path();
                match path.rfind('/') {
                    Some(idx) => vec![path[..idx + 1].to_string()],
                    None => vec!["/".to_string()],
                }
            })),
            "filename" => Some(Grouper::new("filename", |task| {
                let path = task.location.path();
                let name = path.rsplit('/').next().unwrap_or(path);
                vec![name.strip_suffix(".md").unwrap_or(name).to_string()]
            })),
            "due" => Some(Grouper::new("due", |task| {
                vec![date_key(task.due_date, "No due date")]
            })),
            "scheduled" => Some(Grouper::new("scheduled", |task| {
                vec![date_key(task.scheduled_date, "No scheduled date")]
            })),
            "start" => Some(Grouper::new("start", |task| {
                vec![date_key(task.start_date, "No start date")]
            })),
            "done" => Some(Grouper::new("done", |task| {
                vec![date_key(task.done_date, "No done date")]
            })),
            "recurring" => Some(Grouper::new("recurring", |task| {
                if task.recurrence.is_some() {
                    vec!["Recurring".to_string()]
                } else {
                    vec!["Not Recurring".to_string()]
                }
            })),
            _ => None,
        }
    }
}

fn date_key(date: Option<chrono::NaiveDate>, absent: &str) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => absent.to_string(),
    }
}

fn priority_rank(name: &str) -> u8 {
    match name {
        "Highest" => 0,
        "High" => 1,
        "Medium" => 2,
        "None" => 3,
        "Low" => 4,
        "Lowest" => 5,
        _ => u8::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::Settings;
    use crate::model::status::StatusRegistry;
    use crate::model::task::TaskLocation;

    fn task(line: &str, path: &str) -> Task {
        Task::from_line(
            line,
            TaskLocation::from_unknown_position(path),
            &StatusRegistry::default(),
            &Settings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_status_grouper() {
        let grouper = Grouper::from_property("status").unwrap();
        assert_eq!(grouper.keys(&task("- [ ] a", "x.md")), vec!["Todo"]);
        assert_eq!(grouper.keys(&task("- [x] a", "x.md")), vec!["Done"]);
    }

    #[test]
    fn test_tags_grouper_fans_out() {
        let grouper = Grouper::from_property("tags").unwrap();
        assert_eq!(
            grouper.keys(&task("- [ ] a #home #work", "x.md")),
            vec!["#home", "#work"]
        );
        assert_eq!(grouper.keys(&task("- [ ] a", "x.md")), vec!["(No tags)"]);
    }

    #[test]
    fn test_path_groupers() {
        let t = task("- [ ] a", "notes/daily/2022-09-04.md");
        assert_eq!(
            Grouper::from_property("path").unwrap().keys(&t),
            vec!["notes/daily/2022-09-04"]
        );
        assert_eq!(
            Grouper::from_property("folder").unwrap().keys(&t),
            vec!["notes/daily/"]
        );
        assert_eq!(
            Grouper::from_property("filename").unwrap().keys(&t),
            vec!["2022-09-04"]
        );
        assert_eq!(
            Grouper::from_property("folder")
                .unwrap()
                .keys(&task("- [ ] a", "root.md")),
            vec!["/"]
        );
    }

    #[test]
    fn test_priority_key_order() {
        let grouper = Grouper::from_property("priority").unwrap();
        assert_eq!(grouper.compare_keys("High", "Low"), Ordering::Less);
        assert_eq!(grouper.compare_keys("None", "Highest"), Ordering::Greater);
    }

    #[test]
    fn test_unknown_property() {
        assert!(Grouper::from_property("flavour").is_none());
    }
}
