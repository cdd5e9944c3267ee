use std::fmt;

use crate::model::task::Task;
use crate::query::grouper::Grouper;
use crate::query::grouping_tree::TaskGroupingTree;
use crate::query::task_group::{GroupDisplayHeadingSelector, TaskGroup};

/// All the groups produced by the `group by` rules of one query, in
/// display order, plus the number of distinct matching tasks.
pub struct TaskGroups {
    groups: Vec<TaskGroup>,
    total_task_count: usize,
}

impl TaskGroups {
    /// Group `tasks` (already filtered and sorted) by the given rules.
    /// With no rules this yields a single heading-less group.
    pub fn new(groupers: &[Grouper], tasks: &[Task]) -> Self {
        // Grouping never changes the number of distinct tasks, but a task
        // may appear in several groups, so summing group sizes can exceed
        // this count.
        let total_task_count = tasks.len();

        let tree = TaskGroupingTree::new(groupers, tasks);
        let mut selector = GroupDisplayHeadingSelector::new();
        let mut groups = Vec::with_capacity(tree.groups().len());
        for (path, indices) in tree.groups() {
            groups.push(TaskGroup {
                groups: path.clone(),
                group_headings: selector.headings_for(path),
                tasks: indices.iter().map(|&i| tasks[i].clone()).collect(),
            });
        }

        TaskGroups {
            groups,
            total_task_count,
        }
    }

    pub fn groups(&self) -> &[TaskGroup] {
        &self.groups
    }

    /// The number of distinct tasks across all groups.
    pub fn total_tasks_count(&self) -> usize {
        self.total_task_count
    }
}

impl fmt::Display for TaskGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            write!(f, "{}", group)?;
            writeln!(f, "---")?;
        }
        writeln!(f)?;
        writeln!(f, "{} tasks", self.total_task_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::Settings;
    use crate::model::status::StatusRegistry;
    use crate::model::task::TaskLocation;
    use pretty_assertions::assert_eq;

    fn task(line: &str) -> Task {
        Task::from_line(
            line,
            TaskLocation::from_unknown_position("x.md"),
            &StatusRegistry::default(),
            &Settings::default(),
        )
        .unwrap()
    }

    fn groupers(properties: &[&str]) -> Vec<Grouper> {
        properties
            .iter()
            .map(|p| Grouper::from_property(p).unwrap())
            .collect()
    }

    #[test]
    fn test_ungrouped_tasks_form_one_unnamed_group() {
        let tasks = vec![task("- [ ] a"), task("- [x] b ✅ 2022-09-04")];
        let groups = TaskGroups::new(&[], &tasks);
        assert_eq!(groups.groups().len(), 1);
        assert!(groups.groups()[0].group_headings.is_empty());
        assert_eq!(groups.total_tasks_count(), 2);
        assert_eq!(
            groups.to_string(),
            "- [ ] a\n- [x] b ✅ 2022-09-04\n---\n\n2 tasks\n"
        );
    }

    #[test]
    fn test_grouped_report_with_collapsed_headings() {
        let tasks = vec![
            task("- [ ] wash up #home"),
            task("- [ ] file report #work"),
            task("- [x] shop #home ✅ 2022-09-04"),
        ];
        let groups = TaskGroups::new(&groupers(&["status", "tags"]), &tasks);
        assert_eq!(
            groups.to_string(),
            "\
#### Done
##### #home
- [x] shop #home ✅ 2022-09-04
---
#### Todo
##### #home
- [ ] wash up #home
---
##### #work
- [ ] file report #work
---

3 tasks
"
        );
    }

    #[test]
    fn test_fanned_out_task_counts_once() {
        let tasks = vec![task("- [ ] a #home #work"), task("- [ ] b #home")];
        let groups = TaskGroups::new(&groupers(&["tags"]), &tasks);
        let shown: usize = groups.groups().iter().map(|g| g.tasks.len()).sum();
        assert_eq!(shown, 3);
        assert_eq!(groups.total_tasks_count(), 2);
    }

    #[test]
    fn test_group_sum_equals_total_for_single_valued_rules() {
        let tasks = vec![task("- [ ] a"), task("- [x] b ✅ 2022-09-04")];
        let groups = TaskGroups::new(&groupers(&["status"]), &tasks);
        let shown: usize = groups.groups().iter().map(|g| g.tasks.len()).sum();
        assert_eq!(shown, groups.total_tasks_count());
    }
}
