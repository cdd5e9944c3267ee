use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::model::task::Task;
use crate::query::grouper::Grouper;

/// Multimap from group path to the tasks under it, in emission order.
///
/// Conceptually a tree keyed by successive path segments; stored flat as
/// an ordered map from full path tuple to task indices (tasks are
/// referenced by their index in the input slice, not duplicated). One key
/// per grouping rule, so every path has the same length; a rule producing
/// several keys for a task attaches that task under several paths.
pub struct TaskGroupingTree {
    groups: IndexMap<Vec<String>, Vec<usize>>,
}

impl TaskGroupingTree {
    /// Bucket `tasks` (already sorted) under every group path the rules
    /// produce for them, then order the paths component-wise by each
    /// rule's key ordering.
    pub fn new(groupers: &[Grouper], tasks: &[Task]) -> Self {
        let mut groups: IndexMap<Vec<String>, Vec<usize>> = IndexMap::new();

        for (index, task) in tasks.iter().enumerate() {
            for path in group_paths(groupers, task) {
                groups.entry(path).or_default().push(index);
            }
        }

        groups.sort_by(|path_a, _, path_b, _| {
            for (level, (a, b)) in path_a.iter().zip(path_b.iter()).enumerate() {
                let ordering = groupers[level].compare_keys(a, b);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });

        TaskGroupingTree { groups }
    }

    /// The ordered (path, task indices) pairs.
    pub fn groups(&self) -> &IndexMap<Vec<String>, Vec<usize>> {
        &self.groups
    }
}

/// The cartesian set of group paths for one task: one tuple per
/// combination of keys across the rules. With no rules, the single empty
/// path (everything in one unnamed group).
fn group_paths(groupers: &[Grouper], task: &Task) -> Vec<Vec<String>> {
    let mut paths: Vec<Vec<String>> = vec![Vec::new()];
    for grouper in groupers {
        let keys = grouper.keys(task);
        let mut extended = Vec::with_capacity(paths.len() * keys.len());
        for path in &paths {
            for key in &keys {
                let mut longer = path.clone();
                longer.push(key.clone());
                extended.push(longer);
            }
        }
        paths = extended;
    }
    paths
}
