use serde::Serialize;

use crate::model::task::Task;
use crate::ops::toggle::EditorPosition;
use crate::query::{TaskGroup, TaskGroups};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub description: String,
    pub status: String,
    pub symbol: char,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub path: String,
}

#[derive(Serialize)]
pub struct GroupJson {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<String>,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct QueryReportJson {
    pub groups: Vec<GroupJson>,
    pub total_task_count: usize,
}

#[derive(Serialize)]
pub struct ToggleJson {
    pub lines: Vec<String>,
    pub cursor: CursorJson,
}

#[derive(Serialize)]
pub struct CursorJson {
    pub line: usize,
    pub ch: usize,
}

#[derive(Serialize)]
pub struct ExplainJson {
    pub explanation: String,
}

impl TaskJson {
    pub fn from_task(task: &Task) -> TaskJson {
        TaskJson {
            description: task.description.clone(),
            status: task.status.name().to_string(),
            symbol: task.status.symbol(),
            done: task.status.is_done(),
            priority: task.priority.emoji().map(|_| task.priority.name().to_string()),
            recurrence: task.recurrence.as_ref().map(|r| r.to_text()),
            start: task.start_date.map(|d| d.to_string()),
            created: task.created_date.map(|d| d.to_string()),
            scheduled: task.scheduled_date.map(|d| d.to_string()),
            due: task.due_date.map(|d| d.to_string()),
            done_date: task.done_date.map(|d| d.to_string()),
            tags: task.tags.clone(),
            path: task.location.path().to_string(),
        }
    }
}

impl GroupJson {
    pub fn from_group(group: &TaskGroup) -> GroupJson {
        GroupJson {
            headings: group
                .group_headings
                .iter()
                .map(|h| h.display_name.clone())
                .collect(),
            tasks: group.tasks.iter().map(TaskJson::from_task).collect(),
        }
    }
}

impl QueryReportJson {
    pub fn from_groups(groups: &TaskGroups) -> QueryReportJson {
        QueryReportJson {
            groups: groups.groups().iter().map(GroupJson::from_group).collect(),
            total_task_count: groups.total_tasks_count(),
        }
    }
}

impl From<EditorPosition> for CursorJson {
    fn from(pos: EditorPosition) -> CursorJson {
        CursorJson {
            line: pos.line,
            ch: pos.ch,
        }
    }
}
