use chrono::NaiveDate;

use crate::model::settings::Settings;
use crate::model::status::StatusRegistry;
use crate::model::task::{Task, TaskLocation};
use crate::parse::{INDENTATION_REGEX, LIST_ITEM_REGEX, TASK_REGEX};

/// An absolute cursor position. Both coordinates are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorPosition {
    pub line: usize,
    pub ch: usize,
}

/// Optional cursor overrides suggested alongside a replacement block.
/// An unset field falls back to the caller's default (line 0 of the block,
/// the original column) in `new_cursor_position`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorHint {
    pub line: Option<usize>,
    pub ch: Option<usize>,
}

/// The outcome of toggling one line: the replacement lines (always at
/// least one) and a suggested cursor position within them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInsertion {
    pub text: Vec<String>,
    pub move_to: CursorHint,
}

/// Toggle a single line of text.
///
/// Classifies the line and applies the first matching transformation:
///
/// 1. A well-formed task (including the global filter, if set): toggle it,
///    re-serializing every resulting task. Completing a recurring task
///    yields two lines, with the next instance first; the cursor hint
///    points at the last line so the cursor follows the toggled task down.
/// 2. Any other checklist item (filter-less `- [c] text`): swap only the
///    status character through the registry. No dates, no recurrence.
/// 3. A bare list item: insert an empty checkbox after the list marker.
/// 4. Anything else: turn the line into a list item, keeping indentation.
///
/// Total: every input line has a defined output.
pub fn toggle_line(
    line: &str,
    path: &str,
    registry: &StatusRegistry,
    settings: &Settings,
    today: NaiveDate,
) -> EditorInsertion {
    let location = TaskLocation::from_unknown_position(path);
    if let Some(task) = Task::from_line(line, location, registry, settings) {
        let text: Vec<String> = task
            .toggle(registry, today)
            .iter()
            .map(Task::to_file_line_string)
            .collect();
        let move_to = CursorHint {
            line: Some(text.len() - 1),
            ch: None,
        };
        return EditorInsertion { text, move_to };
    }

    if let Some(caps) = TASK_REGEX.captures(line) {
        // A checklist item outside the global filter: cycle the status
        // character, leave the rest of the line alone. The list marker is
        // normalized to `-`.
        let symbol = caps[3].chars().next().unwrap_or(' ');
        let next_symbol = registry.by_symbol(symbol).next_status_symbol();
        let text = vec![format!("{}- [{}] {}", &caps[1], next_symbol, &caps[4])];
        return EditorInsertion {
            text,
            move_to: CursorHint::default(),
        };
    }

    if let Some(caps) = LIST_ITEM_REGEX.captures(line) {
        let text = vec![format!("{} [ ] {}", &caps[1], &caps[2])];
        let ch = text[0].chars().count();
        return EditorInsertion {
            text,
            move_to: CursorHint {
                line: None,
                ch: Some(ch),
            },
        };
    }

    // Plain line: promote to a list item, preserving leading indentation.
    let (indent, rest) = match INDENTATION_REGEX.captures(line) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (String::new(), line.to_string()),
    };
    let text = vec![format!("{}- {}", indent, rest)];
    let ch = text[0].chars().count();
    EditorInsertion {
        text,
        move_to: CursorHint {
            line: None,
            ch: Some(ch),
        },
    }
}

/// Compute the new absolute cursor position after a toggle, assuming the
/// replacement block starts at column 0 of the original line.
///
/// The line offset defaults to 0 and the column to the original column;
/// the column is clamped to the length (in characters) of the target line.
pub fn new_cursor_position(start: EditorPosition, insertion: &EditorInsertion) -> EditorPosition {
    let last_line = insertion.text.len().saturating_sub(1);
    let line = insertion.move_to.line.unwrap_or(0).min(last_line);
    let ch = insertion.move_to.ch.unwrap_or(start.ch);
    let line_len = insertion
        .text
        .get(line)
        .map_or(0, |text| text.chars().count());
    EditorPosition {
        line: start.line + line,
        ch: ch.min(line_len),
    }
}
