use chrono::NaiveDate;

use crate::model::recurrence::Recurrence;
use crate::model::task::{Priority, Task};
use crate::parse::{
    CREATED_DATE_REGEX, DONE_DATE_REGEX, DUE_DATE_REGEX, HASH_TAGS_REGEX, PRIORITY_REGEX,
    RECURRENCE_REGEX, SCHEDULED_DATE_REGEX, START_DATE_REGEX, TRAILING_TAG_REGEX,
};

/// The fields of a task that can be parsed from the text after the
/// checkbox. An intermediate parse result with no identity of its own;
/// `Task::from_line` combines it with the status and location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDetails {
    pub description: String,
    pub priority: Priority,
    pub start_date: Option<NaiveDate>,
    pub created_date: Option<NaiveDate>,
    pub scheduled_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub done_date: Option<NaiveDate>,
    pub recurrence: Option<Recurrence>,
    pub tags: Vec<String>,
}

/// Parse the text after the checkbox into task fields.
///
/// Field signatures are stripped from the end of the line one at a time,
/// so they are accepted in any order on input. Trailing `#tags` are set
/// aside during stripping (so signatures written before them still parse)
/// and reattached to the end of the description. Whatever remains, trimmed,
/// is the description; tags stay inline in it.
pub fn deserialize(body: &str) -> TaskDetails {
    let mut line = body.trim().to_string();
    let mut details = TaskDetails::default();
    let mut trailing_tags = String::new();
    let mut rule_text: Option<String> = None;

    // Bounded: each pass strips at most one signature.
    for _ in 0..20 {
        let matched_len: Option<usize> = if let Some(caps) = PRIORITY_REGEX.captures(&line) {
            details.priority = Priority::from_emoji(&caps[1]).unwrap_or_default();
            Some(caps[0].len())
        } else if let Some(caps) = DONE_DATE_REGEX.captures(&line) {
            details.done_date = parse_date(&caps[1]);
            Some(caps[0].len())
        } else if let Some(caps) = DUE_DATE_REGEX.captures(&line) {
            details.due_date = parse_date(&caps[1]);
            Some(caps[0].len())
        } else if let Some(caps) = SCHEDULED_DATE_REGEX.captures(&line) {
            details.scheduled_date = parse_date(&caps[1]);
            Some(caps[0].len())
        } else if let Some(caps) = START_DATE_REGEX.captures(&line) {
            details.start_date = parse_date(&caps[1]);
            Some(caps[0].len())
        } else if let Some(caps) = CREATED_DATE_REGEX.captures(&line) {
            details.created_date = parse_date(&caps[1]);
            Some(caps[0].len())
        } else if let Some(caps) = RECURRENCE_REGEX.captures(&line) {
            rule_text = Some(caps[1].trim().to_string());
            Some(caps[0].len())
        } else if let Some(caps) = TRAILING_TAG_REGEX.captures(&line) {
            let tag = caps[2].to_string();
            trailing_tags = if trailing_tags.is_empty() {
                tag
            } else {
                format!("{} {}", tag, trailing_tags)
            };
            Some(caps[2].len())
        } else {
            None
        };

        match matched_len {
            Some(len) => {
                line.truncate(line.len() - len);
                let trimmed = line.trim_end().len();
                line.truncate(trimmed);
            }
            None => break,
        }
    }

    let mut description = line.trim().to_string();
    if !trailing_tags.is_empty() {
        if description.is_empty() {
            description = trailing_tags;
        } else {
            description = format!("{} {}", description, trailing_tags);
        }
    }

    // A malformed rule is not an error; the signature is consumed and no
    // recurrence is attached.
    details.recurrence = rule_text.as_deref().and_then(Recurrence::from_text);
    details.tags = HASH_TAGS_REGEX
        .captures_iter(&description)
        .map(|caps| caps[2][1..].to_string())
        .collect();
    details.description = description;
    details
}

/// Render the text after the checkbox for a task.
///
/// Fields are emitted in a fixed order — description (tags inline),
/// priority, recurrence, start, created, scheduled, due, done — separated
/// by single spaces, absent fields omitted entirely. Inverse of
/// `deserialize`: re-parsing the output reconstructs the same fields.
pub fn serialize(task: &Task) -> String {
    let mut components = vec![task.description.clone()];

    if let Some(emoji) = task.priority.emoji() {
        components.push(emoji.to_string());
    }
    if let Some(rule) = &task.recurrence {
        components.push(format!("🔁 {}", rule.to_text()));
    }
    if let Some(date) = task.start_date {
        components.push(format!("🛫 {}", date.format("%Y-%m-%d")));
    }
    if let Some(date) = task.created_date {
        components.push(format!("➕ {}", date.format("%Y-%m-%d")));
    }
    if let Some(date) = task.scheduled_date {
        components.push(format!("⏳ {}", date.format("%Y-%m-%d")));
    }
    if let Some(date) = task.due_date {
        components.push(format!("📅 {}", date.format("%Y-%m-%d")));
    }
    if let Some(date) = task.done_date {
        components.push(format!("✅ {}", date.format("%Y-%m-%d")));
    }

    components.join(" ")
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}
