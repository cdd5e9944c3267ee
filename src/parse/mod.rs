pub mod task_serializer;

pub use task_serializer::{TaskDetails, deserialize, serialize};

use std::sync::LazyLock;

use regex::Regex;

/// A full task line: `<indent><marker> [<symbol>] <body>`.
/// Spaces between `]` and the body are consumed, so the body starts at its
/// first non-space character.
pub static TASK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)([-*+]) +\[(.)\] *(.*)$").expect("task regex"));

/// A bare list item: marker followed by a space, no checkbox required.
pub static LIST_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*[-*+]) (.*)$").expect("list item regex"));

/// Splits any line into leading indentation and the rest.
pub static INDENTATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)(.*)$").expect("indentation regex"));

/// Inline `#tag` tokens: unicode word characters plus `/`, `_` and `-`.
pub static HASH_TAGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)(#[\p{L}\p{N}_/-]+)").expect("hash tags regex"));

// Trailing field signatures, each anchored at the end of the remaining
// body text. Alternate emoji forms and the U+FE0F variation selector are
// accepted on input; serialization always emits the canonical form.

pub(crate) static DONE_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"✅\x{FE0F}? *(\d{4}-\d{2}-\d{2})$").expect("done date regex"));

pub(crate) static DUE_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[📅📆🗓]\x{FE0F}? *(\d{4}-\d{2}-\d{2})$").expect("due date regex"));

pub(crate) static SCHEDULED_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[⏳⌛]\x{FE0F}? *(\d{4}-\d{2}-\d{2})$").expect("scheduled date regex")
});

pub(crate) static START_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"🛫\x{FE0F}? *(\d{4}-\d{2}-\d{2})$").expect("start date regex"));

pub(crate) static CREATED_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"➕\x{FE0F}? *(\d{4}-\d{2}-\d{2})$").expect("created date regex"));

pub(crate) static RECURRENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"🔁\x{FE0F}? ?([a-zA-Z0-9, !]+)$").expect("recurrence regex"));

pub(crate) static PRIORITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([🔺⏫🔼🔽⏬])\x{FE0F}?$").expect("priority regex"));

pub(crate) static TRAILING_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)(#[\p{L}\p{N}_/-]+)$").expect("trailing tag regex"));
