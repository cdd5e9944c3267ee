//! Scenario tests for toggling a single line, editor-style.
//!
//! A `|` in the input marks the cursor column; the expected string embeds
//! a `|` where the cursor should land after the toggle. The clock is
//! pinned to 2022-09-04.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use taskdown::model::settings::{Settings, StatusEntry};
use taskdown::ops::toggle::{EditorPosition, new_cursor_position, toggle_line};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 9, 4).unwrap()
}

fn toggle_marked(marked: &str, settings: &Settings) -> String {
    let byte = marked.find('|').expect("input needs a | cursor marker");
    let ch = marked[..byte].chars().count();
    let line = marked.replacen('|', "", 1);

    let registry = settings.status_registry();
    let insertion = toggle_line(&line, "todo.md", &registry, settings, today());
    let pos = new_cursor_position(EditorPosition { line: 0, ch }, &insertion);

    let mut lines = insertion.text;
    let target = &mut lines[pos.line];
    let insert_at = target
        .char_indices()
        .nth(pos.ch)
        .map_or(target.len(), |(i, _)| i);
    target.insert(insert_at, '|');
    lines.join("\n")
}

fn check(input: &str, expected: &str) {
    assert_eq!(toggle_marked(input, &Settings::default()), expected);
}

#[test]
fn plain_text_becomes_a_list_item_with_cursor_at_end() {
    check("|", "- |");
    check("|foobar", "- foobar|");
    check("foo|bar", "- foobar|");
    check("    |indented", "    - indented|");
}

#[test]
fn list_item_gains_an_empty_checkbox() {
    check("- |", "- [ ] |");
    check("|- foobar", "- [ ] foobar|");
    check("- foo|bar", "- [ ] foobar|");
}

#[test]
fn empty_task_completes_with_cursor_before_done_date() {
    check("- [ ] |", "- [x] | ✅ 2022-09-04");
}

#[test]
fn task_completes_in_place_keeping_cursor_column() {
    check("|- [ ] foobar", "|- [x] foobar ✅ 2022-09-04");
    check("- [ ] foo|bar", "- [x] foo|bar ✅ 2022-09-04");
}

#[test]
fn completed_task_reopens_and_drops_done_date() {
    check("- [x] foobar ✅ 2022-09-04|", "- [ ] foobar|");
    check("- [x] |foobar ✅ 2022-09-04", "- [ ] |foobar");
}

#[test]
fn asterisk_task_marker_is_preserved() {
    check("* [ ] foo|", "* [x] foo| ✅ 2022-09-04");
}

#[test]
fn completing_a_recurring_task_inserts_the_next_instance_above() {
    check(
        "|- [ ] water 🔁 every day 📅 2022-09-04",
        "- [ ] water 🔁 every day 📅 2022-09-05\n\
         |- [x] water 🔁 every day 📅 2022-09-04 ✅ 2022-09-04",
    );
}

#[test]
fn unknown_status_symbol_loops_back_to_itself() {
    check("- [?] |huh", "- [?] |huh");
}

#[test]
fn custom_statuses_cycle_through_the_configured_chain() {
    let settings = Settings {
        statuses: vec![
            StatusEntry {
                symbol: 'P',
                name: "Pro".to_string(),
                next_status_symbol: 'C',
                is_done: false,
            },
            StatusEntry {
                symbol: 'C',
                name: "Con".to_string(),
                next_status_symbol: 'P',
                is_done: false,
            },
        ],
        ..Default::default()
    };
    assert_eq!(
        toggle_marked("- [P] |proposal", &settings),
        "- [C] |proposal"
    );
    assert_eq!(
        toggle_marked("- [C] |proposal", &settings),
        "- [P] |proposal"
    );
}

#[test]
fn line_outside_the_global_filter_only_cycles_the_checkbox() {
    let settings = Settings {
        global_filter: "#task".to_string(),
        ..Default::default()
    };
    // No done date, no recurrence handling
    assert_eq!(
        toggle_marked("|- [ ] stuff 📅 2022-09-04", &settings),
        "|- [x] stuff 📅 2022-09-04"
    );
    assert_eq!(
        toggle_marked("|- [x] stuff ✅ 2022-09-04", &settings),
        "|- [ ] stuff ✅ 2022-09-04"
    );
}

#[test]
fn line_matching_the_global_filter_is_a_full_task() {
    let settings = Settings {
        global_filter: "#task".to_string(),
        ..Default::default()
    };
    assert_eq!(
        toggle_marked("|- [ ] #task stuff", &settings),
        "|- [x] #task stuff ✅ 2022-09-04"
    );
}
