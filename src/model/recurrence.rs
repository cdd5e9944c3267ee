use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Calendar unit a recurrence advances by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceUnit {
    Days,
    Weeks,
    Months,
    Years,
}

/// A natural-language recurrence rule: `every day`, `every 3 weeks`,
/// `every week on Monday, Friday`, `every weekday`, `every month`,
/// `every year`, each optionally suffixed with `when done`.
///
/// Parsing is total: text that does not match the grammar yields `None`,
/// and a rule whose advancement fails produces no next occurrence. Neither
/// case is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    interval: u32,
    unit: RecurrenceUnit,
    /// Non-empty only for weekly rules pinned to specific weekdays.
    weekdays: Vec<Weekday>,
    /// `when done`: advance from the completion date, not the anchor.
    base_on_today: bool,
}

/// The dates of the next instance of a recurring task. Each field is set
/// only if the corresponding date was set on the original task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub start_date: Option<NaiveDate>,
    pub scheduled_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

impl Recurrence {
    /// Parse rule text (the part after the 🔁 signature).
    pub fn from_text(text: &str) -> Option<Recurrence> {
        let lower = text.trim().to_lowercase();
        let (rule, base_on_today) = match lower.strip_suffix("when done") {
            Some(prefix) => (prefix.trim_end(), true),
            None => (lower.as_str(), false),
        };

        let rest = rule.strip_prefix("every")?.trim_start();
        if rest.is_empty() {
            return None;
        }

        // Optional leading interval: "every 3 days"
        let (interval, rest) = match rest.split_once(' ') {
            Some((first, tail)) => match first.parse::<u32>() {
                Ok(n) if n >= 1 => (n, tail.trim_start()),
                Ok(_) => return None,
                Err(_) => (1, rest),
            },
            None => (1, rest),
        };

        let (unit_word, weekday_list) = match rest.split_once(" on ") {
            Some((unit, days)) => (unit.trim(), Some(days)),
            None => (rest, None),
        };

        let (unit, mut weekdays) = match unit_word {
            "day" | "days" => (RecurrenceUnit::Days, Vec::new()),
            "week" | "weeks" => (RecurrenceUnit::Weeks, Vec::new()),
            "month" | "months" => (RecurrenceUnit::Months, Vec::new()),
            "year" | "years" => (RecurrenceUnit::Years, Vec::new()),
            "weekday" | "weekdays" => (
                RecurrenceUnit::Weeks,
                vec![
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                ],
            ),
            _ => return None,
        };

        if let Some(days) = weekday_list {
            // Only weekly rules can be pinned to weekdays
            if unit != RecurrenceUnit::Weeks || !weekdays.is_empty() {
                return None;
            }
            for name in days.split(',') {
                weekdays.push(parse_weekday(name.trim())?);
            }
            if weekdays.is_empty() {
                return None;
            }
        }

        Some(Recurrence {
            interval,
            unit,
            weekdays,
            base_on_today,
        })
    }

    /// Canonical rule text, suitable for re-serializing the task line.
    pub fn to_text(&self) -> String {
        let mut text = String::from("every ");

        let is_weekday_rule = self.weekdays
            == [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ];

        if is_weekday_rule && self.interval == 1 {
            text.push_str("weekday");
        } else {
            if self.interval != 1 {
                text.push_str(&format!("{} ", self.interval));
            }
            let unit = match (self.unit, self.interval) {
                (RecurrenceUnit::Days, 1) => "day",
                (RecurrenceUnit::Days, _) => "days",
                (RecurrenceUnit::Weeks, 1) => "week",
                (RecurrenceUnit::Weeks, _) => "weeks",
                (RecurrenceUnit::Months, 1) => "month",
                (RecurrenceUnit::Months, _) => "months",
                (RecurrenceUnit::Years, 1) => "year",
                (RecurrenceUnit::Years, _) => "years",
            };
            text.push_str(unit);
            if !self.weekdays.is_empty() {
                text.push_str(" on ");
                let names: Vec<&str> = self.weekdays.iter().map(|d| weekday_name(*d)).collect();
                text.push_str(&names.join(", "));
            }
        }

        if self.base_on_today {
            text.push_str(" when done");
        }
        text
    }

    /// Compute the dates of the next instance.
    ///
    /// The anchor is the due date, else the scheduled date, else the start
    /// date. With no anchor there is nothing to advance and no occurrence
    /// is produced. All set dates shift by the same delta as the anchor,
    /// preserving their relative offsets.
    pub fn next_occurrence(
        &self,
        today: NaiveDate,
        start_date: Option<NaiveDate>,
        scheduled_date: Option<NaiveDate>,
        due_date: Option<NaiveDate>,
    ) -> Option<Occurrence> {
        let anchor = due_date.or(scheduled_date).or(start_date)?;
        let base = if self.base_on_today { today } else { anchor };
        let next = self.advance(base)?;
        let delta = next - anchor;

        let shift = |date: Option<NaiveDate>| -> Option<NaiveDate> {
            date.and_then(|d| d.checked_add_signed(delta))
        };
        Some(Occurrence {
            start_date: shift(start_date),
            scheduled_date: shift(scheduled_date),
            due_date: shift(due_date),
        })
    }

    /// The first date strictly after `base` matching this rule.
    fn advance(&self, base: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            RecurrenceUnit::Days => base.checked_add_days(Days::new(self.interval as u64)),
            RecurrenceUnit::Weeks => {
                if self.weekdays.is_empty() {
                    base.checked_add_days(Days::new(7 * self.interval as u64))
                } else {
                    // Next listed weekday after base, then any whole-week
                    // interval beyond the first
                    let mut next = base.checked_add_days(Days::new(1))?;
                    for _ in 0..7 {
                        if self.weekdays.contains(&next.weekday()) {
                            break;
                        }
                        next = next.checked_add_days(Days::new(1))?;
                    }
                    next.checked_add_days(Days::new(7 * (self.interval as u64 - 1)))
                }
            }
            // chrono clamps to the last valid day of the target month
            RecurrenceUnit::Months => base.checked_add_months(Months::new(self.interval)),
            RecurrenceUnit::Years => base.checked_add_months(Months::new(12 * self.interval)),
        }
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
