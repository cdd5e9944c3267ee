use serde::{Deserialize, Serialize};

/// A checkbox status: the symbol inside `[ ]`, a display name, the symbol
/// it transitions to on toggle, and whether it counts as completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    symbol: char,
    name: String,
    next_status_symbol: char,
    is_done: bool,
}

impl Status {
    pub fn new(symbol: char, name: &str, next_status_symbol: char, is_done: bool) -> Self {
        Status {
            symbol,
            name: name.to_string(),
            next_status_symbol,
            is_done,
        }
    }

    /// The built-in `[ ]` status.
    pub fn todo() -> Self {
        Status::new(' ', "Todo", 'x', false)
    }

    /// The built-in `[x]` status.
    pub fn done() -> Self {
        Status::new('x', "Done", ' ', true)
    }

    /// Synthesized status for an unregistered symbol. Its next status is
    /// itself, so toggling garbage input is a no-op rather than a loop
    /// through unrelated statuses.
    pub fn unknown(symbol: char) -> Self {
        Status::new(symbol, "Unknown", symbol, false)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn next_status_symbol(&self) -> char {
        self.next_status_symbol
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }
}

/// The set of known statuses and their toggle transitions.
///
/// There is no global instance: the composition root (the CLI) builds one
/// and passes it by reference into parsing and toggling. Single-writer by
/// design; no interior mutability.
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    statuses: Vec<Status>,
}

impl Default for StatusRegistry {
    fn default() -> Self {
        StatusRegistry {
            statuses: vec![Status::todo(), Status::done()],
        }
    }
}

impl StatusRegistry {
    /// Look up a status by its checkbox symbol. Never fails: unregistered
    /// symbols yield a self-looping "unknown" status.
    pub fn by_symbol(&self, symbol: char) -> Status {
        self.statuses
            .iter()
            .find(|s| s.symbol() == symbol)
            .cloned()
            .unwrap_or_else(|| Status::unknown(symbol))
    }

    /// Register a status, replacing any existing status with the same symbol.
    pub fn add(&mut self, status: Status) {
        if let Some(existing) = self
            .statuses
            .iter_mut()
            .find(|s| s.symbol() == status.symbol())
        {
            *existing = status;
        } else {
            self.statuses.push(status);
        }
    }

    pub fn reset_to_default_statuses(&mut self) {
        self.statuses = StatusRegistry::default().statuses;
    }

    /// The default status for newly created tasks (e.g. the next instance
    /// of a recurring task).
    pub fn todo_status(&self) -> Status {
        self.by_symbol(' ')
    }
}
