//! taskdown: markdown checklist tasks as data.
//!
//! Parses `- [ ]`-style task lines (with emoji-signified dates, priority,
//! recurrence, and tags), toggles them through a configurable status
//! registry, and filters/groups them with a small line-oriented query
//! language.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod parse;
pub mod query;
