pub mod toggle;

pub use toggle::{CursorHint, EditorInsertion, EditorPosition, new_cursor_position, toggle_line};
