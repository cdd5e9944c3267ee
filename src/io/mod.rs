pub mod config_io;
pub mod vault_io;

pub use config_io::{ConfigError, read_settings};
pub use vault_io::{VaultError, check_line_number, collect_tasks, read_lines, write_lines};
