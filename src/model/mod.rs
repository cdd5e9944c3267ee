pub mod recurrence;
pub mod settings;
pub mod status;
pub mod task;

pub use recurrence::*;
pub use settings::*;
pub use status::*;
pub use task::*;
