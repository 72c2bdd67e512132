//! One file per subcommand so the match in main stays thin.

mod dump;
mod log;

pub use dump::cmd_dump;
pub use log::cmd_log;
