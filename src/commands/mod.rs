pub mod options;
pub mod utils;

pub use options::run_command;
