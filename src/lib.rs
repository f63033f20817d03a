mod modification_command;

pub use bindery_core::*;
pub use modification_command::*;
