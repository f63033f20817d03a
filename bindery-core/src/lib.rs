mod as_value;
mod column;
mod column_modification;
mod entity_state;
mod parameter_name_generator;
mod property;
mod state_entry;
mod table_ref;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use column::*;
pub use column_modification::*;
pub use entity_state::*;
pub use parameter_name_generator::*;
pub use property::*;
pub use state_entry::*;
pub use table_ref::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
