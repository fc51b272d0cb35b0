pub mod task;
pub mod time_entry;
