pub mod deadline;
pub mod time_utils;

pub use deadline::with_deadline;
