mod won;

pub mod helpers;
pub mod op;

pub use won::{Won, WonConversionError};
