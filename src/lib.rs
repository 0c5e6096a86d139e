pub mod cli;
pub mod command;
pub mod context;
mod error;

pub use error::{ContextError, Result};
